//! Report Renderer — Markdown and HTML views of one `AssessmentRecord`.
//!
//! Both renderers are pure functions of the candidate number and the record.
//! `None` means extraction failed and yields a minimal failure document.
//! Layouts live in `templates/`; askama escapes model text in the `.html`
//! templates and leaves the `.md` ones verbatim.

use askama::Template;

use crate::evaluation::assessment::{AssessmentRecord, Verdict, VerdictKind};

pub const NOT_AVAILABLE: &str = "N/A";
pub const SUMMARY_PLACEHOLDER: &str = "not available";
pub const NO_STRENGTHS_PLACEHOLDER: &str = "no strengths identified";
/// Shown when the model listed no gaps. This asserts completeness from an
/// absence of evidence; the wording is kept as product copy.
pub const NO_MISSING_REQUIREMENTS_PLACEHOLDER: &str = "all key requirements satisfied";
pub const FAILURE_MESSAGE: &str = "The evaluation could not be generated";
const FOOTER: &str = "Generated by the AI CV evaluator";

/// Neutral accent for absent or unrecognized verdicts.
pub const DEFAULT_ACCENT: &str = "#6c757d";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Markdown,
    Html,
}

impl ReportFormat {
    pub const ALL: [ReportFormat; 2] = [ReportFormat::Markdown, ReportFormat::Html];

    pub fn extension(self) -> &'static str {
        match self {
            ReportFormat::Markdown => "md",
            ReportFormat::Html => "html",
        }
    }

    pub fn render(
        self,
        cv_number: usize,
        record: Option<&AssessmentRecord>,
    ) -> askama::Result<String> {
        match self {
            ReportFormat::Markdown => render_markdown(cv_number, record),
            ReportFormat::Html => render_html(cv_number, record),
        }
    }
}

/// Presentation accent for a verdict in the HTML report.
pub fn verdict_accent(verdict: Option<&Verdict>) -> &'static str {
    match verdict.map(Verdict::kind) {
        Some(VerdictKind::StrongMatch) => "#28a745",
        Some(VerdictKind::PossibleMatch) => "#ffc107",
        Some(VerdictKind::NotAMatch) => "#dc3545",
        Some(VerdictKind::Unrecognized) | None => DEFAULT_ACCENT,
    }
}

/// Record fields with placeholders substituted, shared by both layouts.
struct ReportView<'a> {
    score: Option<u8>,
    verdict: &'a str,
    accent: &'static str,
    summary: &'a str,
    strengths: Vec<String>,
    missing_requirements: Vec<String>,
    not_available: &'static str,
    no_strengths: &'static str,
    no_missing_requirements: &'static str,
    footer: &'static str,
}

impl<'a> ReportView<'a> {
    fn new(record: &'a AssessmentRecord) -> Self {
        Self {
            score: record.score,
            verdict: record
                .verdict
                .as_ref()
                .map(Verdict::as_str)
                .unwrap_or(NOT_AVAILABLE),
            accent: verdict_accent(record.verdict.as_ref()),
            summary: record.summary.as_deref().unwrap_or(SUMMARY_PLACEHOLDER),
            strengths: list_items(&record.strengths),
            missing_requirements: list_items(&record.missing_requirements),
            not_available: NOT_AVAILABLE,
            no_strengths: NO_STRENGTHS_PLACEHOLDER,
            no_missing_requirements: NO_MISSING_REQUIREMENTS_PLACEHOLDER,
            footer: FOOTER,
        }
    }
}

/// One bullet per item: embedded line breaks would otherwise end the bullet.
fn list_items(items: &[String]) -> Vec<String> {
    items
        .iter()
        .map(|item| item.split_whitespace().collect::<Vec<_>>().join(" "))
        .collect()
}

#[derive(Template)]
#[template(path = "report.md")]
struct MarkdownReport<'a> {
    cv_number: usize,
    view: ReportView<'a>,
}

#[derive(Template)]
#[template(path = "report.html")]
struct HtmlReport<'a> {
    cv_number: usize,
    view: ReportView<'a>,
}

#[derive(Template)]
#[template(path = "failure.md")]
struct MarkdownFailure {
    cv_number: usize,
    message: &'static str,
}

#[derive(Template)]
#[template(path = "failure.html")]
struct HtmlFailure {
    cv_number: usize,
    message: &'static str,
}

pub fn render_markdown(
    cv_number: usize,
    record: Option<&AssessmentRecord>,
) -> askama::Result<String> {
    match record {
        Some(record) => MarkdownReport {
            cv_number,
            view: ReportView::new(record),
        }
        .render(),
        None => MarkdownFailure {
            cv_number,
            message: FAILURE_MESSAGE,
        }
        .render(),
    }
}

pub fn render_html(cv_number: usize, record: Option<&AssessmentRecord>) -> askama::Result<String> {
    match record {
        Some(record) => HtmlReport {
            cv_number,
            view: ReportView::new(record),
        }
        .render(),
        None => HtmlFailure {
            cv_number,
            message: FAILURE_MESSAGE,
        }
        .render(),
    }
}
