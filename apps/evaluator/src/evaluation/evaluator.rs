//! Evaluation Orchestrator — runs every CV against one job description.
//!
//! Flow per candidate: build_prompt → persist prompt → model invoke →
//!       extract_assessment → persist record + Markdown/HTML reports.
//!
//! Candidates are processed strictly one after another. A failure for one
//! candidate is recorded in the `BatchSummary` and never stops the batch.

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::errors::AppError;
use crate::evaluation::assessment::AssessmentRecord;
use crate::evaluation::extractor::extract_assessment;
use crate::evaluation::prompts::build_prompt;
use crate::evaluation::report::ReportFormat;
use crate::evaluation::store::ArtifactStore;
use crate::llm_client::ModelInvoker;

pub const DEFAULT_TEMPERATURE: f32 = 0.3;

/// Knobs the evaluator reads. Built from `Config`, never from the environment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvaluationSettings {
    pub temperature: f32,
}

impl Default for EvaluationSettings {
    fn default() -> Self {
        Self {
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

/// One CV to evaluate. `number` names its output files (`cv<number>.*`).
#[derive(Debug, Clone)]
pub struct CandidateCv {
    pub number: usize,
    pub text: String,
}

#[derive(Debug, Clone)]
pub struct CandidateFailure {
    pub number: usize,
    /// `AppError::code()` of the failure, e.g. `EXTRACTION_ERROR`.
    pub code: &'static str,
    pub reason: String,
}

#[derive(Debug, Default)]
pub struct BatchSummary {
    pub succeeded: Vec<usize>,
    pub failed: Vec<CandidateFailure>,
}

impl BatchSummary {
    pub fn total(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }
}

pub struct Evaluator {
    invoker: Arc<dyn ModelInvoker>,
    store: ArtifactStore,
    settings: EvaluationSettings,
}

impl Evaluator {
    pub fn new(
        invoker: Arc<dyn ModelInvoker>,
        store: ArtifactStore,
        settings: EvaluationSettings,
    ) -> Self {
        Self {
            invoker,
            store,
            settings,
        }
    }

    /// Evaluates one CV and persists its record and reports.
    /// Returns the record only if every artifact was written.
    pub async fn evaluate_candidate(
        &self,
        job_description: &str,
        candidate: &CandidateCv,
    ) -> Result<AssessmentRecord, AppError> {
        let number = candidate.number;
        info!("Evaluating CV {number}");

        let prompt = build_prompt(job_description, &candidate.text);
        let prompt_path = self.store.write_prompt(number, &prompt).await?;
        info!("Prompt for CV {number} saved to {}", prompt_path.display());

        let response = self
            .invoker
            .invoke(&prompt, self.settings.temperature)
            .await?;

        let record = match extract_assessment(&response) {
            Ok(record) => record,
            Err(e) => {
                warn!("Could not extract assessment for CV {number}: {e}");
                warn!("Raw model response for CV {number}:\n{response}");
                return Err(e.into());
            }
        };

        let record_path = self.store.write_record(number, &record).await?;
        info!("JSON result for CV {number} saved to {}", record_path.display());

        for format in ReportFormat::ALL {
            let report = format.render(number, Some(&record))?;
            let path = self.store.write_report(number, format, &report).await?;
            info!("Report for CV {number} saved to {}", path.display());
        }

        Ok(record)
    }

    /// Evaluates every candidate in order and reports which ones failed.
    pub async fn evaluate_batch(
        &self,
        job_description: &str,
        candidates: &[CandidateCv],
    ) -> BatchSummary {
        let mut summary = BatchSummary::default();

        for candidate in candidates {
            match self.evaluate_candidate(job_description, candidate).await {
                Ok(record) => {
                    info!(
                        "CV {} evaluated: score={}, verdict={}",
                        candidate.number,
                        record
                            .score
                            .map(|s| s.to_string())
                            .unwrap_or_else(|| "N/A".to_string()),
                        record.verdict.as_ref().map(|v| v.as_str()).unwrap_or("N/A"),
                    );
                    summary.succeeded.push(candidate.number);
                }
                Err(e) => {
                    error!("Evaluation of CV {} failed [{}]: {e}", candidate.number, e.code());
                    self.persist_failure(candidate.number).await;
                    summary.failed.push(CandidateFailure {
                        number: candidate.number,
                        code: e.code(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        summary
    }

    /// Best effort: replaces any stale record with failure reports.
    async fn persist_failure(&self, number: usize) {
        if let Err(e) = self.store.discard_record(number).await {
            warn!("Could not remove stale record for CV {number}: {e}");
        }
        for format in ReportFormat::ALL {
            let report = match format.render(number, None) {
                Ok(report) => report,
                Err(e) => {
                    warn!("Could not render failure report for CV {number}: {e}");
                    continue;
                }
            };
            if let Err(e) = self.store.write_report(number, format, &report).await {
                warn!("Could not write failure report for CV {number}: {e}");
            }
        }
    }
}
