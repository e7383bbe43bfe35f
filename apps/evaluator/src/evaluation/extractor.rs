//! Response Extractor — turns free-form model output into an `AssessmentRecord`.
//!
//! Model output is not guaranteed to be clean JSON, so extraction runs in two
//! ordered attempts:
//! 1. Greedy span: first `{` through the *last* `}` in the text. Handles prose
//!    or code fences before and after the payload.
//! 2. Only when no such span exists: the whole text is decoded as-is.
//!
//! Known limitation: two independent objects separated by prose form a single
//! greedy span that is not valid JSON, which is reported as `Malformed`.

use thiserror::Error;

use crate::evaluation::assessment::AssessmentRecord;

/// Why a response produced no record. All variants mean "evaluation
/// unavailable" to the caller; they differ only for diagnostics.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("malformed JSON payload: {0}")]
    Malformed(#[source] serde_json::Error),

    #[error("no JSON payload found in response: {0}")]
    NoPayload(#[source] serde_json::Error),

    #[error("JSON payload contained none of the assessment fields")]
    EmptyRecord,
}

/// Extracts the assessment embedded in `text`. Never panics.
pub fn extract_assessment(text: &str) -> Result<AssessmentRecord, ExtractionError> {
    let record = match greedy_object_span(text) {
        Some(span) => {
            serde_json::from_str::<AssessmentRecord>(span).map_err(ExtractionError::Malformed)?
        }
        None => serde_json::from_str::<AssessmentRecord>(text.trim())
            .map_err(ExtractionError::NoPayload)?,
    };

    if record.is_empty() {
        return Err(ExtractionError::EmptyRecord);
    }
    Ok(record)
}

/// Text from the first `{` to the last `}`, inclusive.
fn greedy_object_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::assessment::{Verdict, VerdictKind};

    const PAYLOAD: &str = r#"{"match_score": 85, "summary": "Good fit", "strengths": ["Python","SQL"], "missing_requirements": [], "verdict": "strong match"}"#;

    fn assert_expected_fields(record: &AssessmentRecord) {
        assert_eq!(record.score, Some(85));
        assert_eq!(record.summary.as_deref(), Some("Good fit"));
        assert_eq!(record.strengths, vec!["Python", "SQL"]);
        assert!(record.missing_requirements.is_empty());
        assert_eq!(record.verdict, Some(Verdict::new("strong match")));
    }

    #[test]
    fn test_extracts_payload_wrapped_in_prose() {
        let text = format!("Here is my assessment:\n\n{PAYLOAD}\n\nLet me know if you need more.");
        let record = extract_assessment(&text).unwrap();
        assert_expected_fields(&record);
    }

    #[test]
    fn test_pure_json_matches_wrapped_result() {
        let wrapped = extract_assessment(&format!("Sure! {PAYLOAD} Done.")).unwrap();
        let pure = extract_assessment(PAYLOAD).unwrap();
        assert_eq!(pure, wrapped);
    }

    #[test]
    fn test_extracts_payload_inside_code_fence() {
        let text = format!("```json\n{PAYLOAD}\n```");
        assert_expected_fields(&extract_assessment(&text).unwrap());
    }

    #[test]
    fn test_span_is_greedy_over_nested_objects() {
        let text = r#"Result: {"match_score": 10, "summary": "{weak} candidate", "verdict": "not a match"} end"#;
        let record = extract_assessment(text).unwrap();
        assert_eq!(record.summary.as_deref(), Some("{weak} candidate"));
        assert_eq!(record.verdict.unwrap().kind(), VerdictKind::NotAMatch);
    }

    #[test]
    fn test_plain_prose_yields_no_payload() {
        let err = extract_assessment("I am unable to evaluate this candidate.").unwrap_err();
        assert!(matches!(err, ExtractionError::NoPayload(_)), "{err:?}");
    }

    #[test]
    fn test_empty_text_yields_no_payload() {
        assert!(matches!(
            extract_assessment(""),
            Err(ExtractionError::NoPayload(_))
        ));
    }

    #[test]
    fn test_closing_brace_before_opening_falls_back_to_whole_text() {
        assert!(matches!(
            extract_assessment("} nothing here {"),
            Err(ExtractionError::NoPayload(_))
        ));
    }

    #[test]
    fn test_broken_json_is_malformed() {
        let err = extract_assessment(r#"Answer: {"match_score": 85, "summary": } bye"#).unwrap_err();
        assert!(matches!(err, ExtractionError::Malformed(_)), "{err:?}");
    }

    #[test]
    fn test_two_separate_objects_are_malformed() {
        let text = format!("First: {PAYLOAD}\nSecond opinion: {PAYLOAD}");
        assert!(matches!(
            extract_assessment(&text),
            Err(ExtractionError::Malformed(_))
        ));
    }

    #[test]
    fn test_out_of_range_score_is_malformed() {
        let text = r#"{"match_score": 150, "verdict": "strong match"}"#;
        assert!(matches!(
            extract_assessment(text),
            Err(ExtractionError::Malformed(_))
        ));
    }

    #[test]
    fn test_empty_object_is_rejected() {
        assert!(matches!(
            extract_assessment("Nothing to report: {}"),
            Err(ExtractionError::EmptyRecord)
        ));
    }

    #[test]
    fn test_unknown_keys_are_ignored_and_unknown_verdict_kept() {
        let text = r#"{"match_score": 55, "confidence": "high", "verdict": "needs interview"}"#;
        let record = extract_assessment(text).unwrap();
        assert_eq!(record.score, Some(55));
        let verdict = record.verdict.unwrap();
        assert_eq!(verdict.kind(), VerdictKind::Unrecognized);
        assert_eq!(verdict.as_str(), "needs interview");
    }
}
