//! Assessment Record — the structured outcome of comparing one CV against one
//! job description. Shared by the extractor, the renderers and the store.

use serde::{de, Deserialize, Deserializer, Serialize};

/// Upper bound of `match_score`; the lower bound is 0.
pub const MAX_SCORE: u8 = 100;

/// The three verdicts the prompt asks for, plus everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerdictKind {
    StrongMatch,
    PossibleMatch,
    NotAMatch,
    Unrecognized,
}

impl VerdictKind {
    /// Matches the three known labels ignoring case, surrounding whitespace and
    /// `-`/`_` separators ("Strong-Match" is `StrongMatch`).
    pub fn classify(label: &str) -> Self {
        let normalized = label
            .to_lowercase()
            .replace(['-', '_'], " ")
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");
        match normalized.as_str() {
            "strong match" => VerdictKind::StrongMatch,
            "possible match" => VerdictKind::PossibleMatch,
            "not a match" => VerdictKind::NotAMatch,
            _ => VerdictKind::Unrecognized,
        }
    }
}

/// Hiring recommendation returned by the model.
///
/// The label is kept exactly as the model wrote it and is what gets rendered
/// and persisted. `kind` only drives presentation, so an unknown label still
/// produces a usable record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Verdict {
    kind: VerdictKind,
    label: String,
}

impl Verdict {
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            kind: VerdictKind::classify(&label),
            label,
        }
    }

    pub fn kind(&self) -> VerdictKind {
        self.kind
    }

    pub fn as_str(&self) -> &str {
        &self.label
    }
}

impl From<String> for Verdict {
    fn from(label: String) -> Self {
        Verdict::new(label)
    }
}

impl From<Verdict> for String {
    fn from(verdict: Verdict) -> Self {
        verdict.label
    }
}

/// One evaluation result. Field order here is the serialized field order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentRecord {
    #[serde(
        rename = "match_score",
        default,
        deserialize_with = "deserialize_score"
    )]
    pub score: Option<u8>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "deserialize_items")]
    pub strengths: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_items")]
    pub missing_requirements: Vec<String>,
    #[serde(default)]
    pub verdict: Option<Verdict>,
}

impl AssessmentRecord {
    /// True when the model returned an object with none of the assessment fields.
    pub fn is_empty(&self) -> bool {
        self.score.is_none()
            && self.summary.is_none()
            && self.strengths.is_empty()
            && self.missing_requirements.is_empty()
            && self.verdict.is_none()
    }
}

/// Scores as the model may send them: `85`, `85.0` or `"85"`.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawScore {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl RawScore {
    /// Whole-number value, if the raw score is one.
    fn whole(&self) -> Option<i64> {
        let float = match self {
            RawScore::Integer(v) => return Some(*v),
            RawScore::Float(v) => *v,
            RawScore::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        (float.is_finite() && float.fract() == 0.0).then_some(float as i64)
    }
}

fn deserialize_score<'de, D>(deserializer: D) -> Result<Option<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<RawScore>::deserialize(deserializer)? else {
        return Ok(None);
    };
    let whole = raw
        .whole()
        .ok_or_else(|| de::Error::custom("match_score is not a whole number"))?;
    u8::try_from(whole)
        .ok()
        .filter(|score| *score <= MAX_SCORE)
        .map(Some)
        .ok_or_else(|| de::Error::custom(format!("match_score {whole} is outside 0-{MAX_SCORE}")))
}

/// `null` and a missing list both mean "nothing reported".
fn deserialize_items<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> AssessmentRecord {
        AssessmentRecord {
            score: Some(85),
            summary: Some("Good fit".to_string()),
            strengths: vec!["Python".to_string(), "SQL".to_string()],
            missing_requirements: vec![],
            verdict: Some(Verdict::new("strong match")),
        }
    }

    #[test]
    fn test_record_roundtrip() {
        let record = sample_record();
        let json = serde_json::to_string(&record).unwrap();
        let back: AssessmentRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_record_roundtrip_keeps_unrecognized_verdict_and_absent_fields() {
        let record = AssessmentRecord {
            score: None,
            summary: None,
            strengths: vec![],
            missing_requirements: vec!["Docker".to_string()],
            verdict: Some(Verdict::new("maybe later")),
        };
        let json = serde_json::to_string(&record).unwrap();
        let back: AssessmentRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_serialized_field_order_is_stable() {
        let json = serde_json::to_string(&sample_record()).unwrap();
        let positions: Vec<usize> = [
            "\"match_score\"",
            "\"summary\"",
            "\"strengths\"",
            "\"missing_requirements\"",
            "\"verdict\"",
        ]
        .iter()
        .map(|key| json.find(key).unwrap())
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{json}");
    }

    #[test]
    fn test_absent_fields_serialize_as_null() {
        let record = AssessmentRecord {
            score: None,
            summary: None,
            strengths: vec![],
            missing_requirements: vec![],
            verdict: None,
        };
        let value = serde_json::to_value(&record).unwrap();
        assert!(value["match_score"].is_null());
        assert!(value["verdict"].is_null());
        assert_eq!(value["strengths"], serde_json::json!([]));
    }

    #[test]
    fn test_missing_fields_default_to_absent() {
        let record: AssessmentRecord = serde_json::from_str(r#"{"match_score": 40}"#).unwrap();
        assert_eq!(record.score, Some(40));
        assert!(record.summary.is_none());
        assert!(record.strengths.is_empty());
        assert!(record.verdict.is_none());
        assert!(!record.is_empty());
    }

    #[test]
    fn test_null_lists_become_empty() {
        let record: AssessmentRecord =
            serde_json::from_str(r#"{"strengths": null, "missing_requirements": null}"#).unwrap();
        assert!(record.strengths.is_empty());
        assert!(record.missing_requirements.is_empty());
        assert!(record.is_empty());
    }

    #[test]
    fn test_score_bounds() {
        assert!(serde_json::from_str::<AssessmentRecord>(r#"{"match_score": 0}"#).is_ok());
        assert!(serde_json::from_str::<AssessmentRecord>(r#"{"match_score": 100}"#).is_ok());
        assert!(serde_json::from_str::<AssessmentRecord>(r#"{"match_score": 101}"#).is_err());
        assert!(serde_json::from_str::<AssessmentRecord>(r#"{"match_score": -1}"#).is_err());
        assert!(serde_json::from_str::<AssessmentRecord>(r#"{"match_score": 72.5}"#).is_err());
        assert!(serde_json::from_str::<AssessmentRecord>(r#"{"match_score": "high"}"#).is_err());
    }

    #[test]
    fn test_score_accepts_whole_floats_and_numeric_strings() {
        for json in [
            r#"{"match_score": 85.0}"#,
            r#"{"match_score": "85"}"#,
            r#"{"match_score": " 85 "}"#,
        ] {
            let record: AssessmentRecord = serde_json::from_str(json).unwrap();
            assert_eq!(record.score, Some(85), "{json}");
        }
        let record: AssessmentRecord = serde_json::from_str(r#"{"match_score": null}"#).unwrap();
        assert_eq!(record.score, None);
    }

    #[test]
    fn test_verdict_kinds() {
        assert_eq!(Verdict::new("strong match").kind(), VerdictKind::StrongMatch);
        assert_eq!(Verdict::new("  Possible-Match ").kind(), VerdictKind::PossibleMatch);
        assert_eq!(Verdict::new("not_a_match").kind(), VerdictKind::NotAMatch);
        assert_eq!(
            Verdict::new("strong match | possible match").kind(),
            VerdictKind::Unrecognized
        );
    }

    #[test]
    fn test_verdict_keeps_label_verbatim() {
        let verdict = Verdict::new("Strong Match");
        assert_eq!(verdict.kind(), VerdictKind::StrongMatch);
        assert_eq!(verdict.as_str(), "Strong Match");
        assert_eq!(serde_json::to_string(&verdict).unwrap(), r#""Strong Match""#);

        let back: Verdict = serde_json::from_str(r#""Strong Match""#).unwrap();
        assert_eq!(back, verdict);
    }

    #[test]
    fn test_unrecognized_verdict_serializes_as_plain_label() {
        let json = serde_json::to_string(&Verdict::new("hold")).unwrap();
        assert_eq!(json, r#""hold""#);
    }
}
