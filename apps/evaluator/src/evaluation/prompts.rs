// All LLM prompt fragments for the evaluation module.
// `build_prompt` splices the inputs in with `format!` so that braces or
// placeholder-looking text inside a CV are passed through verbatim.

/// Role framing at the top of every evaluation prompt.
pub const EVALUATION_PREAMBLE: &str = "\
## Task: CV and job description compatibility assessment

As an experienced HR specialist, analyze the following job description and \
candidate CV and provide an objective assessment.";

/// The five criteria the model must score.
pub const EVALUATION_CRITERIA: &str = r#"### ASSESSMENT CRITERIA:

1. **Match score (0-100)**: What percentage of the job description's requirements the CV satisfies
2. **Summary**: A short description of how well the CV matches
3. **Strengths**: Key skills and experience from the CV that match the job description
4. **Missing requirements**: Important requirements from the job description not found in the CV
5. **Verdict**: "strong match" | "possible match" | "not a match""#;

/// Output template the model is told to follow exactly.
pub const RESPONSE_SCHEMA: &str = r#"{
  "match_score": 0-100,
  "summary": "Short description of how well the CV matches the JD",
  "strengths": [
    "Key skills/experience from the CV that match the JD"
  ],
  "missing_requirements": [
    "Important JD requirements not visible in the CV"
  ],
  "verdict": "strong match | possible match | not a match"
}"#;

pub const JSON_ONLY_INSTRUCTION: &str =
    "Return ONLY the JSON object, with no additional text or commentary.";

/// Builds the evaluation prompt for one (job description, CV) pair.
/// Empty inputs are accepted and simply produce a thinner prompt.
pub fn build_prompt(job_description: &str, candidate_text: &str) -> String {
    format!(
        "{EVALUATION_PREAMBLE}

### JOB DESCRIPTION:
{job_description}

### CANDIDATE CV:
{candidate_text}

{EVALUATION_CRITERIA}

### RESPONSE FORMAT (JSON only):
{RESPONSE_SCHEMA}

{JSON_ONLY_INSTRUCTION}
"
    )
}
