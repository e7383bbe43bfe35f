use thiserror::Error;

use crate::evaluation::extractor::ExtractionError;
use crate::llm_client::LlmError;

/// Application-level error type.
/// Per-candidate failures carry one of these in the batch summary; only
/// startup failures end the run.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Input unavailable: {0}")]
    InputUnavailable(String),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Render error: {0}")]
    Render(#[from] askama::Error),
}

impl AppError {
    /// Stable machine-readable code for logs and summaries.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::InputUnavailable(_) => "INPUT_UNAVAILABLE",
            AppError::Llm(_) => "LLM_ERROR",
            AppError::Extraction(_) => "EXTRACTION_ERROR",
            AppError::Io(_) => "IO_ERROR",
            AppError::Serialization(_) => "SERIALIZATION_ERROR",
            AppError::Render(_) => "RENDER_ERROR",
        }
    }
}
