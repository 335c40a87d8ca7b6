use thiserror::Error;

/// Application-level error type shared by all pipeline modules.
///
/// Data-shape problems (missing CSV columns, non-string field values, empty
/// inputs) are NOT errors anywhere in this crate; they degrade to empty text
/// or empty output per the scoring contract. These variants cover genuine
/// failures: I/O, malformed files, LLM transport, and caller misuse.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Text extraction error: {0}")]
    Extraction(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<crate::llm_client::LlmError> for PipelineError {
    fn from(e: crate::llm_client::LlmError) -> Self {
        PipelineError::Llm(e.to_string())
    }
}
