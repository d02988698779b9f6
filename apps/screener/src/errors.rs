use thiserror::Error;

/// Application-level error type.
/// Every command returns `Result<T, AppError>`; `main` maps it to a code and exit status.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Extraction error: {0}")]
    Extraction(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Stable machine-readable code, printed alongside the message.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Llm(_) => "LLM_ERROR",
            AppError::Extraction(_) => "EXTRACTION_ERROR",
            AppError::Io(_) => "IO_ERROR",
            AppError::Json(_) => "JSON_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Process exit status for the CLI. Input problems and upstream failures are kept apart.
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::NotFound(_) | AppError::Validation(_) | AppError::Json(_) => 2,
            AppError::Llm(msg) | AppError::Extraction(msg) => {
                tracing::error!("Upstream failure: {msg}");
                3
            }
            AppError::Io(e) => {
                tracing::error!("IO error: {e}");
                4
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                1
            }
        }
    }
}
