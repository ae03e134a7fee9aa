use std::path::PathBuf;

use thiserror::Error;

/// Run-level error type. Every variant is fatal: it propagates to `main`,
/// which logs it and exits non-zero without writing a report.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Failed to parse PDF '{}': {message}", path.display())]
    PdfParse { path: PathBuf, message: String },

    #[error("Empty corpus: no documents to vectorize")]
    EmptyCorpus,

    #[error("Failed to write output '{}': {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Stable machine-readable code, logged alongside the message.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Config(_) => "CONFIG_ERROR",
            AppError::PdfParse { .. } => "PDF_PARSE_ERROR",
            AppError::EmptyCorpus => "EMPTY_CORPUS",
            AppError::OutputWrite { .. } => "OUTPUT_WRITE_ERROR",
            AppError::Serialize(_) => "SERIALIZE_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Config(_) => 2,
            AppError::PdfParse { .. } => 3,
            AppError::EmptyCorpus => 4,
            AppError::OutputWrite { .. } | AppError::Serialize(_) => 5,
            AppError::Internal(_) => 1,
        }
    }
}
