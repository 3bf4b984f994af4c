use thiserror::Error;

/// Failures of the host shell around the validator.
///
/// Validation outcomes are never errors; see [`crate::ValidationResult`].
#[derive(Debug, Error)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
