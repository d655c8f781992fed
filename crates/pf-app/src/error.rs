//! Error types for the pf-app service layer.

use std::path::PathBuf;

/// Application error type that wraps engine and I/O failures behind a
/// single interface for the front ends.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to read case file: {path}")]
    CaseFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid case JSON: {0}")]
    CaseParse(String),

    #[error("Engine error: {0}")]
    Engine(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for pf-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<pf_solver::EngineError> for AppError {
    fn from(err: pf_solver::EngineError) -> Self {
        AppError::Engine(err.to_string())
    }
}
