//! Shared application service layer for pneuflow.
//!
//! Provides a unified interface for the CLI (and any future front end):
//! case loading, case execution, the design-space search, and the JSON
//! response envelopes the interchange format defines.

pub mod error;
pub mod response;
pub mod sample;
pub mod service;

// Re-export key types for convenience
pub use error::{AppError, AppResult};
pub use response::{ReportEntry, ReportStatus, RunResponse, SuggestionResponse};
pub use sample::sample_case;
pub use service::{load_case, run, save_case, suggest};
