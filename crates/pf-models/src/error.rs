//! Error types for input validation and state derivation.

use pf_core::CoreError;
use thiserror::Error;

pub type ModelResult<T> = Result<T, ModelError>;

#[derive(Error, Debug)]
pub enum ModelError {
    /// Out-of-range or non-numeric input.
    #[error("Invalid input: {what}")]
    InvalidInput { what: String },

    /// A derivation hit a zero denominator or a non-physical intermediate.
    #[error("Computation failed: {what}")]
    Computation { what: String },

    #[error(transparent)]
    Core(#[from] CoreError),
}
