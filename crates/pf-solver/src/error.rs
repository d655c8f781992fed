//! Engine-level errors.

use pf_line::LineError;
use pf_models::ModelError;
use thiserror::Error;

pub type EngineResult<T> = Result<T, EngineError>;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Line(#[from] LineError),

    /// Outlet pressure fell to or below zero absolute while walking the
    /// line. The equilibrium solver matches this variant and retries with
    /// a higher supply pressure.
    #[error("outlet pressure became non-physical (<= 0) in section {section}")]
    NonPhysicalPressure { section: usize },

    /// A correlation input or denominator left its valid domain.
    #[error("computation failed: {what}")]
    Computation { what: String },

    /// Malformed design-space description.
    #[error("invalid search space: {what}")]
    Search { what: String },
}
