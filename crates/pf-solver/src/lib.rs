//! pf-solver: pressure-drop integration and sizing search for pneuflow.
//!
//! Provides:
//! - section-by-section pressure-drop integration along a discretized route
//! - one-shot case evaluation chaining the model derivations (`run_case`)
//! - the damped/secant equilibrium supply-pressure solver
//! - the (diameter × velocity) design-space search, parallel over diameters
//!
//! The solver treats a non-physical outlet pressure as a recoverable
//! condition: `run_case` surfaces it as a typed error and
//! `find_equilibrium` retries at a higher supply pressure.

pub mod case;
pub mod equilibrium;
pub mod error;
pub mod profile;
pub mod suggest;

// Re-exports for ergonomics
pub use case::{CaseReport, SummaryData, run_case};
pub use equilibrium::{
    DesignSolution, FailureKind, OperatingLimits, SolverConfig, TrialOutcome, find_equilibrium,
};
pub use error::{EngineError, EngineResult};
pub use profile::{LineProfile, SectionPressureState, integrate};
pub use suggest::{DiameterTrial, SearchSpace, suggest};
