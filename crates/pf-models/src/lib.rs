//! pf-models: input records and derived states for pneuflow.
//!
//! Provides:
//! - the wire-format case input (`CaseInput`) with run-level validation
//! - conveying-gas composition derived from ambient moisture (`GasState`)
//! - site atmosphere and gas density (`AtmosphericState`)
//! - solids mass-flow conversions (`MaterialState`)
//! - pipe geometry (`PipeGeometry`)
//! - the feed-point flow state (`FlowState`)
//!
//! Derivation order matters: the atmosphere needs the gas molar mass, and the
//! flow state needs atmosphere, material and pipe. `pf-solver` chains them in
//! that order.

pub mod atmosphere;
pub mod error;
pub mod flow;
pub mod gas;
pub mod input;
pub mod material;
pub mod pipe;

// Re-exports for ergonomics
pub use atmosphere::AtmosphericState;
pub use error::{ModelError, ModelResult};
pub use flow::FlowState;
pub use gas::GasState;
pub use input::{
    AtmosphericInput, CaseInput, FlowInput, GasInput, MaterialInput, Orientation, PipeInput,
    Segment,
};
pub use material::MaterialState;
pub use pipe::PipeGeometry;
