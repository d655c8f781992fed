//! pf-line: pipeline route discretization for pneuflow.
//!
//! Provides:
//! - An accessory catalogue mapping fitting labels to equivalent
//!   straight-pipe lengths
//! - Discretization of raw route segments into the ~5 ft calculation
//!   sections the pressure-drop integrator walks

pub mod accessory;
pub mod error;
pub mod sections;

// Re-exports for ergonomics
pub use accessory::AccessoryKind;
pub use error::{LineError, LineResult};
pub use sections::{MAX_SECTION_FT, Route, Section, build_route};
