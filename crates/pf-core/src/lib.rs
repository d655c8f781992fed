//! pf-core: stable foundation for pneuflow.
//!
//! Contains:
//! - units (conversion factors and small unit helpers, plain f64)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{CoreError, CoreResult};
pub use numeric::*;
pub use units::*;
