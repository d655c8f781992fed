//! Route discretization errors.

use thiserror::Error;

pub type LineResult<T> = Result<T, LineError>;

#[derive(Error, Debug)]
pub enum LineError {
    /// A raw route segment that cannot be discretized. `index` is the
    /// 1-based position in the submitted route.
    #[error("segment {index}: {what}")]
    BadSegment { index: usize, what: String },
}
