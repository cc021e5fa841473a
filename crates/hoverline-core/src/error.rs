// File: crates/hoverline-core/src/error.rs
// Summary: Typed errors raised while building series from caller data.

use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ChartError {
    #[error("non-finite value {value} at index {index}")]
    NonFiniteValue { index: usize, value: f64 },

    #[error("timestamp out of range: {0} ms since epoch")]
    TimestampOutOfRange(i64),
}
