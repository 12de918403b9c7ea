//! Error types for model construction.

use thiserror::Error;

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors raised while building model values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("pixel data length {actual} does not match {width}x{height} RGBA ({expected} bytes)")]
    BufferLengthMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    #[error("image dimensions {width}x{height} overflow addressable memory")]
    DimensionOverflow { width: u32, height: u32 },
}
