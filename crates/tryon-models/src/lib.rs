//! Shared data models for the try-on widget backend.
//!
//! This crate provides Serde-serializable types for:
//! - Decoded RGBA pixel buffers
//! - Sampling regions over a buffer
//! - Orientation classification results and their raw signals

pub mod classification;
pub mod error;
pub mod pixel;
pub mod region;

// Re-export common types
pub use classification::{
    ClassificationResult, Orientation, OrientationParseError, OrientationSignals,
};
pub use error::{ModelError, ModelResult};
pub use pixel::PixelBuffer;
pub use region::Region;
