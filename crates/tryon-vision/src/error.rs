//! Error types for image decoding and classification plumbing.

use thiserror::Error;
use tryon_models::ModelError;

/// Result type for vision operations.
pub type VisionResult<T> = Result<T, VisionError>;

/// Errors that can occur before an image reaches the classifier.
///
/// The classifier itself never fails; these surface only from decoding and
/// buffer construction, and the fail-open wrappers map them to an `unknown`
/// classification.
#[derive(Debug, Error)]
pub enum VisionError {
    #[error("Image decode failed: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Base64 decode failed: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Invalid data URL: {0}")]
    InvalidDataUrl(String),

    #[error("Invalid pixel buffer: {0}")]
    Model(#[from] ModelError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl VisionError {
    /// Create an invalid data URL error.
    pub fn invalid_data_url(message: impl Into<String>) -> Self {
        Self::InvalidDataUrl(message.into())
    }

    /// Short label used for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            VisionError::Decode(_) => "decode",
            VisionError::Base64(_) => "base64",
            VisionError::InvalidDataUrl(_) => "data_url",
            VisionError::Model(_) => "buffer",
            VisionError::Io(_) => "io",
        }
    }
}
