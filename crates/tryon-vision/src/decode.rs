//! Decoding uploaded photos and fetched product images into pixel buffers.
//!
//! Browser widgets upload images either as raw bytes or as base64 data
//! URLs (`data:image/jpeg;base64,...`). Both end up as an RGBA8
//! [`PixelBuffer`], optionally downscaled first.

use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image::imageops::FilterType;
use tracing::warn;
use tryon_models::{ClassificationResult, PixelBuffer};

use crate::classifier::OrientationClassifier;
use crate::config::DecodeConfig;
use crate::error::{VisionError, VisionResult};
use crate::metrics;

/// Decode an encoded image (PNG, JPEG, WebP, ...) into RGBA8.
pub fn decode_image(bytes: &[u8], config: &DecodeConfig) -> VisionResult<PixelBuffer> {
    let img = image::load_from_memory(bytes)?;

    let img = match config.max_dimension {
        Some(max) if img.width() > max || img.height() > max => {
            img.resize(max, max, FilterType::Triangle)
        }
        _ => img,
    };

    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(PixelBuffer::new(width, height, rgba.into_raw())?)
}

/// Decode bare base64 or a `data:<mime>;base64,<payload>` URL.
pub fn decode_base64_image(text: &str, config: &DecodeConfig) -> VisionResult<PixelBuffer> {
    let payload = strip_data_url(text)?;
    let compact: String = payload.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    let bytes = STANDARD.decode(compact)?;
    decode_image(&bytes, config)
}

/// Read and decode an image file.
pub fn read_image<P: AsRef<Path>>(path: P, config: &DecodeConfig) -> VisionResult<PixelBuffer> {
    let bytes = std::fs::read(path)?;
    decode_image(&bytes, config)
}

fn strip_data_url(text: &str) -> VisionResult<&str> {
    let text = text.trim();
    let Some(rest) = text.strip_prefix("data:") else {
        return Ok(text);
    };

    let (meta, payload) = rest
        .split_once(',')
        .ok_or_else(|| VisionError::invalid_data_url("missing ',' separator"))?;

    if !meta.to_ascii_lowercase().ends_with(";base64") {
        return Err(VisionError::invalid_data_url(
            "only base64-encoded data URLs are supported",
        ));
    }

    Ok(payload)
}

impl OrientationClassifier {
    /// Decode and classify, degrading to `unknown` if the bytes are unreadable.
    pub fn classify_encoded(&self, bytes: &[u8], config: &DecodeConfig) -> ClassificationResult {
        match decode_image(bytes, config) {
            Ok(image) => self.classify(&image),
            Err(e) => fail_open(e),
        }
    }

    /// Like [`classify_encoded`](Self::classify_encoded) for base64 / data URL input.
    pub fn classify_base64(&self, text: &str, config: &DecodeConfig) -> ClassificationResult {
        match decode_base64_image(text, config) {
            Ok(image) => self.classify(&image),
            Err(e) => fail_open(e),
        }
    }
}

fn fail_open(error: VisionError) -> ClassificationResult {
    warn!(error = %error, "Could not read image, treating orientation as unknown");
    metrics::record_decode_failure(error.kind());
    ClassificationResult::unknown()
}
