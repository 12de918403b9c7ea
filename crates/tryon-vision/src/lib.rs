#![deny(unreachable_patterns)]
//! Person and orientation heuristics for virtual try-on photos.
//!
//! This crate provides:
//! - A stateless classifier that guesses whether an image shows a person
//!   facing the camera, facing away, or neither
//! - Decoding of uploaded bytes and base64 data URLs into pixel buffers
//! - Parallel classification of product images and orientation matching
//!   against the shopper's photo
//!
//! Classification never fails: unreadable or degenerate images come back
//! as an `unknown` result with score 0.

pub mod classifier;
pub mod config;
pub mod decode;
pub mod error;
pub mod metrics;
pub mod sampler;
pub mod selection;
pub mod skin;

pub use classifier::{classify, OrientationClassifier};
pub use config::{ClassifierConfig, DecodeConfig, SelectionConfig};
pub use decode::{decode_base64_image, decode_image, read_image};
pub use error::{VisionError, VisionResult};
pub use selection::{
    classify_candidates, select_candidates, select_for_user, CandidateImage, ClassifiedCandidate,
    Selection, SelectionOutcome,
};

pub use tryon_models::{
    ClassificationResult, Orientation, OrientationSignals, PixelBuffer, Region,
};
