//! Orientation classification results.
//!
//! This module defines the values produced when an image is checked for a
//! person and the direction that person is facing:
//!
//! - `Front`: facing the camera
//! - `Back`: facing away from the camera
//! - `Unknown`: no usable signal

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Which way a person in an image is facing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Facing the camera.
    Front,
    /// Facing away from the camera.
    Back,
    /// Indeterminate or unreadable.
    #[default]
    Unknown,
}

impl Orientation {
    /// All orientation values.
    pub const ALL: &'static [Orientation] =
        &[Orientation::Front, Orientation::Back, Orientation::Unknown];

    /// Returns the wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Front => "front",
            Orientation::Back => "back",
            Orientation::Unknown => "unknown",
        }
    }

    /// True for `Front` and `Back`.
    pub fn is_known(&self) -> bool {
        !matches!(self, Orientation::Unknown)
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Orientation {
    type Err = OrientationParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "front" => Ok(Orientation::Front),
            "back" => Ok(Orientation::Back),
            "unknown" => Ok(Orientation::Unknown),
            _ => Err(OrientationParseError(s.to_string())),
        }
    }
}

#[derive(Debug, Error)]
#[error("Unknown orientation: {0}")]
pub struct OrientationParseError(String);

/// Output of the orientation classifier.
///
/// `score` is only meaningful relative to other results; it ranks candidate
/// images and is not a probability.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    /// Whether the image most likely contains a person.
    pub has_person: bool,
    /// Estimated facing direction.
    pub orientation: Orientation,
    /// Non-negative ranking score.
    pub score: f64,
}

impl ClassificationResult {
    /// The neutral result used whenever an image cannot be read.
    pub const fn unknown() -> Self {
        Self {
            has_person: false,
            orientation: Orientation::Unknown,
            score: 0.0,
        }
    }
}

impl Default for ClassificationResult {
    fn default() -> Self {
        Self::unknown()
    }
}

/// Raw ratios gathered from the sampling regions.
///
/// Every ratio is a hit count divided by the samples taken in its region,
/// or 0 when the region produced no samples.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrientationSignals {
    /// Skin-tone fraction in the centered square.
    pub skin_tone_score: f64,
    /// Skin-tone fraction in the head/face band.
    pub upper_skin_ratio: f64,
    /// Skin-tone fraction in the torso band.
    pub torso_skin_ratio: f64,
    /// Fraction of upper-band samples that are skin near the band center.
    pub face_like_ratio: f64,
    /// Fraction of torso samples with mid-range brightness.
    pub body_structure_ratio: f64,
    /// Weighted evidence for a forward-facing person.
    pub front_score: f64,
    /// Weighted evidence for a backward-facing person.
    pub back_score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientation_parse() {
        assert_eq!("front".parse::<Orientation>().unwrap(), Orientation::Front);
        assert_eq!("BACK".parse::<Orientation>().unwrap(), Orientation::Back);
        assert_eq!(" unknown ".parse::<Orientation>().unwrap(), Orientation::Unknown);
        assert!("side".parse::<Orientation>().is_err());
    }

    #[test]
    fn test_orientation_display() {
        assert_eq!(Orientation::Front.to_string(), "front");
        assert_eq!(Orientation::Back.to_string(), "back");
        assert_eq!(Orientation::Unknown.to_string(), "unknown");
    }

    #[test]
    fn test_result_wire_format() {
        let result = ClassificationResult {
            has_person: true,
            orientation: Orientation::Back,
            score: 125.5,
        };
        let json = serde_json::to_value(result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "hasPerson": true, "orientation": "back", "score": 125.5 })
        );

        let parsed: ClassificationResult = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, result);
    }

    #[test]
    fn test_unknown_is_neutral() {
        let result = ClassificationResult::unknown();
        assert!(!result.has_person);
        assert_eq!(result.orientation, Orientation::Unknown);
        assert_eq!(result.score, 0.0);
        assert_eq!(ClassificationResult::default(), result);
    }
}
