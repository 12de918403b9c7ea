//! Configuration for orientation classification, decoding and candidate selection.
//!
//! The heuristic thresholds and weights default to the values the widget
//! has always shipped with. Downstream ranking depends on their relative
//! ordering, so `from_env` only exposes sampling and plumbing knobs.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tryon_models::Orientation;

/// Region placement as fractions of image width/height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegionFractions {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl RegionFractions {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Pixel step used when scanning each region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SamplingStrides {
    /// Head/face band (default: 3)
    pub upper: u32,
    /// Torso band (default: 4)
    pub torso: u32,
    /// Centered square (default: 5)
    pub center: u32,
}

impl Default for SamplingStrides {
    fn default() -> Self {
        Self {
            upper: 3,
            torso: 4,
            center: 5,
        }
    }
}

/// RGB gate for skin-like pixels. Channel bounds are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkinGate {
    pub red_min: u8,
    pub red_max: u8,
    pub green_min: u8,
    pub green_max: u8,
    pub blue_min: u8,
    pub blue_max: u8,
    /// Red must exceed blue by more than this.
    pub min_red_blue_spread: u8,
}

impl Default for SkinGate {
    fn default() -> Self {
        Self {
            red_min: 95,
            red_max: 240,
            green_min: 40,
            green_max: 210,
            blue_min: 20,
            blue_max: 200,
            min_red_blue_spread: 15,
        }
    }
}

/// Inclusive band on mean RGB brightness.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrightnessBand {
    pub min: f64,
    pub max: f64,
}

impl Default for BrightnessBand {
    fn default() -> Self {
        Self {
            min: 80.0,
            max: 220.0,
        }
    }
}

/// Weights for the forward-facing evidence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrontWeights {
    pub upper_skin: f64,
    pub face_like: f64,
    pub torso_skin: f64,
}

/// Weights for the backward-facing evidence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BackWeights {
    /// Applied to `1 - upper_skin_ratio`.
    pub upper_skin_absence: f64,
    pub body_structure: f64,
    /// Applied to `1 - face_like_ratio`.
    pub face_like_absence: f64,
}

/// Terms of the ranking score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub person_bonus: f64,
    pub front_bonus: f64,
    pub back_bonus: f64,
    pub skin_tone: f64,
    pub upper_skin: f64,
    pub face_like: f64,
}

/// Thresholds for the person test and the no-person fallback chain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecisionThresholds {
    /// `skin_tone_score` above this means a person (default: 0.1)
    pub person_skin_tone: f64,
    /// `upper_skin_ratio` above this means a person (default: 0.05)
    pub person_upper_skin: f64,
    /// `torso_skin_ratio` above this means a person (default: 0.05)
    pub person_torso_skin: f64,
    /// Body structure above this with little upper skin means back (default: 0.4)
    pub fallback_body_structure: f64,
    /// Upper skin must stay below this for the body-structure rule (default: 0.1)
    pub fallback_upper_skin_ceiling: f64,
    /// Upper skin above this means front (default: 0.1)
    pub fallback_upper_skin_front: f64,
    /// Face-like ratio above this means front (default: 0.05)
    pub fallback_face_like_front: f64,
}

impl Default for DecisionThresholds {
    fn default() -> Self {
        Self {
            person_skin_tone: 0.1,
            person_upper_skin: 0.05,
            person_torso_skin: 0.05,
            fallback_body_structure: 0.4,
            fallback_upper_skin_ceiling: 0.1,
            fallback_upper_skin_front: 0.1,
            fallback_face_like_front: 0.05,
        }
    }
}

/// Configuration for the orientation classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    // === Regions ===
    /// Head/face band: 15%-40% of height, middle 40% of width
    pub upper_region: RegionFractions,

    /// Torso band: 30%-60% of height, middle 50% of width
    pub torso_region: RegionFractions,

    /// Side of the centered square as a fraction of min(width, height) (default: 0.3)
    pub center_side_fraction: f64,

    // === Sampling ===
    pub strides: SamplingStrides,

    // === Pixel gates ===
    pub skin_gate: SkinGate,
    pub brightness_band: BrightnessBand,

    /// Face-like radius as a fraction of the upper region's half-minor side (default: 0.6)
    pub face_radius_fraction: f64,

    // === Decision ===
    pub thresholds: DecisionThresholds,
    pub front_weights: FrontWeights,
    pub back_weights: BackWeights,
    pub score_weights: ScoreWeights,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            upper_region: RegionFractions::new(0.3, 0.15, 0.4, 0.25),
            torso_region: RegionFractions::new(0.25, 0.30, 0.5, 0.30),
            center_side_fraction: 0.3,

            strides: SamplingStrides::default(),

            skin_gate: SkinGate::default(),
            brightness_band: BrightnessBand::default(),
            face_radius_fraction: 0.6,

            thresholds: DecisionThresholds::default(),
            front_weights: FrontWeights {
                upper_skin: 0.4,
                face_like: 0.4,
                torso_skin: 0.2,
            },
            back_weights: BackWeights {
                upper_skin_absence: 0.3,
                body_structure: 0.4,
                face_like_absence: 0.3,
            },
            score_weights: ScoreWeights {
                person_bonus: 100.0,
                front_bonus: 50.0,
                back_bonus: 25.0,
                skin_tone: 10.0,
                upper_skin: 100.0,
                face_like: 150.0,
            },
        }
    }
}

impl ClassifierConfig {
    /// Create config from environment variables.
    ///
    /// Only sampling strides are read (`TRYON_UPPER_STRIDE`,
    /// `TRYON_TORSO_STRIDE`, `TRYON_CENTER_STRIDE`); zero is ignored.
    pub fn from_env() -> Self {
        let defaults = SamplingStrides::default();
        let stride = |key: &str, fallback: u32| {
            env_parse::<u32>(key).filter(|s| *s > 0).unwrap_or(fallback)
        };

        Self {
            strides: SamplingStrides {
                upper: stride("TRYON_UPPER_STRIDE", defaults.upper),
                torso: stride("TRYON_TORSO_STRIDE", defaults.torso),
                center: stride("TRYON_CENTER_STRIDE", defaults.center),
            },
            ..Self::default()
        }
    }
}

/// Configuration for decoding uploaded or fetched images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DecodeConfig {
    /// Downscale so neither side exceeds this many pixels (default: none)
    pub max_dimension: Option<u32>,
}

impl DecodeConfig {
    /// Create config from environment variables (`TRYON_MAX_DIMENSION`).
    pub fn from_env() -> Self {
        Self {
            max_dimension: env_parse::<u32>("TRYON_MAX_DIMENSION").filter(|d| *d > 0),
        }
    }
}

/// Configuration for matching product images to the shopper's photo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionConfig {
    /// Orientations eligible for matching (default: front, back)
    pub allowed_orientations: Vec<Orientation>,

    /// Maximum number of ranked candidates to forward (default: all)
    pub max_forwarded: Option<usize>,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            allowed_orientations: vec![Orientation::Front, Orientation::Back],
            max_forwarded: None,
        }
    }
}

impl SelectionConfig {
    /// Create config from environment variables.
    ///
    /// `TRYON_ALLOWED_ORIENTATIONS` is a comma-separated list; unparsable
    /// entries are skipped and an empty result keeps the default set.
    /// `TRYON_MAX_FORWARDED` caps the forwarded list.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let allowed_orientations = std::env::var("TRYON_ALLOWED_ORIENTATIONS")
            .ok()
            .map(|raw| parse_orientation_list(&raw))
            .filter(|list| !list.is_empty())
            .unwrap_or(defaults.allowed_orientations);

        Self {
            allowed_orientations,
            max_forwarded: env_parse::<usize>("TRYON_MAX_FORWARDED").filter(|n| *n > 0),
        }
    }

    /// Whether `orientation` takes part in matching.
    pub fn allows(&self, orientation: Orientation) -> bool {
        self.allowed_orientations.contains(&orientation)
    }
}

fn parse_orientation_list(raw: &str) -> Vec<Orientation> {
    let mut list = Vec::new();
    for part in raw.split(',') {
        if let Ok(orientation) = part.parse::<Orientation>() {
            if !list.contains(&orientation) {
                list.push(orientation);
            }
        }
    }
    list
}

fn env_parse<T: FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|s| s.trim().parse().ok())
}
