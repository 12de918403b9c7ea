//! Heuristic person/orientation classifier.
//!
//! Coarse color statistics over three fixed regions of the image, as
//! fractions of its width and height:
//!
//! ```text
//! region    x          y          stride
//! upper     30%-70%    15%-40%    3       head / face band
//! torso     25%-75%    30%-60%    4       torso band
//! center    square of 0.3 * min(w, h) at the midpoint, stride 5
//! ```
//!
//! No model and no edge detection: skin-tone density in the upper band and
//! near its center argues for a visible face, while mid-brightness mass in
//! the torso band without upper skin argues for a back view.

use std::time::Instant;

use tracing::debug;
use tryon_models::{ClassificationResult, Orientation, OrientationSignals, PixelBuffer, Region};

use crate::config::{ClassifierConfig, RegionFractions};
use crate::metrics;
use crate::sampler::{RegionSampler, RegionTally};
use crate::skin::{in_brightness_band, is_skin_tone};

/// Stateless orientation classifier.
///
/// Safe to share across threads; every call is independent.
#[derive(Debug, Clone, Default)]
pub struct OrientationClassifier {
    config: ClassifierConfig,
}

impl OrientationClassifier {
    /// Create a classifier with the given configuration.
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Classify a decoded image.
    ///
    /// Total over all buffers: images too small to sample yield
    /// [`ClassificationResult::unknown`].
    pub fn classify(&self, image: &PixelBuffer) -> ClassificationResult {
        let start = Instant::now();

        let result = match self.signals(image) {
            Some(signals) => {
                let result = self.decide(&signals);
                debug!(
                    width = image.width(),
                    height = image.height(),
                    skin_tone = signals.skin_tone_score,
                    upper_skin = signals.upper_skin_ratio,
                    torso_skin = signals.torso_skin_ratio,
                    face_like = signals.face_like_ratio,
                    body_structure = signals.body_structure_ratio,
                    front_score = signals.front_score,
                    back_score = signals.back_score,
                    orientation = %result.orientation,
                    has_person = result.has_person,
                    score = result.score,
                    "Classified image"
                );
                result
            }
            None => {
                debug!(
                    width = image.width(),
                    height = image.height(),
                    "Image too small to sample, returning unknown"
                );
                ClassificationResult::unknown()
            }
        };

        metrics::record_classification(result.orientation, result.has_person, start.elapsed());
        result
    }

    /// Gather the raw region ratios.
    ///
    /// Returns `None` when no region produced a single sample.
    pub fn signals(&self, image: &PixelBuffer) -> Option<OrientationSignals> {
        if image.is_empty_area() {
            return None;
        }

        let cfg = &self.config;
        let (width, height) = (image.width(), image.height());

        let upper = fraction_region(width, height, &cfg.upper_region);
        let torso = fraction_region(width, height, &cfg.torso_region);
        let center = Region::centered_square(width, height, cfg.center_side_fraction);

        let gate = &cfg.skin_gate;

        // Upper band: skin, and skin close to the band center.
        let (cx, cy) = upper.center();
        let face_radius = upper.half_minor() * cfg.face_radius_fraction;
        let mut upper_hits = 0u64;
        let mut face_hits = 0u64;
        let upper_samples =
            RegionSampler::new(image, upper, cfg.strides.upper).for_each(|x, y, [r, g, b, _]| {
                if is_skin_tone(r, g, b, gate) {
                    upper_hits += 1;
                    let distance = (x as f64 - cx).hypot(y as f64 - cy);
                    if distance < face_radius {
                        face_hits += 1;
                    }
                }
            });
        let upper_skin = RegionTally {
            samples: upper_samples,
            hits: upper_hits,
        };
        let face_like = RegionTally {
            samples: upper_samples,
            hits: face_hits,
        };

        // Torso band: skin and mid-brightness mass in one pass.
        let mut torso_hits = 0u64;
        let mut body_hits = 0u64;
        let torso_samples =
            RegionSampler::new(image, torso, cfg.strides.torso).for_each(|_, _, [r, g, b, _]| {
                if is_skin_tone(r, g, b, gate) {
                    torso_hits += 1;
                }
                if in_brightness_band(r, g, b, &cfg.brightness_band) {
                    body_hits += 1;
                }
            });
        let torso_skin = RegionTally {
            samples: torso_samples,
            hits: torso_hits,
        };
        let body_structure = RegionTally {
            samples: torso_samples,
            hits: body_hits,
        };

        let center_skin = RegionSampler::new(image, center, cfg.strides.center)
            .tally(|_, _, [r, g, b, _]| is_skin_tone(r, g, b, gate));

        if upper_skin.samples + torso_skin.samples + center_skin.samples == 0 {
            return None;
        }

        let mut signals = OrientationSignals {
            skin_tone_score: center_skin.ratio(),
            upper_skin_ratio: upper_skin.ratio(),
            torso_skin_ratio: torso_skin.ratio(),
            face_like_ratio: face_like.ratio(),
            body_structure_ratio: body_structure.ratio(),
            front_score: 0.0,
            back_score: 0.0,
        };

        let fw = &cfg.front_weights;
        signals.front_score = fw.upper_skin * signals.upper_skin_ratio
            + fw.face_like * signals.face_like_ratio
            + fw.torso_skin * signals.torso_skin_ratio;

        let bw = &cfg.back_weights;
        signals.back_score = bw.upper_skin_absence * (1.0 - signals.upper_skin_ratio)
            + bw.body_structure * signals.body_structure_ratio
            + bw.face_like_absence * (1.0 - signals.face_like_ratio);

        Some(signals)
    }

    /// Turn region ratios into a result.
    pub(crate) fn decide(&self, signals: &OrientationSignals) -> ClassificationResult {
        let t = &self.config.thresholds;

        let has_person = signals.skin_tone_score > t.person_skin_tone
            || signals.upper_skin_ratio > t.person_upper_skin
            || signals.torso_skin_ratio > t.person_torso_skin;

        let by_weight = if signals.back_score > signals.front_score {
            Orientation::Back
        } else {
            Orientation::Front
        };

        let orientation = if has_person {
            by_weight
        } else if signals.body_structure_ratio > t.fallback_body_structure
            && signals.upper_skin_ratio < t.fallback_upper_skin_ceiling
        {
            Orientation::Back
        } else if signals.upper_skin_ratio > t.fallback_upper_skin_front
            || signals.face_like_ratio > t.fallback_face_like_front
        {
            Orientation::Front
        } else {
            by_weight
        };

        let w = &self.config.score_weights;
        let person_bonus = if has_person { w.person_bonus } else { 0.0 };
        let orientation_bonus = match orientation {
            Orientation::Front => w.front_bonus,
            Orientation::Back => w.back_bonus,
            Orientation::Unknown => 0.0,
        };
        let score = person_bonus
            + orientation_bonus
            + signals.skin_tone_score * w.skin_tone
            + signals.upper_skin_ratio * w.upper_skin
            + signals.face_like_ratio * w.face_like;

        ClassificationResult {
            has_person,
            orientation,
            score: score.max(0.0),
        }
    }
}

fn fraction_region(width: u32, height: u32, fractions: &RegionFractions) -> Region {
    Region::from_fractions(
        width,
        height,
        fractions.x,
        fractions.y,
        fractions.width,
        fractions.height,
    )
}

/// Classify with the default configuration.
pub fn classify(image: &PixelBuffer) -> ClassificationResult {
    OrientationClassifier::default().classify(image)
}
