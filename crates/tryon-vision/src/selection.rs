//! Matching product images to the shopper's photo orientation.
//!
//! A shopper photographed from behind should be paired with the back view of
//! a garment. Every candidate is classified, the ones facing the same way as
//! the shopper are kept, and the list is ranked by classifier score. When
//! there is nothing to match on, all candidates are forwarded instead.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use tryon_models::{ClassificationResult, Orientation, PixelBuffer};

use crate::classifier::OrientationClassifier;
use crate::config::SelectionConfig;
use crate::metrics;

/// A decoded product image awaiting classification.
#[derive(Debug, Clone)]
pub struct CandidateImage {
    pub id: String,
    pub image: PixelBuffer,
}

impl CandidateImage {
    pub fn new(id: impl Into<String>, image: PixelBuffer) -> Self {
        Self {
            id: id.into(),
            image,
        }
    }
}

/// A candidate together with its classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedCandidate {
    pub id: String,
    pub result: ClassificationResult,
}

impl ClassifiedCandidate {
    pub fn new(id: impl Into<String>, result: ClassificationResult) -> Self {
        Self {
            id: id.into(),
            result,
        }
    }
}

/// How the forwarded list was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionOutcome {
    /// Candidates facing the same way as the shopper were found.
    Matched,
    /// The shopper photo could not be classified; all candidates forwarded.
    UnknownUserOrientation,
    /// The shopper orientation is excluded from matching; all candidates forwarded.
    OrientationNotAllowed,
    /// No candidate matched; all candidates forwarded.
    NoMatch,
    /// Nothing to choose from.
    NoCandidates,
}

impl SelectionOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            SelectionOutcome::Matched => "matched",
            SelectionOutcome::UnknownUserOrientation => "unknown_user_orientation",
            SelectionOutcome::OrientationNotAllowed => "orientation_not_allowed",
            SelectionOutcome::NoMatch => "no_match",
            SelectionOutcome::NoCandidates => "no_candidates",
        }
    }

    /// True when the list was not narrowed by orientation.
    pub fn is_fallback(&self) -> bool {
        !matches!(self, SelectionOutcome::Matched)
    }
}

/// Ranked product images to forward to the generation backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub outcome: SelectionOutcome,
    /// Highest score first.
    pub selected: Vec<ClassifiedCandidate>,
}

impl Selection {
    pub fn ids(&self) -> Vec<&str> {
        self.selected.iter().map(|c| c.id.as_str()).collect()
    }
}

/// Classify every candidate in parallel. Output order matches input order.
pub fn classify_candidates(
    classifier: &OrientationClassifier,
    candidates: &[CandidateImage],
) -> Vec<ClassifiedCandidate> {
    candidates
        .par_iter()
        .map(|candidate| ClassifiedCandidate {
            id: candidate.id.clone(),
            result: classifier.classify(&candidate.image),
        })
        .collect()
}

/// Pick the candidates to forward for a shopper photo classified as `user`.
pub fn select_candidates(
    user: &ClassificationResult,
    candidates: &[ClassifiedCandidate],
    config: &SelectionConfig,
) -> Selection {
    if candidates.is_empty() {
        metrics::record_selection(SelectionOutcome::NoCandidates.as_str());
        return Selection {
            outcome: SelectionOutcome::NoCandidates,
            selected: Vec::new(),
        };
    }

    let (outcome, mut selected) = match user.orientation {
        Orientation::Unknown => (SelectionOutcome::UnknownUserOrientation, candidates.to_vec()),
        wanted if !config.allows(wanted) => {
            (SelectionOutcome::OrientationNotAllowed, candidates.to_vec())
        }
        wanted => {
            let matching: Vec<_> = candidates
                .iter()
                .filter(|c| c.result.orientation == wanted)
                .cloned()
                .collect();
            if matching.is_empty() {
                (SelectionOutcome::NoMatch, candidates.to_vec())
            } else {
                (SelectionOutcome::Matched, matching)
            }
        }
    };

    // stable: equal scores keep input order
    selected.sort_by(|a, b| b.result.score.total_cmp(&a.result.score));
    if let Some(max) = config.max_forwarded {
        selected.truncate(max);
    }

    if outcome.is_fallback() {
        info!(
            user_orientation = %user.orientation,
            outcome = outcome.as_str(),
            candidates = candidates.len(),
            "No orientation match, forwarding all candidates"
        );
    } else {
        debug!(
            user_orientation = %user.orientation,
            matched = selected.len(),
            candidates = candidates.len(),
            "Selected candidates by orientation"
        );
    }
    metrics::record_selection(outcome.as_str());

    Selection { outcome, selected }
}

/// Classify the shopper photo and all candidates, then select.
///
/// The shopper photo and the candidate set are classified concurrently.
pub fn select_for_user(
    classifier: &OrientationClassifier,
    user_image: &PixelBuffer,
    candidates: &[CandidateImage],
    config: &SelectionConfig,
) -> (ClassificationResult, Selection) {
    let (user, classified) = rayon::join(
        || classifier.classify(user_image),
        || classify_candidates(classifier, candidates),
    );
    let selection = select_candidates(&user, &classified, config);
    (user, selection)
}
