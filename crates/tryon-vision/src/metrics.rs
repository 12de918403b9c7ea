//! Classification metrics.
//!
//! Recorded through the `metrics` facade; the embedding service installs
//! the exporter. Without a recorder every call is a no-op.

use metrics::{counter, histogram};
use std::time::Duration;
use tryon_models::Orientation;

/// Metric names as constants for consistency.
pub mod names {
    pub const CLASSIFICATIONS_TOTAL: &str = "tryon_classifications_total";
    pub const CLASSIFICATION_DURATION_SECONDS: &str = "tryon_classification_duration_seconds";
    pub const DECODE_FAILURES_TOTAL: &str = "tryon_decode_failures_total";
    pub const SELECTIONS_TOTAL: &str = "tryon_selections_total";
}

/// Record one classifier run.
pub fn record_classification(orientation: Orientation, has_person: bool, duration: Duration) {
    let labels = [
        ("orientation", orientation.as_str().to_string()),
        ("has_person", has_person.to_string()),
    ];

    counter!(names::CLASSIFICATIONS_TOTAL, &labels).increment(1);
    histogram!(names::CLASSIFICATION_DURATION_SECONDS).record(duration.as_secs_f64());
}

/// Record an image that could not be decoded.
pub fn record_decode_failure(kind: &'static str) {
    counter!(names::DECODE_FAILURES_TOTAL, "kind" => kind).increment(1);
}

/// Record the outcome of a candidate selection.
pub fn record_selection(outcome: &'static str) {
    counter!(names::SELECTIONS_TOTAL, "outcome" => outcome).increment(1);
}
