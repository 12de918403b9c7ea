//! Per-pixel color gates.
//!
//! The skin gate is a permissive RGB-range-and-ordering test with no
//! calibration across skin tones; it over-accepts warm backgrounds and
//! under-accepts darker skin.

use crate::config::{BrightnessBand, SkinGate};

/// Whether an RGB triple passes the skin-tone gate.
#[inline]
pub fn is_skin_tone(r: u8, g: u8, b: u8, gate: &SkinGate) -> bool {
    r > gate.red_min
        && r < gate.red_max
        && g > gate.green_min
        && g < gate.green_max
        && b > gate.blue_min
        && b < gate.blue_max
        && r > g
        && g > b
        && (r - b) > gate.min_red_blue_spread
}

/// Mean of the three color channels.
#[inline]
pub fn brightness(r: u8, g: u8, b: u8) -> f64 {
    (r as f64 + g as f64 + b as f64) / 3.0
}

/// Whether the mean brightness falls inside the inclusive band.
#[inline]
pub fn in_brightness_band(r: u8, g: u8, b: u8, band: &BrightnessBand) -> bool {
    let value = brightness(r, g, b);
    value >= band.min && value <= band.max
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gate() -> SkinGate {
        SkinGate::default()
    }

    #[test]
    fn test_typical_skin_passes() {
        assert!(is_skin_tone(210, 160, 130, &gate()));
        assert!(is_skin_tone(200, 150, 120, &gate()));
    }

    #[test]
    fn test_bounds_are_exclusive() {
        assert!(!is_skin_tone(95, 60, 30, &gate()));
        assert!(is_skin_tone(96, 60, 30, &gate()));
        assert!(!is_skin_tone(240, 150, 100, &gate()));
        assert!(!is_skin_tone(200, 40, 30, &gate()));
        assert!(!is_skin_tone(200, 100, 20, &gate()));
    }

    #[test]
    fn test_channel_ordering_required() {
        // green above red
        assert!(!is_skin_tone(150, 160, 100, &gate()));
        // blue above green
        assert!(!is_skin_tone(150, 100, 120, &gate()));
        // red-blue spread of exactly 15 is not enough
        assert!(!is_skin_tone(120, 110, 105, &gate()));
    }

    #[test]
    fn test_neutral_colors_rejected() {
        assert!(!is_skin_tone(0, 0, 0, &gate()));
        assert!(!is_skin_tone(255, 255, 255, &gate()));
        assert!(!is_skin_tone(150, 150, 150, &gate()));
    }

    #[test]
    fn test_brightness_band_inclusive() {
        let band = BrightnessBand::default();
        assert!(in_brightness_band(80, 80, 80, &band));
        assert!(in_brightness_band(220, 220, 220, &band));
        assert!(in_brightness_band(150, 150, 150, &band));
        assert!(!in_brightness_band(79, 79, 79, &band));
        assert!(!in_brightness_band(255, 255, 255, &band));
        assert!(!in_brightness_band(30, 30, 30, &band));
    }
}
