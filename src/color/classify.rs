//! Threshold-based HSV to bucket classification
//!
//! The decision procedure runs its rules in a fixed order and the first
//! match wins; the rules are not mutually exclusive, so the order is
//! part of the contract. Brightness and saturation checks come first
//! because hue is noisy for very dark, very bright-desaturated, and
//! low-saturation pixels. Only after those are ruled out does hue
//! discriminate the chromatic buckets.
//!
//! Algorithm tag: `algo-hsv-bucket-thresholds`

use crate::color::bucket::ColorBucket;
use crate::color::conversion::Hsv;
use crate::constants::thresholds::*;

/// Classify a census-scale HSV sample into a color bucket
///
/// Total over all finite inputs; every sample maps to exactly one
/// bucket. All boundary comparisons are strict, and hue at or beyond
/// the Purple bound wraps back to Red (hue 180 abuts hue 0 on the
/// census scale's color wheel).
pub fn classify(hsv: Hsv) -> ColorBucket {
    if hsv.value < BLACK_MAX_VALUE {
        ColorBucket::Black
    } else if hsv.value > WHITE_MIN_VALUE && hsv.saturation < WHITE_MAX_SATURATION {
        ColorBucket::White
    } else if hsv.saturation < GREY_MAX_SATURATION && hsv.value < GREY_MAX_VALUE {
        ColorBucket::Grey
    } else if hsv.hue < RED_MAX_HUE {
        ColorBucket::Red
    } else if hsv.hue < ORANGE_MAX_HUE {
        ColorBucket::Orange
    } else if hsv.hue < YELLOW_MAX_HUE {
        ColorBucket::Yellow
    } else if hsv.hue < GREEN_MAX_HUE {
        ColorBucket::Green
    } else if hsv.hue < AQUA_MAX_HUE {
        ColorBucket::Aqua
    } else if hsv.hue < BLUE_MAX_HUE {
        ColorBucket::Blue
    } else if hsv.hue < PURPLE_MAX_HUE {
        ColorBucket::Purple
    } else {
        // Full circle: back to Red
        ColorBucket::Red
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::conversion::rgb_to_hsv;

    #[test]
    fn test_black_boundary() {
        assert_eq!(classify(Hsv::new(0.0, 0.0, 74.9)), ColorBucket::Black);
        // At exactly 75 the black rule no longer fires; with zero
        // saturation the sample falls through to Grey.
        assert_eq!(classify(Hsv::new(0.0, 0.0, 75.0)), ColorBucket::Grey);
    }

    #[test]
    fn test_white_requires_bright_and_desaturated() {
        assert_eq!(classify(Hsv::new(0.0, 0.0, 200.0)), ColorBucket::White);
        assert_eq!(classify(Hsv::new(90.0, 26.9, 190.1)), ColorBucket::White);
        // Bright but saturated is not white
        assert_ne!(classify(Hsv::new(90.0, 27.0, 200.0)), ColorBucket::White);
        // Desaturated but not bright enough is not white
        assert_ne!(classify(Hsv::new(90.0, 0.0, 190.0)), ColorBucket::White);
    }

    #[test]
    fn test_grey_band() {
        assert_eq!(classify(Hsv::new(120.0, 40.0, 100.0)), ColorBucket::Grey);
        assert_eq!(classify(Hsv::new(0.0, 52.9, 184.9)), ColorBucket::Grey);
        // Too saturated for grey: falls to the hue ladder
        assert_eq!(classify(Hsv::new(120.0, 53.0, 100.0)), ColorBucket::Blue);
    }

    #[test]
    fn test_hue_ladder() {
        let chromatic = |hue: f32| Hsv::new(hue, 100.0, 200.0);
        assert_eq!(classify(chromatic(0.0)), ColorBucket::Red);
        assert_eq!(classify(chromatic(6.9)), ColorBucket::Red);
        assert_eq!(classify(chromatic(7.0)), ColorBucket::Orange);
        assert_eq!(classify(chromatic(24.9)), ColorBucket::Orange);
        assert_eq!(classify(chromatic(25.0)), ColorBucket::Yellow);
        assert_eq!(classify(chromatic(33.9)), ColorBucket::Yellow);
        assert_eq!(classify(chromatic(34.0)), ColorBucket::Green);
        assert_eq!(classify(chromatic(72.9)), ColorBucket::Green);
        assert_eq!(classify(chromatic(73.0)), ColorBucket::Aqua);
        assert_eq!(classify(chromatic(101.9)), ColorBucket::Aqua);
        assert_eq!(classify(chromatic(102.0)), ColorBucket::Blue);
        assert_eq!(classify(chromatic(139.9)), ColorBucket::Blue);
        assert_eq!(classify(chromatic(140.0)), ColorBucket::Purple);
        assert_eq!(classify(chromatic(169.9)), ColorBucket::Purple);
    }

    #[test]
    fn test_hue_wraps_back_to_red() {
        assert_eq!(classify(Hsv::new(170.0, 100.0, 200.0)), ColorBucket::Red);
        assert_eq!(classify(Hsv::new(180.0, 100.0, 200.0)), ColorBucket::Red);
    }

    #[test]
    fn test_brightness_rules_precede_hue() {
        // A dark but fully saturated green pixel is still Black
        assert_eq!(classify(Hsv::new(60.0, 100.0, 50.0)), ColorBucket::Black);
    }

    #[test]
    fn test_end_to_end_pure_colors() {
        assert_eq!(
            classify(rgb_to_hsv(255.0, 255.0, 255.0)),
            ColorBucket::White
        );
        assert_eq!(classify(rgb_to_hsv(255.0, 0.0, 0.0)), ColorBucket::Red);
        assert_eq!(classify(rgb_to_hsv(0.0, 0.0, 0.0)), ColorBucket::Black);
        assert_eq!(classify(rgb_to_hsv(0.0, 128.0, 0.0)), ColorBucket::Green);
        assert_eq!(classify(rgb_to_hsv(0.0, 255.0, 255.0)), ColorBucket::Aqua);
        assert_eq!(classify(rgb_to_hsv(0.0, 0.0, 255.0)), ColorBucket::Blue);
        assert_eq!(classify(rgb_to_hsv(255.0, 165.0, 0.0)), ColorBucket::Orange);
        assert_eq!(classify(rgb_to_hsv(255.0, 255.0, 0.0)), ColorBucket::Yellow);
    }
}
