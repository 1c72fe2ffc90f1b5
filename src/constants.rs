//! Fixed thresholds and scale constants for color classification
//!
//! All values in this module are compile-time constants. The bucket
//! boundaries were tuned empirically against photographic material and
//! must not be "corrected" for symmetry; classification depends on them
//! exactly as written.

/// Custom HSV scale bounds
///
/// The pipeline works in a rescaled HSV space rather than the
/// conventional [0,360]/[0,100]/[0,100]: hue is halved, saturation is a
/// percentage, and value maps [0,255] onto [0,200]. The classification
/// thresholds below are only meaningful on this scale.
pub mod scale {
    /// Upper bound of the rescaled hue channel (360 / 2)
    pub const HUE_MAX: f32 = 180.0;

    /// Upper bound of the saturation channel (percent)
    pub const SATURATION_MAX: f32 = 100.0;

    /// Upper bound of the rescaled value channel (255 / 1.275)
    pub const VALUE_MAX: f32 = 200.0;

    /// Divisor mapping a [0,255] value channel onto [0,200]
    pub const VALUE_DIVISOR: f32 = 1.275;
}

/// Classification thresholds on the custom HSV scale
///
/// The brightness and saturation checks run before any hue check, and
/// all comparisons are strict. See [`crate::color::classify`] for the
/// evaluation order, which is part of the contract.
pub mod thresholds {
    /// Pixels with value below this are Black regardless of hue
    pub const BLACK_MAX_VALUE: f32 = 75.0;

    /// Minimum value for a pixel to be considered White
    pub const WHITE_MIN_VALUE: f32 = 190.0;

    /// Maximum saturation for a pixel to be considered White
    pub const WHITE_MAX_SATURATION: f32 = 27.0;

    /// Maximum saturation for a pixel to be considered Grey
    pub const GREY_MAX_SATURATION: f32 = 53.0;

    /// Maximum value for a pixel to be considered Grey
    pub const GREY_MAX_VALUE: f32 = 185.0;

    /// Hue ladder for chromatic pixels, upper bounds (exclusive)
    ///
    /// Hue at or beyond the Purple bound wraps back to Red.
    pub const RED_MAX_HUE: f32 = 7.0;
    pub const ORANGE_MAX_HUE: f32 = 25.0;
    pub const YELLOW_MAX_HUE: f32 = 34.0;
    pub const GREEN_MAX_HUE: f32 = 73.0;
    pub const AQUA_MAX_HUE: f32 = 102.0;
    pub const BLUE_MAX_HUE: f32 = 140.0;
    pub const PURPLE_MAX_HUE: f32 = 170.0;
}

/// Reporting thresholds
pub mod reporting {
    /// Minimum share of the image (percent, exclusive) a bucket must
    /// occupy to appear in the report
    pub const REPORT_THRESHOLD_PERCENT: f32 = 10.0;
}

/// Re-export the report threshold at top level for convenience
pub const REPORT_THRESHOLD_PERCENT: f32 = reporting::REPORT_THRESHOLD_PERCENT;
