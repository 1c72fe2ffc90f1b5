//! RGB to HSV conversion on the census scale
//!
//! Converts RGB samples to HSV using piecewise hue computation, then
//! rescales the result to the ranges the classifier thresholds are
//! tuned for: hue in [0,180], saturation in [0,100], value in [0,200].
//!
//! Algorithm tag: `algo-rgb-hsv-halfscale`

use image::Rgb;

use crate::constants::scale::VALUE_DIVISOR;

/// An HSV sample on the census scale
///
/// Hue is half the conventional degree value ([0,180] instead of
/// [0,360]), saturation is a percentage, and value is the [0,255] input
/// channel divided by 1.275, giving [0,200]. The rescaling is
/// intentional; all classification thresholds assume it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    /// Hue in [0, 180]
    pub hue: f32,
    /// Saturation in [0, 100]
    pub saturation: f32,
    /// Value in [0, 200]
    pub value: f32,
}

impl Hsv {
    /// Create an HSV sample from census-scale components
    pub const fn new(hue: f32, saturation: f32, value: f32) -> Self {
        Self {
            hue,
            saturation,
            value,
        }
    }
}

/// Convert an RGB sample to census-scale HSV
///
/// # Arguments
///
/// * `r`, `g`, `b` - channel values on the [0, 255] scale
///
/// # Returns
///
/// The [`Hsv`] sample. Achromatic inputs (R=G=B) yield hue 0 and
/// saturation 0; pure black additionally yields value 0. The function
/// is total over finite inputs.
pub fn rgb_to_hsv(r: f32, g: f32, b: f32) -> Hsv {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let mut hue;
    let saturation;

    if delta > 0.0 {
        hue = if max == r {
            60.0 * (((g - b) / delta) % 6.0)
        } else if max == g {
            60.0 * (((b - r) / delta) + 2.0)
        } else {
            60.0 * (((r - g) / delta) + 4.0)
        };
        saturation = if max > 0.0 { delta / max } else { 0.0 };
    } else {
        hue = 0.0;
        saturation = 0.0;
    }

    if hue < 0.0 {
        hue += 360.0;
    }

    // Rescale [0,360]/[0,1]/[0,255] onto [0,180]/[0,100]/[0,200]
    Hsv::new(hue / 2.0, saturation * 100.0, max / VALUE_DIVISOR)
}

/// Convert a decoded 8-bit RGB pixel to census-scale HSV
pub fn pixel_to_hsv(pixel: &Rgb<u8>) -> Hsv {
    rgb_to_hsv(pixel[0] as f32, pixel[1] as f32, pixel[2] as f32)
}
