//! The fixed ten-bucket color enumeration
//!
//! Every pixel in an image is assigned to exactly one of these buckets.
//! Each bucket carries a display name and a reference RGB/HSV pair; the
//! references document the bucket's nominal color and are not used by
//! classification, which is purely threshold-based.

use std::fmt;

use palette::Srgb;
use serde::{Deserialize, Serialize};

use crate::color::conversion::Hsv;
use crate::error::{CensusError, Result};

/// One of the ten fixed color classes
///
/// The declaration order is the reporting order and doubles as the
/// numeric color code (`Black` = 0 through `Purple` = 9).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorBucket {
    Black,
    White,
    Grey,
    Red,
    Orange,
    Yellow,
    Green,
    Aqua,
    Blue,
    Purple,
}

impl ColorBucket {
    /// Number of buckets
    pub const COUNT: usize = 10;

    /// All buckets in reporting order
    pub const ALL: [ColorBucket; Self::COUNT] = [
        ColorBucket::Black,
        ColorBucket::White,
        ColorBucket::Grey,
        ColorBucket::Red,
        ColorBucket::Orange,
        ColorBucket::Yellow,
        ColorBucket::Green,
        ColorBucket::Aqua,
        ColorBucket::Blue,
        ColorBucket::Purple,
    ];

    /// Display name of the bucket
    pub fn name(&self) -> &'static str {
        match self {
            ColorBucket::Black => "Black",
            ColorBucket::White => "White",
            ColorBucket::Grey => "Grey",
            ColorBucket::Red => "Red",
            ColorBucket::Orange => "Orange",
            ColorBucket::Yellow => "Yellow",
            ColorBucket::Green => "Green",
            ColorBucket::Aqua => "Aqua",
            ColorBucket::Blue => "Blue",
            ColorBucket::Purple => "Purple",
        }
    }

    /// Numeric color code of the bucket (0-based, in reporting order)
    pub fn code(&self) -> usize {
        *self as usize
    }

    /// Parse an external numeric color code into a bucket
    ///
    /// This is the only place an out-of-range code can enter the
    /// system; classification itself never produces one.
    ///
    /// # Errors
    ///
    /// Returns [`CensusError::InvalidColorCode`] if `code` is outside
    /// `0..COUNT`.
    pub fn from_code(code: usize) -> Result<ColorBucket> {
        Self::ALL
            .get(code)
            .copied()
            .ok_or(CensusError::InvalidColorCode { code })
    }

    /// Reference RGB color for the bucket
    ///
    /// Documentation values carried over from the historical
    /// calibration tables (note Red's longstanding magenta-ish
    /// reference).
    pub fn reference_rgb(&self) -> Srgb<u8> {
        match self {
            ColorBucket::Black => Srgb::new(0, 0, 0),
            ColorBucket::White => Srgb::new(255, 255, 255),
            ColorBucket::Grey => Srgb::new(128, 128, 128),
            ColorBucket::Red => Srgb::new(255, 0, 255),
            ColorBucket::Orange => Srgb::new(255, 165, 0),
            ColorBucket::Yellow => Srgb::new(255, 255, 0),
            ColorBucket::Green => Srgb::new(0, 128, 0),
            ColorBucket::Aqua => Srgb::new(0, 255, 255),
            ColorBucket::Blue => Srgb::new(0, 0, 255),
            ColorBucket::Purple => Srgb::new(128, 0, 128),
        }
    }

    /// Reference HSV sample for the bucket, on the census scale
    pub fn reference_hsv(&self) -> Hsv {
        match self {
            ColorBucket::Black => Hsv::new(0.0, 0.0, 0.0),
            ColorBucket::White => Hsv::new(0.0, 0.0, 200.0),
            ColorBucket::Grey => Hsv::new(0.0, 0.0, 100.0),
            ColorBucket::Red => Hsv::new(0.0, 100.0, 200.0),
            ColorBucket::Orange => Hsv::new(18.0, 100.0, 200.0),
            ColorBucket::Yellow => Hsv::new(30.0, 100.0, 200.0),
            ColorBucket::Green => Hsv::new(60.0, 100.0, 100.0),
            ColorBucket::Aqua => Hsv::new(90.0, 100.0, 200.0),
            ColorBucket::Blue => Hsv::new(120.0, 100.0, 200.0),
            ColorBucket::Purple => Hsv::new(150.0, 100.0, 100.0),
        }
    }

    /// Hexadecimal representation of the reference RGB color
    pub fn reference_hex(&self) -> String {
        let rgb = self.reference_rgb();
        format!("#{:02X}{:02X}{:02X}", rgb.red, rgb.green, rgb.blue)
    }
}

impl fmt::Display for ColorBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
