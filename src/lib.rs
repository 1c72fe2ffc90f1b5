//! # Color Census
//!
//! A Rust crate for reporting the dominant color makeup of an image.
//!
//! Every pixel is classified into one of ten fixed color buckets
//! (Black, White, Grey, Red, Orange, Yellow, Green, Aqua, Blue,
//! Purple) by:
//! - Converting RGB to HSV on a custom half-hue scale
//! - Applying ordered brightness, saturation, and hue threshold rules
//! - Tallying per-bucket pixel counts across the image
//!
//! Buckets occupying more than 10% of the image appear in the report.
//!
//! ## Example
//!
//! ```rust,no_run
//! use color_census::analyze_image;
//! use std::path::Path;
//!
//! let report = analyze_image(Path::new("photo.jpg"))?;
//! for line in report.summary_lines() {
//!     println!("{line}");
//! }
//! # Ok::<(), color_census::CensusError>(())
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

pub mod color;
pub mod constants;
pub mod error;
pub mod histogram;
pub mod image_loader;

pub use color::{classify, pixel_to_hsv, rgb_to_hsv, ColorBucket, Hsv};
pub use error::{CensusError, Result};
pub use histogram::{BucketShare, Histogram};

/// Complete census result for one image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorReport {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Total pixels classified (width × height)
    pub total_pixels: u64,
    /// Buckets exceeding the report threshold, in bucket order
    pub shares: Vec<BucketShare>,
}

impl ColorReport {
    /// Render one `"<Name> = <percent> %"` line per qualifying bucket
    pub fn summary_lines(&self) -> Vec<String> {
        self.shares.iter().map(BucketShare::summary_line).collect()
    }
}

/// Run the full census over an image file
///
/// This is the main entry point: it decodes the image, classifies
/// every pixel, and reports each bucket holding more than 10% of the
/// image.
///
/// # Arguments
///
/// * `image_path` - Path to the image file
///
/// # Returns
///
/// A [`ColorReport`] with the image dimensions and qualifying bucket
/// shares. An image where no bucket passes the threshold yields an
/// empty `shares` list.
///
/// # Errors
///
/// Returns [`CensusError::ImageLoad`] if the image cannot be read or
/// decoded.
pub fn analyze_image(image_path: &Path) -> Result<ColorReport> {
    let image = image_loader::load_image(image_path)?;
    let (width, height) = image.dimensions();
    let total_pixels = u64::from(width) * u64::from(height);

    let histogram = Histogram::of(&image);
    debug_assert_eq!(histogram.total(), total_pixels);

    Ok(ColorReport {
        width,
        height,
        total_pixels,
        shares: histogram.report(total_pixels),
    })
}
