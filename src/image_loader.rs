//! Image loading for the census pipeline
//!
//! Decodes an image file into the 8-bit RGB pixel grid the histogram
//! consumes. Decoding is fully delegated to the `image` crate, which
//! covers JPEG, PNG, GIF, WebP, TIFF, BMP and the other standard
//! formats; whatever the source format, the result is converted to
//! interleaved RGB8 so downstream code sees a single channel layout.

use image::{DynamicImage, ImageReader, RgbImage};
use std::path::Path;

use crate::error::{CensusError, Result};

/// Load an image from disk as an RGB8 pixel grid
///
/// # Arguments
///
/// * `path` - Path to the image file
///
/// # Returns
///
/// The decoded image with channels in R, G, B order, one byte each.
/// Alpha channels and higher bit depths are flattened by the RGB8
/// conversion.
///
/// # Errors
///
/// Returns [`CensusError::ImageLoad`] if the file cannot be opened or
/// its contents cannot be decoded.
///
/// # Example
///
/// ```rust,no_run
/// use color_census::image_loader::load_image;
/// use std::path::Path;
///
/// let image = load_image(Path::new("photo.jpg"))?;
/// println!("Loaded image: {}x{}", image.width(), image.height());
/// # Ok::<(), color_census::CensusError>(())
/// ```
pub fn load_image(path: &Path) -> Result<RgbImage> {
    let reader = ImageReader::open(path).map_err(|e| {
        CensusError::image_load(
            format!("Failed to open image file: {}", path.display()),
            e,
        )
    })?;

    let img: DynamicImage = reader.decode().map_err(|e| {
        CensusError::image_load(format!("Failed to decode image: {}", path.display()), e)
    })?;

    Ok(img.to_rgb8())
}
