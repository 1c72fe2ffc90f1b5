//! Color bucketing and conversion module
//!
//! This module handles RGB to custom-scale HSV conversion, the fixed
//! ten-bucket color enumeration, and the threshold-based classifier
//! that maps HSV samples onto buckets.

pub mod bucket;
pub mod classify;
pub mod conversion;

pub use bucket::ColorBucket;
pub use classify::classify;
pub use conversion::{pixel_to_hsv, rgb_to_hsv, Hsv};
