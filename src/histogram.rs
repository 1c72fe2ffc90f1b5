//! Per-bucket pixel counting and share reporting
//!
//! A [`Histogram`] tallies how many pixels of an image fall into each
//! color bucket, then reports the buckets whose share of the image
//! exceeds the fixed reporting threshold.

use image::RgbImage;
use serde::{Deserialize, Serialize};

use crate::color::{classify, pixel_to_hsv, ColorBucket};
use crate::constants::REPORT_THRESHOLD_PERCENT;

/// Per-bucket pixel counts for one image
///
/// Counts start at zero and only ever grow; after a full
/// [`accumulate`](Histogram::accumulate) pass the counts sum to the
/// image's pixel count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Histogram {
    counts: [u64; ColorBucket::COUNT],
}

/// One qualifying bucket's share of the image
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BucketShare {
    /// The color bucket
    pub bucket: ColorBucket,
    /// Share of the image in percent, unrounded
    pub percent: f32,
}

impl BucketShare {
    /// Render the share as a report line, e.g. `Red = 42.1875 %`
    pub fn summary_line(&self) -> String {
        format!("{} = {} %", self.bucket, self.percent)
    }
}

impl Histogram {
    /// Create an empty histogram
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the histogram of an image in one pass
    pub fn of(image: &RgbImage) -> Self {
        let mut histogram = Self::new();
        histogram.accumulate(image);
        histogram
    }

    /// Classify every pixel of `image` and tally the results
    ///
    /// Visits each pixel exactly once; visitation order is irrelevant
    /// since the counts are commutative.
    pub fn accumulate(&mut self, image: &RgbImage) {
        for pixel in image.pixels() {
            self.record(classify(pixel_to_hsv(pixel)));
        }
    }

    /// Count a single classified pixel
    pub fn record(&mut self, bucket: ColorBucket) {
        self.counts[bucket.code()] += 1;
    }

    /// Pixel count for one bucket
    pub fn count(&self, bucket: ColorBucket) -> u64 {
        self.counts[bucket.code()]
    }

    /// Sum of all bucket counts
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Add another histogram's counts into this one
    ///
    /// Elementwise addition is associative and commutative, so shards
    /// of an image counted independently can be merged in any order.
    pub fn merge(&mut self, other: &Histogram) {
        for (count, addend) in self.counts.iter_mut().zip(other.counts.iter()) {
            *count += addend;
        }
    }

    /// Report the buckets exceeding the share threshold
    ///
    /// # Arguments
    ///
    /// * `total_pixels` - the image's width × height
    ///
    /// # Returns
    ///
    /// Shares for every bucket with a nonzero count occupying strictly
    /// more than [`REPORT_THRESHOLD_PERCENT`] of the image, in bucket
    /// enumeration order. An empty result is valid output, not an
    /// error.
    pub fn report(&self, total_pixels: u64) -> Vec<BucketShare> {
        let mut shares = Vec::new();
        for bucket in ColorBucket::ALL {
            let count = self.count(bucket);
            if count > 0 {
                let percent = (count as f32 / total_pixels as f32) * 100.0;
                if percent > REPORT_THRESHOLD_PERCENT {
                    shares.push(BucketShare { bucket, percent });
                }
            }
        }
        shares
    }
}
