//! Row-projection text line detection.
//!
//! Instead of chasing individual components, this strategy looks at how
//! much of each pixel row is lit. Consecutive rows above a coverage
//! threshold form a line band; each band is then trimmed horizontally to
//! its lit column range. The result is one box per text line, which the
//! merge pass can grow into paragraph blocks.

use crate::config::ProjectionConfig;
use crate::detect::RegionDetector;
use crate::geometry::Rect;
use crate::mask::{bright_mask, PixelMask};
use crate::region::{Region, RegionKind};
use image::RgbImage;

/// Row-histogram detector for horizontal text lines.
pub struct ProjectionDetector {
    config: ProjectionConfig,
}

impl ProjectionDetector {
    /// Create a detector with the given thresholds.
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }
}

impl RegionDetector for ProjectionDetector {
    fn detect_text(&self, img: &RgbImage) -> Vec<Region> {
        let mask = bright_mask(img, self.config.bright_threshold);
        let mut regions = Vec::new();

        for (top, bottom) in line_bands(&mask, self.config.row_coverage) {
            let (left, right) = lit_column_range(&mask, top, bottom);
            let bbox = Rect::from_bounds(left, top, right, bottom);
            if bbox.width >= self.config.min_width && bbox.height >= self.config.min_height {
                regions.push(Region::new(bbox, RegionKind::Text));
            }
        }

        log::debug!("projection found {} text line blocks", regions.len());
        regions
    }

    /// The projection strategy has no shape rule.
    fn detect_shapes(&self, _img: &RgbImage) -> Vec<Region> {
        Vec::new()
    }

    fn name(&self) -> &'static str {
        "projection"
    }
}

/// Find vertical bands of rows whose lit-pixel count exceeds
/// `coverage` times the mask width.
///
/// Returns inclusive `(top, bottom)` row pairs. A band closed by a quiet
/// row keeps that row as its bottom; a band still open at the last row
/// ends at `height - 1`.
fn line_bands(mask: &PixelMask, coverage: f32) -> Vec<(u32, u32)> {
    let threshold = mask.width() as f32 * coverage;
    let mut bands = Vec::new();
    let mut in_line = false;
    let mut start = 0;

    for y in 0..mask.height() {
        if mask.row_count(y) as f32 > threshold {
            if !in_line {
                start = y;
                in_line = true;
            }
        } else if in_line {
            bands.push((start, y));
            in_line = false;
        }
    }
    if in_line {
        bands.push((start, mask.height() - 1));
    }

    bands
}

/// Leftmost and rightmost lit columns within rows `top..=bottom`.
///
/// Falls back to the full width when the band has no lit pixel.
fn lit_column_range(mask: &PixelMask, top: u32, bottom: u32) -> (u32, u32) {
    let column_lit = |x: u32| (top..=bottom).any(|y| mask.get(x, y));

    let mut left = 0;
    let mut right = mask.width() - 1;
    for x in 0..mask.width() {
        if column_lit(x) {
            left = x;
            break;
        }
    }
    for x in (0..mask.width()).rev() {
        if column_lit(x) {
            right = x;
            break;
        }
    }
    (left, right)
}
