//! Contour-tracing region detection.
//!
//! An alternative to flood fill that binarizes the image and walks the
//! outer borders of foreground blobs. Text candidates are additionally
//! screened by an area range and an aspect-ratio window to reject
//! oversized or stroke-like false positives.

use crate::config::ContourConfig;
use crate::detect::RegionDetector;
use crate::geometry::Rect;
use crate::mask::{dark_mask, hue_band_mask};
use crate::region::{Region, RegionKind};
use image::{GrayImage, RgbImage};
use imageproc::contours::{find_contours, BorderType};
use std::path::Path;

/// Border-walking detector over binarized masks.
pub struct ContourDetector {
    config: ContourConfig,
}

impl ContourDetector {
    /// Create a detector with the given thresholds.
    pub fn new(config: ContourConfig) -> Self {
        Self { config }
    }

    /// Detect text regions in an image file.
    ///
    /// Unlike the trait entry points, this decodes the file itself and
    /// degrades to an empty region list when decoding fails, logging
    /// the error instead of propagating it.
    pub fn detect_text_file<P: AsRef<Path>>(&self, path: P) -> Vec<Region> {
        match image::open(path.as_ref()) {
            Ok(img) => self.detect_text(&img.to_rgb8()),
            Err(e) => {
                log::error!("could not load image {}: {}", path.as_ref().display(), e);
                Vec::new()
            },
        }
    }

    /// Detect shape regions in an image file, degrading to empty on
    /// decode failure like [`ContourDetector::detect_text_file`].
    pub fn detect_shapes_file<P: AsRef<Path>>(&self, path: P) -> Vec<Region> {
        match image::open(path.as_ref()) {
            Ok(img) => self.detect_shapes(&img.to_rgb8()),
            Err(e) => {
                log::error!("could not load image {}: {}", path.as_ref().display(), e);
                Vec::new()
            },
        }
    }

    fn passes_text_filter(&self, bbox: &Rect) -> bool {
        let area = bbox.area();
        if area <= self.config.min_text_area || area >= self.config.max_text_area {
            return false;
        }
        if bbox.width <= self.config.min_text_dimension
            || bbox.height <= self.config.min_text_dimension
        {
            return false;
        }
        let aspect = bbox.aspect_ratio();
        aspect > self.config.text_aspect_min && aspect < self.config.text_aspect_max
    }
}

impl RegionDetector for ContourDetector {
    fn detect_text(&self, img: &RgbImage) -> Vec<Region> {
        let binary = dark_mask(img, self.config.binarize_threshold).to_binary_image();
        outer_bounding_boxes(&binary)
            .into_iter()
            .filter(|bbox| self.passes_text_filter(bbox))
            .map(|bbox| Region::new(bbox, RegionKind::Text))
            .collect()
    }

    fn detect_shapes(&self, img: &RgbImage) -> Vec<Region> {
        let binary = hue_band_mask(img, &self.config.hsv_band).to_binary_image();
        outer_bounding_boxes(&binary)
            .into_iter()
            .filter(|bbox| bbox.area() > self.config.min_shape_area)
            .map(|bbox| Region::new(bbox, RegionKind::Shape))
            .collect()
    }

    fn name(&self) -> &'static str {
        "contour"
    }
}

/// Bounding boxes of top-level outer contours in a binary image.
///
/// Matches external-only contour retrieval: holes and nested blobs are
/// ignored, each outermost blob contributes one box.
fn outer_bounding_boxes(binary: &GrayImage) -> Vec<Rect> {
    find_contours::<u32>(binary)
        .into_iter()
        .filter(|c| c.border_type == BorderType::Outer && c.parent.is_none())
        .filter_map(|c| {
            let first = c.points.first()?;
            let (mut min_x, mut max_x) = (first.x, first.x);
            let (mut min_y, mut max_y) = (first.y, first.y);
            for p in &c.points {
                min_x = min_x.min(p.x);
                max_x = max_x.max(p.x);
                min_y = min_y.min(p.y);
                max_y = max_y.max(p.y);
            }
            Some(Rect::from_bounds(min_x, min_y, max_x, max_y))
        })
        .collect()
}
