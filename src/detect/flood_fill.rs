//! Connected-component extraction by explicit-stack flood fill.
//!
//! The fill keeps its frontier in a heap-allocated stack rather than on
//! the call stack, so a single huge component cannot overflow it. One
//! visited grid is shared across all fills of a detection pass; every
//! true pixel is visited at most once, which makes the output boxes
//! disjoint by construction.

use crate::config::FloodFillConfig;
use crate::detect::RegionDetector;
use crate::geometry::Rect;
use crate::mask::{bright_mask, green_dominant_mask, PixelMask};
use crate::region::{sort_reading_order, Region, RegionKind};
use image::RgbImage;

/// Acceptance rule applied to each discovered component.
#[derive(Debug, Clone, Copy)]
pub struct ComponentFilter {
    /// Minimum bounding-box area, inclusive.
    pub min_area: u64,
    /// When set, both axes must strictly exceed this.
    pub min_axis: Option<u32>,
    /// Kind assigned to accepted components.
    pub kind: RegionKind,
}

impl ComponentFilter {
    /// The text rule: small minimum area plus a per-axis floor that
    /// discards thin strokes and specks.
    pub fn text(config: &FloodFillConfig) -> Self {
        Self {
            min_area: config.min_text_area,
            min_axis: Some(config.min_text_axis),
            kind: RegionKind::Text,
        }
    }

    /// The shape rule: large minimum area, no per-axis floor.
    pub fn shape(config: &FloodFillConfig) -> Self {
        Self {
            min_area: config.min_shape_area,
            min_axis: None,
            kind: RegionKind::Shape,
        }
    }

    /// Check whether a component's bounding box passes this filter.
    pub fn accepts(&self, bbox: &Rect) -> bool {
        if bbox.area() < self.min_area {
            return false;
        }
        match self.min_axis {
            Some(min) => bbox.width > min && bbox.height > min,
            None => true,
        }
    }
}

/// Flood-fill one component starting at a known true, unvisited pixel.
///
/// Pops coordinates off an explicit stack, marks them visited, widens
/// the running bounds, and pushes in-range 4-neighbors. Out-of-range
/// neighbors are never pushed, so border components clamp naturally.
fn fill_component(mask: &PixelMask, visited: &mut PixelMask, start_x: u32, start_y: u32) -> Rect {
    let mut stack = vec![(start_x, start_y)];
    let (mut min_x, mut max_x) = (start_x, start_x);
    let (mut min_y, mut max_y) = (start_y, start_y);

    while let Some((x, y)) = stack.pop() {
        if visited.get(x, y) || !mask.get(x, y) {
            continue;
        }
        visited.set(x, y, true);

        min_x = min_x.min(x);
        max_x = max_x.max(x);
        min_y = min_y.min(y);
        max_y = max_y.max(y);

        if x > 0 {
            stack.push((x - 1, y));
        }
        if x + 1 < mask.width() {
            stack.push((x + 1, y));
        }
        if y > 0 {
            stack.push((x, y - 1));
        }
        if y + 1 < mask.height() {
            stack.push((x, y + 1));
        }
    }

    Rect::from_bounds(min_x, min_y, max_x, max_y)
}

/// Extract all 4-connected components of true pixels from a mask,
/// keeping those the filter accepts.
///
/// Pixels are scanned in row-major order and components appended in
/// discovery order; callers wanting reading order sort by `(y, x)`
/// afterwards.
pub fn extract_components(mask: &PixelMask, filter: &ComponentFilter) -> Vec<Region> {
    let mut visited = PixelMask::new(mask.width(), mask.height());
    let mut regions = Vec::new();

    for y in 0..mask.height() {
        for x in 0..mask.width() {
            if mask.get(x, y) && !visited.get(x, y) {
                let bbox = fill_component(mask, &mut visited, x, y);
                if filter.accepts(&bbox) {
                    regions.push(Region::new(bbox, filter.kind));
                }
            }
        }
    }

    regions
}

/// The default detector: flood fill over the bright and green-dominant
/// masks.
pub struct FloodFillDetector {
    config: FloodFillConfig,
}

impl FloodFillDetector {
    /// Create a detector with the given thresholds.
    pub fn new(config: FloodFillConfig) -> Self {
        Self { config }
    }
}

impl RegionDetector for FloodFillDetector {
    fn detect_text(&self, img: &RgbImage) -> Vec<Region> {
        let mask = bright_mask(img, self.config.bright_threshold);
        let mut regions = extract_components(&mask, &ComponentFilter::text(&self.config));
        sort_reading_order(&mut regions);
        log::debug!("flood fill found {} text regions", regions.len());
        regions
    }

    fn detect_shapes(&self, img: &RgbImage) -> Vec<Region> {
        let mask = green_dominant_mask(img, self.config.green_floor);
        let regions = extract_components(&mask, &ComponentFilter::shape(&self.config));
        log::debug!("flood fill found {} shape regions", regions.len());
        regions
    }

    fn name(&self) -> &'static str {
        "flood_fill"
    }
}
