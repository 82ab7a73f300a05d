//! Positional comparison between the two region sets.
//!
//! Pairing is purely positional: element i of one list is compared to
//! element i of the other, each list in its own order. No similarity
//! matching is attempted, so once the lists diverge in count or content
//! the remaining pairs are not meaningful; the count mismatch is
//! surfaced instead of being papered over.

use crate::geometry::Rect;
use crate::region::{Region, RegionKind};

/// Deltas for one index-aligned pair of regions.
#[derive(Debug, Clone, Copy)]
pub struct ElementDelta {
    /// Index in both lists
    pub index: usize,
    /// Kind of the implementation-side region
    pub kind: RegionKind,
    /// Implementation box, unscaled
    pub current: Rect,
    /// Design box, unscaled
    pub design: Rect,
    /// Design left edge after scaling
    pub scaled_left: f64,
    /// Design top edge after scaling
    pub scaled_top: f64,
    /// `|x_current - x_design * scale|` in pixels
    pub dx: f64,
    /// `|y_current - y_design * scale|` in pixels
    pub dy: f64,
}

/// Result of comparing two region sets.
#[derive(Debug, Clone)]
pub struct LayoutComparison {
    /// One delta per index present in both lists
    pub pairs: Vec<ElementDelta>,
    /// Number of regions on the implementation side
    pub current_count: usize,
    /// Number of regions on the design side
    pub design_count: usize,
}

impl LayoutComparison {
    /// Compare two region lists, applying `design_scale` to the design
    /// side's coordinates.
    ///
    /// Logs a warning when the counts differ; the pairs past the
    /// shorter list simply do not exist.
    pub fn build(current: &[Region], design: &[Region], design_scale: f64) -> Self {
        if current.len() != design.len() {
            log::warn!(
                "element counts differ (current: {}, figma: {}); index pairing is unreliable past the divergence",
                current.len(),
                design.len()
            );
        }

        let pairs = current
            .iter()
            .zip(design.iter())
            .enumerate()
            .map(|(index, (c, d))| {
                let scaled_left = d.bbox.x as f64 * design_scale;
                let scaled_top = d.bbox.y as f64 * design_scale;
                ElementDelta {
                    index,
                    kind: c.kind,
                    current: c.bbox,
                    design: d.bbox,
                    scaled_left,
                    scaled_top,
                    dx: (c.bbox.x as f64 - scaled_left).abs(),
                    dy: (c.bbox.y as f64 - scaled_top).abs(),
                }
            })
            .collect();

        Self {
            pairs,
            current_count: current.len(),
            design_count: design.len(),
        }
    }

    /// Whether the two sides detected a different number of regions.
    pub fn count_mismatch(&self) -> bool {
        self.current_count != self.design_count
    }
}
