//! Merging of nearby regions into composite blocks.
//!
//! Detection over-segments a text line into per-word or per-glyph
//! clusters; this pass coalesces boxes that sit on the same row or in
//! the same column within a pixel threshold.

use crate::region::Region;

/// Accumulator-based region merger.
///
/// Regions are processed in list order. Each not-yet-consumed region
/// opens an accumulator, which then scans all later unconsumed regions
/// against its *current* bounds: matches expand the accumulator in
/// place, so later candidates are compared against the grown box.
/// Merging is therefore order-sensitive and transitive only through the
/// accumulator. Each region is consumed at most once.
///
/// Comparator boundaries: the top-edge / left-edge offset checks are
/// strict (`< threshold`); the gap checks are inclusive (`<= threshold`)
/// and signed, so overlapping and abutting boxes always satisfy them.
/// A candidate within the vertical offset threshold is only ever tried
/// horizontally; the vertical rule applies to the rest.
///
/// Output order follows accumulator opening order, not spatial order;
/// callers wanting reading order re-sort by `(y, x)` afterwards.
pub struct RegionMerger {
    threshold: u32,
}

impl RegionMerger {
    /// Create a merger with the given proximity threshold in pixels.
    pub fn new(threshold: u32) -> Self {
        Self { threshold }
    }

    /// Merge nearby regions into enclosing boxes.
    ///
    /// A merged region keeps the kind of the region that opened its
    /// accumulator, and its area is recomputed from the enclosing box.
    pub fn merge(&self, regions: &[Region]) -> Vec<Region> {
        if regions.is_empty() {
            return Vec::new();
        }

        let t = self.threshold as i64;
        let mut merged = Vec::new();
        let mut used = vec![false; regions.len()];

        for i in 0..regions.len() {
            if used[i] {
                continue;
            }
            let mut acc = regions[i];

            for j in (i + 1)..regions.len() {
                if used[j] {
                    continue;
                }
                let other = &regions[j];
                let dy = (other.bbox.y as i64 - acc.bbox.y as i64).abs();

                if dy < t {
                    // Same row level: merge across the horizontal gap
                    if acc.bbox.gap_x(&other.bbox) <= t {
                        acc.bbox = acc.bbox.union(&other.bbox);
                        acc.area = acc.bbox.area();
                        used[j] = true;
                    }
                } else {
                    // Same column level: merge across the vertical gap
                    let dx = (other.bbox.x as i64 - acc.bbox.x as i64).abs();
                    if dx < t && acc.bbox.gap_y(&other.bbox) <= t {
                        acc.bbox = acc.bbox.union(&other.bbox);
                        acc.area = acc.bbox.area();
                        used[j] = true;
                    }
                }
            }

            used[i] = true;
            merged.push(acc);
        }

        merged
    }
}
