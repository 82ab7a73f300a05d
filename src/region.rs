//! Detected layout regions.

use crate::geometry::Rect;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a detected region.
///
/// Detectors emit only [`RegionKind::Text`] and [`RegionKind::Shape`];
/// the remaining variants exist for annotation color mapping and for
/// layouts produced from markup rather than pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegionKind {
    /// Light-on-dark text block
    Text,
    /// Large colored graphical shape
    Shape,
    /// Logo mark
    Logo,
    /// Anything else
    Other,
}

impl RegionKind {
    /// Lowercase name, as used in labels and serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            RegionKind::Text => "text",
            RegionKind::Shape => "shape",
            RegionKind::Logo => "logo",
            RegionKind::Other => "other",
        }
    }
}

impl fmt::Display for RegionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A detected region: a bounding box with a classification and its area.
///
/// Regions are immutable once placed in a final region set; only the
/// merge pass grows one in place while folding neighbors in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// Bounding box in source-image pixel coordinates
    pub bbox: Rect,
    /// Classification
    pub kind: RegionKind,
    /// Bounding-box area in pixels
    pub area: u64,
}

impl Region {
    /// Create a region; the area is derived from the bounding box.
    pub fn new(bbox: Rect, kind: RegionKind) -> Self {
        Self {
            bbox,
            kind,
            area: bbox.area(),
        }
    }
}

/// Sort regions into reading order: top-to-bottom, then left-to-right.
///
/// Keys are `(y, x)` of each bounding box; the sort is stable, so
/// regions sharing a corner keep their relative order.
pub fn sort_reading_order(regions: &mut [Region]) {
    regions.sort_by_key(|r| (r.bbox.y, r.bbox.x));
}
