//! Layout documents: scaled, serializable views of a region set.
//!
//! A [`LayoutDocument`] projects one image's regions into a target
//! coordinate space by a scalar factor, keeping the unscaled pixel
//! values alongside. It is the durable JSON artifact of a run and the
//! input to CSS generation.

use crate::error::Result;
use crate::region::{Region, RegionKind};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Round to one decimal place, the precision of all scaled fields.
pub(crate) fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

/// Scaled position of one element, in target-frame pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Left edge
    pub left: f64,
    /// Top edge
    pub top: f64,
    /// Width
    pub width: f64,
    /// Height
    pub height: f64,
}

/// Unscaled source-image bounds of one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OriginalBounds {
    /// Left edge
    pub left: u32,
    /// Top edge
    pub top: u32,
    /// Width
    pub width: u32,
    /// Height
    pub height: u32,
}

/// One element of a layout document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutElement {
    /// Stable id of the form `element_{index}`
    pub id: String,
    /// Region classification
    #[serde(rename = "type")]
    pub kind: RegionKind,
    /// Scaled position, rounded to one decimal
    pub position: Position,
    /// Unscaled pixel bounds, when carried
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original: Option<OriginalBounds>,
}

/// A position-keyed layout extracted from one image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutDocument {
    /// Elements in detection order
    pub elements: Vec<LayoutElement>,
    /// Scalar applied to every geometric field
    pub scale_factor: f64,
    /// Pixel width of the source frame
    pub frame_width: u32,
}

impl LayoutDocument {
    /// Build a document from regions, multiplying each geometric field
    /// by `scale_factor` and rounding to one decimal.
    ///
    /// No clamping is applied: a region extending past the design frame
    /// scales to coordinates past the target frame, and that is fine.
    pub fn from_regions(regions: &[Region], scale_factor: f64, frame_width: u32) -> Self {
        let elements = regions
            .iter()
            .enumerate()
            .map(|(i, region)| LayoutElement {
                id: format!("element_{}", i),
                kind: region.kind,
                position: Position {
                    left: round1(region.bbox.x as f64 * scale_factor),
                    top: round1(region.bbox.y as f64 * scale_factor),
                    width: round1(region.bbox.width as f64 * scale_factor),
                    height: round1(region.bbox.height as f64 * scale_factor),
                },
                original: Some(OriginalBounds {
                    left: region.bbox.x,
                    top: region.bbox.y,
                    width: region.bbox.width,
                    height: region.bbox.height,
                }),
            })
            .collect();

        Self {
            elements,
            scale_factor,
            frame_width,
        }
    }

    /// Serialize as pretty-printed JSON (2-space indentation).
    pub fn to_pretty_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a document back from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Write the document to a JSON file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        fs::write(path, self.to_pretty_json()?)?;
        Ok(())
    }

    /// Read a document from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;

    fn sample_regions() -> Vec<Region> {
        vec![
            Region::new(Rect::new(10, 10, 40, 20), RegionKind::Text),
            Region::new(Rect::new(5, 60, 120, 80), RegionKind::Shape),
        ]
    }

    #[test]
    fn test_identity_scale_preserves_values() {
        let doc = LayoutDocument::from_regions(&sample_regions(), 1.0, 375);
        assert_eq!(doc.elements.len(), 2);
        let first = &doc.elements[0];
        assert_eq!(first.position.left, 10.0);
        assert_eq!(first.position.top, 10.0);
        assert_eq!(first.position.width, 40.0);
        assert_eq!(first.position.height, 20.0);
        let original = first.original.as_ref().unwrap();
        assert_eq!(original.left, 10);
        assert_eq!(original.width, 40);
    }

    #[test]
    fn test_scaling_rounds_to_one_decimal() {
        let regions = vec![Region::new(Rect::new(100, 200, 50, 30), RegionKind::Text)];
        let scale = 375.0 / 440.0;
        let doc = LayoutDocument::from_regions(&regions, scale, 440);
        let pos = &doc.elements[0].position;
        assert_eq!(pos.left, 85.2); // 85.227... rounds down
        assert_eq!(pos.top, 170.5); // 170.454...
        assert_eq!(pos.width, 42.6); // 42.613...
        assert_eq!(pos.height, 25.6); // 25.568...
        // Originals keep the unscaled integers
        assert_eq!(doc.elements[0].original.unwrap().left, 100);
    }

    #[test]
    fn test_element_ids_are_sequential() {
        let doc = LayoutDocument::from_regions(&sample_regions(), 1.0, 375);
        assert_eq!(doc.elements[0].id, "element_0");
        assert_eq!(doc.elements[1].id, "element_1");
    }

    #[test]
    fn test_no_clamping_past_frame_width() {
        let regions = vec![Region::new(Rect::new(500, 0, 100, 10), RegionKind::Text)];
        let doc = LayoutDocument::from_regions(&regions, 1.0, 375);
        assert!(doc.elements[0].position.left > doc.frame_width as f64);
    }

    #[test]
    fn test_json_round_trip() {
        let doc = LayoutDocument::from_regions(&sample_regions(), 375.0 / 440.0, 440);
        let json = doc.to_pretty_json().unwrap();
        let back = LayoutDocument::from_json(&json).unwrap();
        assert_eq!(doc, back);
    }

    #[test]
    fn test_json_shape() {
        let doc = LayoutDocument::from_regions(&sample_regions()[..1], 1.0, 375);
        let json = doc.to_pretty_json().unwrap();
        assert!(json.contains("\"type\": \"text\""));
        assert!(json.contains("\"id\": \"element_0\""));
        assert!(json.contains("\"position\""));
        assert!(json.contains("\"original\""));
        assert!(json.contains("\"frame_width\": 375"));
    }

    #[test]
    fn test_missing_original_is_accepted() {
        let json = r#"{
          "elements": [
            {
              "id": "element_0",
              "type": "text",
              "position": { "left": 1.0, "top": 2.0, "width": 3.0, "height": 4.0 }
            }
          ],
          "scale_factor": 1.0,
          "frame_width": 375
        }"#;
        let doc = LayoutDocument::from_json(json).unwrap();
        assert!(doc.elements[0].original.is_none());
    }

    #[test]
    fn test_round1() {
        assert_eq!(round1(85.22727), 85.2);
        assert_eq!(round1(85.25), 85.3);
        assert_eq!(round1(10.0), 10.0);
    }
}
