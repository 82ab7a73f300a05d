//! Region detection strategies.
//!
//! This module provides pluggable strategies for discovering layout
//! regions in a screenshot.
//!
//! # Available Strategies
//!
//! - [`FloodFillDetector`]: explicit-stack connected components over
//!   boolean pixel masks (the default)
//! - [`ContourDetector`]: contour tracing over binarized / hue-segmented
//!   images
//! - [`ProjectionDetector`]: row-projection text line detection

mod contour;
mod flood_fill;
mod projection;

pub use contour::ContourDetector;
pub use flood_fill::{extract_components, ComponentFilter, FloodFillDetector};
pub use projection::ProjectionDetector;

use crate::config::{DetectorType, WireframeConfig};
use crate::region::Region;
use image::RgbImage;

/// Trait for region detection over a decoded image.
///
/// Implementations classify pixels and group them into bounding boxes.
/// Detection itself is infallible once an image is in memory; decode
/// failure handling differs per strategy and lives on the concrete
/// types, not this trait.
pub trait RegionDetector: Send + Sync {
    /// Detect text-like regions.
    fn detect_text(&self, img: &RgbImage) -> Vec<Region>;

    /// Detect shape-like regions.
    fn detect_shapes(&self, img: &RgbImage) -> Vec<Region>;

    /// Return the name of this strategy for logging.
    fn name(&self) -> &'static str;
}

/// Create a region detector based on configuration.
pub fn create_detector(config: &WireframeConfig) -> Box<dyn RegionDetector> {
    match config.detector {
        DetectorType::FloodFill => Box::new(FloodFillDetector::new(config.flood_fill)),
        DetectorType::Contour => Box::new(ContourDetector::new(config.contour)),
        DetectorType::Projection => Box::new(ProjectionDetector::new(config.projection)),
    }
}
