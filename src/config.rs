//! Unified configuration for the wireframe extraction pipeline.
//!
//! One [`WireframeConfig`] covers every stage: mask thresholds, the
//! detection strategy, merge behavior, scale normalization, and output
//! naming. Presets reproduce the two stock pipelines (plain and improved).

use crate::mask::HsvBand;

/// Available region detection strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetectorType {
    /// Flood fill over boolean pixel masks.
    ///
    /// Explicit-stack 4-connected component labelling. The default, and
    /// the only strategy with per-axis minimums for text regions.
    #[default]
    FloodFill,

    /// Contour tracing over a binarized or hue-segmented image.
    ///
    /// Uses outer-border contour extraction and filters candidates by
    /// area range and aspect ratio. Degrades to an empty region list
    /// when an input image cannot be decoded.
    Contour,

    /// Row-projection text line detection.
    ///
    /// Finds horizontal bands where enough of the row is lit, then trims
    /// each band to its lit column range. Tuned for large text blocks
    /// and meant to be combined with the merge pass.
    Projection,
}

/// Thresholds for the flood-fill detector.
#[derive(Debug, Clone, Copy)]
pub struct FloodFillConfig {
    /// Minimum channel value for a pixel to count as bright (text).
    ///
    /// Default: 200
    pub bright_threshold: u8,

    /// Minimum green channel value for a pixel to count as a shape pixel.
    ///
    /// The green channel must also exceed both red and blue.
    /// Default: 100
    pub green_floor: u8,

    /// Minimum bounding-box area for an accepted text component.
    ///
    /// Inclusive: a component with area exactly equal to this is kept.
    /// Default: 500
    pub min_text_area: u64,

    /// Per-axis minimum for text components; both width and height must
    /// strictly exceed this.
    ///
    /// Default: 10
    pub min_text_axis: u32,

    /// Minimum bounding-box area for an accepted shape component.
    ///
    /// Shapes have no per-axis minimum. Default: 5000
    pub min_shape_area: u64,
}

impl Default for FloodFillConfig {
    fn default() -> Self {
        Self {
            bright_threshold: 200,
            green_floor: 100,
            min_text_area: 500,
            min_text_axis: 10,
            min_shape_area: 5000,
        }
    }
}

/// Thresholds for the contour detector.
#[derive(Debug, Clone, Copy)]
pub struct ContourConfig {
    /// Grayscale cutoff for the inverted binary threshold; pixels at or
    /// below this luma become text foreground.
    ///
    /// Default: 200
    pub binarize_threshold: u8,

    /// Exclusive lower area bound for text candidates. Default: 100
    pub min_text_area: u64,

    /// Exclusive upper area bound for text candidates, rejecting
    /// oversized false-positive blobs. Default: 50000
    pub max_text_area: u64,

    /// Both text box axes must strictly exceed this. Default: 20
    pub min_text_dimension: u32,

    /// Exclusive lower bound on text width/height ratio. Default: 0.3
    pub text_aspect_min: f32,

    /// Exclusive upper bound on text width/height ratio. Default: 10.0
    pub text_aspect_max: f32,

    /// Exclusive lower area bound for shape candidates. Default: 5000
    pub min_shape_area: u64,

    /// Hue band selecting green-yellow shape pixels.
    pub hsv_band: HsvBand,
}

impl Default for ContourConfig {
    fn default() -> Self {
        Self {
            binarize_threshold: 200,
            min_text_area: 100,
            max_text_area: 50000,
            min_text_dimension: 20,
            text_aspect_min: 0.3,
            text_aspect_max: 10.0,
            min_shape_area: 5000,
            hsv_band: HsvBand::default(),
        }
    }
}

/// Thresholds for the row-projection detector.
#[derive(Debug, Clone, Copy)]
pub struct ProjectionConfig {
    /// Bright-pixel cutoff reused from the flood-fill rule. Default: 200
    pub bright_threshold: u8,

    /// Fraction of the image width a row must have lit to open a text
    /// line band.
    ///
    /// Default: 0.1
    pub row_coverage: f32,

    /// Minimum accepted band width, inclusive. Default: 50
    pub min_width: u32,

    /// Minimum accepted band height, inclusive. Default: 30
    pub min_height: u32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            bright_threshold: 200,
            row_coverage: 0.1,
            min_width: 50,
            min_height: 30,
        }
    }
}

/// Configuration for the region merge pass.
#[derive(Debug, Clone, Copy)]
pub struct MergeConfig {
    /// Whether the pipeline runs the merge pass at all.
    ///
    /// Default: false (the plain pipeline reports raw components)
    pub enabled: bool,

    /// Proximity threshold in pixels. Default: 50
    pub threshold: u32,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            threshold: 50,
        }
    }
}

/// Cross-image scale normalization.
///
/// The design screenshot is captured at a wider frame than the target
/// rendering, so its coordinates are multiplied by
/// `target_frame_width / design_frame_width` before comparison.
#[derive(Debug, Clone, Copy)]
pub struct ScaleConfig {
    /// Nominal width of the target rendering frame. Default: 375.0
    pub target_frame_width: f64,

    /// Nominal width of the design frame. Default: 440.0
    pub design_frame_width: f64,
}

impl ScaleConfig {
    /// The scalar applied to design-image coordinates.
    pub fn factor(&self) -> f64 {
        self.target_frame_width / self.design_frame_width
    }
}

impl Default for ScaleConfig {
    fn default() -> Self {
        Self {
            target_frame_width: 375.0,
            design_frame_width: 440.0,
        }
    }
}

/// Output naming configuration.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// CSS selector prefix for the implementation layout. Default: ".home-1"
    pub current_prefix: String,

    /// CSS selector prefix for the design layout. Default: ".home-1-figma"
    pub figma_prefix: String,

    /// Write `wireframe-improved-*` file names instead of `wireframe-*`.
    ///
    /// Default: false
    pub improved_names: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            current_prefix: ".home-1".to_string(),
            figma_prefix: ".home-1-figma".to_string(),
            improved_names: false,
        }
    }
}

/// Unified configuration for the wireframe extraction pipeline.
#[derive(Debug, Clone, Default)]
pub struct WireframeConfig {
    /// Region detection strategy to use for both images.
    pub detector: DetectorType,

    /// Flood-fill thresholds.
    pub flood_fill: FloodFillConfig,

    /// Contour thresholds.
    pub contour: ContourConfig,

    /// Row-projection thresholds.
    pub projection: ProjectionConfig,

    /// Merge pass behavior.
    pub merge: MergeConfig,

    /// Scale normalization between the two frames.
    pub scale: ScaleConfig,

    /// Output naming.
    pub output: OutputConfig,
}

impl WireframeConfig {
    /// Preset reproducing the improved pipeline: row-projection text
    /// detection, merge pass on, `-improved-` output names.
    pub fn improved() -> Self {
        Self {
            detector: DetectorType::Projection,
            merge: MergeConfig {
                enabled: true,
                threshold: 50,
            },
            output: OutputConfig {
                improved_names: true,
                ..OutputConfig::default()
            },
            ..Self::default()
        }
    }

    /// Preset using contour tracing instead of flood fill.
    pub fn contour_based() -> Self {
        Self {
            detector: DetectorType::Contour,
            ..Self::default()
        }
    }

    /// Set the detection strategy.
    pub fn with_detector(mut self, detector: DetectorType) -> Self {
        self.detector = detector;
        self
    }

    /// Enable or disable the merge pass.
    pub fn with_merge(mut self, enabled: bool) -> Self {
        self.merge.enabled = enabled;
        self
    }

    /// Set the merge proximity threshold in pixels.
    pub fn with_merge_threshold(mut self, threshold: u32) -> Self {
        self.merge.threshold = threshold;
        self
    }

    /// Set the target and design frame widths used for scaling.
    pub fn with_frame_widths(mut self, target: f64, design: f64) -> Self {
        self.scale.target_frame_width = target;
        self.scale.design_frame_width = design;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detector_type_default() {
        assert_eq!(DetectorType::default(), DetectorType::FloodFill);
    }

    #[test]
    fn test_flood_fill_defaults() {
        let config = FloodFillConfig::default();
        assert_eq!(config.bright_threshold, 200);
        assert_eq!(config.green_floor, 100);
        assert_eq!(config.min_text_area, 500);
        assert_eq!(config.min_text_axis, 10);
        assert_eq!(config.min_shape_area, 5000);
    }

    #[test]
    fn test_contour_defaults() {
        let config = ContourConfig::default();
        assert_eq!(config.min_text_area, 100);
        assert_eq!(config.max_text_area, 50000);
        assert_eq!(config.min_text_dimension, 20);
        assert!(config.text_aspect_min < config.text_aspect_max);
    }

    #[test]
    fn test_merge_defaults() {
        let config = MergeConfig::default();
        assert!(!config.enabled);
        assert_eq!(config.threshold, 50);
    }

    #[test]
    fn test_scale_factor() {
        let scale = ScaleConfig::default();
        assert!((scale.factor() - 375.0 / 440.0).abs() < 1e-12);
    }

    #[test]
    fn test_default_config_uses_plain_names() {
        let config = WireframeConfig::default();
        assert_eq!(config.detector, DetectorType::FloodFill);
        assert!(!config.merge.enabled);
        assert!(!config.output.improved_names);
        assert_eq!(config.output.current_prefix, ".home-1");
        assert_eq!(config.output.figma_prefix, ".home-1-figma");
    }

    #[test]
    fn test_improved_preset() {
        let config = WireframeConfig::improved();
        assert_eq!(config.detector, DetectorType::Projection);
        assert!(config.merge.enabled);
        assert_eq!(config.merge.threshold, 50);
        assert!(config.output.improved_names);
    }

    #[test]
    fn test_contour_preset() {
        let config = WireframeConfig::contour_based();
        assert_eq!(config.detector, DetectorType::Contour);
        assert!(!config.merge.enabled);
    }

    #[test]
    fn test_builder_chain() {
        let config = WireframeConfig::default()
            .with_detector(DetectorType::Projection)
            .with_merge(true)
            .with_merge_threshold(30)
            .with_frame_widths(390.0, 440.0);
        assert_eq!(config.detector, DetectorType::Projection);
        assert!(config.merge.enabled);
        assert_eq!(config.merge.threshold, 30);
        assert!((config.scale.factor() - 390.0 / 440.0).abs() < 1e-12);
    }
}
