//! Wireframe extraction pipeline.
//!
//! Orchestrates the full flow for one image pair:
//!
//! ```text
//! implementation.png        design.png
//!         ↓                      ↓ (resized to match)
//! [RegionDetector] (pixels → Region[])
//!         ↓
//! [RegionMerger] (optional fragment coalescing)
//!         ↓
//! annotated PNGs + LayoutDocument JSON + CSS
//!         ↓
//! [LayoutComparison] (positional deltas for the console)
//! ```
//!
//! One invocation handles exactly one pair and writes every output file
//! into one directory. Writes are plain open-write-close; a failure
//! partway through can leave earlier outputs updated and later ones
//! stale.

use std::path::{Path, PathBuf};

use image::imageops::{self, FilterType};
use image::RgbImage;

use crate::annotate::Annotator;
use crate::compare::LayoutComparison;
use crate::config::WireframeConfig;
use crate::css::generate_css;
use crate::detect::{create_detector, RegionDetector};
use crate::error::Result;
use crate::layout::LayoutDocument;
use crate::merge::RegionMerger;
use crate::region::{sort_reading_order, Region};

/// Output directory used when the caller does not supply one.
pub const DEFAULT_OUTPUT_DIR: &str = "scripts/output";

const FILE_FIGMA_RESIZED: &str = "figma-resized.png";
const FILE_COMPARISON_PNG: &str = "wireframe-comparison.png";
const FILE_CURRENT_JSON: &str = "wireframe-current.json";
const FILE_FIGMA_JSON: &str = "wireframe-figma.json";
const FILE_CURRENT_CSS: &str = "wireframe-current.css";
const FILE_FIGMA_CSS: &str = "wireframe-figma.css";

/// Everything a caller needs to report on one pipeline run.
#[derive(Debug)]
pub struct PipelineReport {
    /// Final region set for the implementation screenshot
    pub current_regions: Vec<Region>,
    /// Final region set for the design screenshot
    pub design_regions: Vec<Region>,
    /// Index-aligned positional deltas between the two sets
    pub comparison: LayoutComparison,
    /// Scale factor applied to the design side
    pub scale_factor: f64,
    /// Whether the design image was resized to match the first
    pub design_resized: bool,
    /// Paths of every file written, in write order
    pub written: Vec<PathBuf>,
}

impl PipelineReport {
    /// Number of regions of one kind on the implementation side.
    pub fn current_count_of(&self, kind: crate::region::RegionKind) -> usize {
        self.current_regions.iter().filter(|r| r.kind == kind).count()
    }

    /// Number of regions of one kind on the design side.
    pub fn design_count_of(&self, kind: crate::region::RegionKind) -> usize {
        self.design_regions.iter().filter(|r| r.kind == kind).count()
    }
}

/// The wireframe extraction pipeline.
///
/// This is the main entry point: it loads the image pair, runs the
/// configured detector, optionally merges fragments, and writes the
/// annotated PNG / JSON / CSS triad plus the comparison canvas.
pub struct WireframePipeline {
    config: WireframeConfig,
    detector: Box<dyn RegionDetector>,
    annotator: Annotator,
}

impl WireframePipeline {
    /// Create a pipeline with default configuration.
    pub fn new() -> Self {
        Self::with_config(WireframeConfig::default())
    }

    /// Create a pipeline with custom configuration.
    pub fn with_config(config: WireframeConfig) -> Self {
        let detector = create_detector(&config);
        Self {
            config,
            detector,
            annotator: Annotator::default(),
        }
    }

    /// Get the current configuration.
    pub fn config(&self) -> &WireframeConfig {
        &self.config
    }

    /// Run the full extraction for one image pair, writing all outputs
    /// into `output_dir` (created if absent).
    pub fn run(
        &self,
        image1: impl AsRef<Path>,
        image2: impl AsRef<Path>,
        output_dir: impl AsRef<Path>,
    ) -> Result<PipelineReport> {
        let output_dir = output_dir.as_ref();
        std::fs::create_dir_all(output_dir)?;

        let img1 = image::open(image1.as_ref())?.to_rgb8();
        let mut img2 = image::open(image2.as_ref())?.to_rgb8();

        let mut written = Vec::new();

        // The detectors and the positional comparison assume both images
        // share one coordinate space.
        let design_resized = img2.dimensions() != img1.dimensions();
        if design_resized {
            log::warn!(
                "resizing design image from {}x{} to {}x{}",
                img2.width(),
                img2.height(),
                img1.width(),
                img1.height()
            );
            img2 = imageops::resize(&img2, img1.width(), img1.height(), FilterType::Lanczos3);
            let path = output_dir.join(FILE_FIGMA_RESIZED);
            img2.save(&path)?;
            written.push(path);
        }

        let current_regions = self.detect_regions(&img1, "current");
        let design_regions = self.detect_regions(&img2, "figma");

        let (current_png, figma_png) = self.annotated_names();
        for (image, regions, name) in [
            (&img1, &current_regions, current_png),
            (&img2, &design_regions, figma_png),
        ] {
            let path = output_dir.join(name);
            self.annotator.annotate(image, regions).save(&path)?;
            written.push(path);
        }

        let comparison_path = output_dir.join(FILE_COMPARISON_PNG);
        self.annotator
            .render_comparison(img1.width(), img1.height(), &current_regions, &design_regions)
            .save(&comparison_path)?;
        written.push(comparison_path);

        let scale_factor = self.config.scale.factor();
        let current_doc = LayoutDocument::from_regions(&current_regions, 1.0, img1.width());
        let figma_doc = LayoutDocument::from_regions(&design_regions, scale_factor, img2.width());
        for (doc, name) in [(&current_doc, FILE_CURRENT_JSON), (&figma_doc, FILE_FIGMA_JSON)] {
            let path = output_dir.join(name);
            doc.save(&path)?;
            written.push(path);
        }

        for (doc, prefix, name) in [
            (&current_doc, &self.config.output.current_prefix, FILE_CURRENT_CSS),
            (&figma_doc, &self.config.output.figma_prefix, FILE_FIGMA_CSS),
        ] {
            let path = output_dir.join(name);
            std::fs::write(&path, generate_css(doc, prefix))?;
            written.push(path);
        }

        let comparison = LayoutComparison::build(&current_regions, &design_regions, scale_factor);

        Ok(PipelineReport {
            current_regions,
            design_regions,
            comparison,
            scale_factor,
            design_resized,
            written,
        })
    }

    /// Detect text and shape regions on one image, applying the merge
    /// pass when configured.
    ///
    /// Without merging the list keeps each detector's own order, text
    /// regions first. With merging the merged list is re-sorted into
    /// reading order, since merge output order follows the seeds.
    fn detect_regions(&self, image: &RgbImage, side: &str) -> Vec<Region> {
        let mut regions = self.detector.detect_text(image);
        let text_count = regions.len();
        regions.extend(self.detector.detect_shapes(image));
        log::info!(
            "{}: {} text + {} shape regions via {}",
            side,
            text_count,
            regions.len() - text_count,
            self.detector.name()
        );

        if self.config.merge.enabled {
            let merger = RegionMerger::new(self.config.merge.threshold);
            regions = merger.merge(&regions);
            sort_reading_order(&mut regions);
            log::info!("{}: {} regions after merge", side, regions.len());
        }
        regions
    }

    fn annotated_names(&self) -> (&'static str, &'static str) {
        if self.config.output.improved_names {
            ("wireframe-improved-current.png", "wireframe-improved-figma.png")
        } else {
            ("wireframe-current.png", "wireframe-figma.png")
        }
    }
}

impl Default for WireframePipeline {
    fn default() -> Self {
        Self::new()
    }
}
