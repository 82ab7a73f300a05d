// Allow some clippy lints that are too pedantic for this project
#![allow(clippy::too_many_arguments)]
#![allow(clippy::needless_range_loop)]

//! # Wireframe Oxide
//!
//! Heuristic layout-geometry extraction from UI screenshots.
//!
//! Given a rendered implementation screenshot and a design-tool export,
//! the library detects text blocks and graphical shapes as bounding
//! boxes, then normalizes both sets into one coordinate space and
//! reports how far the implementation drifts from the design.
//!
//! ## Core Features
//!
//! - **Region Detection**: 3 pluggable strategies (flood fill over
//!   threshold masks, contour tracing, row-projection banding)
//! - **Fragment Merging**: distance-threshold coalescing of
//!   over-segmented text lines
//! - **Scale Normalization**: design-frame to target-frame projection
//!   with one-decimal rounding
//! - **Outputs**: annotated PNGs, pretty-printed JSON layout documents,
//!   absolute-position CSS rules, console delta report
//! - **Figma Markup Parsing**: reads explicit `left-[Npx]` style pixel
//!   coordinates from exported markup, bypassing pixel analysis
//!
//! This is deliberately not a computer-vision system: no OCR, no model
//! inference, just pixel thresholds and connected components tuned for
//! flat UI screenshots.
//!
//! ## Quick Start
//!
//! ```ignore
//! use wireframe_oxide::config::WireframeConfig;
//! use wireframe_oxide::pipeline::WireframePipeline;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Default: flood-fill detection, no merge pass
//! let pipeline = WireframePipeline::new();
//! let report = pipeline.run("current.png", "figma.png", "scripts/output")?;
//!
//! println!(
//!     "current: {} elements, figma: {} elements",
//!     report.current_regions.len(),
//!     report.design_regions.len()
//! );
//!
//! // Projection detection plus fragment merging
//! let improved = WireframePipeline::with_config(WireframeConfig::improved());
//! improved.run("current.png", "figma.png", "scripts/output")?;
//! # Ok(())
//! # }
//! ```
//!
//! ## License
//!
//! Licensed under either of:
//!
//! * Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
//! * MIT license ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)
//!
//! at your option.

#![warn(missing_docs)]

// Error handling
pub mod error;

// Geometry and the region model
pub mod geometry;
pub mod region;

// Pixel masks
pub mod mask;

// Region detection
pub mod detect;
pub mod merge;

// Layout documents and generated output
pub mod compare;
pub mod css;
pub mod layout;

// Annotated image rendering
pub mod annotate;

// Figma markup parsing
pub mod figma;

// Configuration and orchestration
pub mod config;
pub mod pipeline;

pub use compare::{ElementDelta, LayoutComparison};
pub use config::{DetectorType, WireframeConfig};
pub use error::{Error, Result};
pub use geometry::Rect;
pub use layout::{LayoutDocument, LayoutElement};
pub use pipeline::{PipelineReport, WireframePipeline, DEFAULT_OUTPUT_DIR};
pub use region::{Region, RegionKind};

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
