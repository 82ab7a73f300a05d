//! Extract wireframe geometry from an implementation/design image pair.
//!
//! Detects text and shape regions in both screenshots, writes annotated
//! wireframe PNGs, JSON layout documents and CSS into the output
//! directory, then prints a positional comparison of the two layouts.
//!
//! Usage:
//!   cargo run --release --bin create_wireframe -- <image1> <image2> [output_dir]
//!   cargo run --release --bin create_wireframe -- <image1> <image2> [output_dir] --improved

use std::path::PathBuf;
use std::process;

use wireframe_oxide::config::WireframeConfig;
use wireframe_oxide::pipeline::{PipelineReport, WireframePipeline, DEFAULT_OUTPUT_DIR};
use wireframe_oxide::region::RegionKind;

struct CliArgs {
    image1: PathBuf,
    image2: PathBuf,
    output_dir: PathBuf,
    improved: bool,
}

impl CliArgs {
    fn from_args() -> Option<Self> {
        let args: Vec<String> = std::env::args().collect();
        let mut positional = Vec::new();
        let mut improved = false;

        for arg in &args[1..] {
            match arg.as_str() {
                "--improved" => improved = true,
                other => positional.push(other.to_string()),
            }
        }

        if positional.len() < 2 || positional.len() > 3 {
            return None;
        }

        Some(Self {
            image1: PathBuf::from(&positional[0]),
            image2: PathBuf::from(&positional[1]),
            output_dir: positional
                .get(2)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR)),
            improved,
        })
    }
}

fn print_comparison(report: &PipelineReport, improved: bool) {
    if report.comparison.pairs.is_empty() {
        return;
    }

    if improved {
        println!("\nElement positions:");
    } else {
        println!("\nFirst few elements comparison:");
    }

    let shown = if improved { report.comparison.pairs.len() } else { 3 };
    for pair in report.comparison.pairs.iter().take(shown) {
        println!("  Element {}:", pair.index);
        println!(
            "    Current: ({}, {}) {}x{}",
            pair.current.x, pair.current.y, pair.current.width, pair.current.height
        );
        println!(
            "    Figma:   ({}, {}) {}x{}",
            pair.design.x, pair.design.y, pair.design.width, pair.design.height
        );
        if improved {
            println!("    Scaled:  ({:.1}, {:.1})", pair.scaled_left, pair.scaled_top);
            println!("    Diff:    x={:.1}px, y={:.1}px", pair.dx, pair.dy);
        } else if pair.kind == RegionKind::Text {
            // Shape positions drift with rendering differences; only
            // text deltas are meaningful in the quick report.
            println!("    Diff:    x={:.1}px, y={:.1}px", pair.dx, pair.dy);
        }
    }
}

fn main() {
    env_logger::init();

    let Some(args) = CliArgs::from_args() else {
        eprintln!("Usage: create_wireframe <image1> <image2> [output_dir] [--improved]");
        process::exit(1);
    };

    let config = if args.improved {
        WireframeConfig::improved()
    } else {
        WireframeConfig::default()
    };
    let pipeline = WireframePipeline::with_config(config);

    println!("Processing images...");
    println!("  Current: {}", args.image1.display());
    println!("  Figma: {}", args.image2.display());

    let report = match pipeline.run(&args.image1, &args.image2, &args.output_dir) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        },
    };

    if report.design_resized {
        println!("  Resized design image to match the implementation");
    }

    println!("\nDetection:");
    println!(
        "  Current: {} text regions, {} shapes",
        report.current_count_of(RegionKind::Text),
        report.current_count_of(RegionKind::Shape)
    );
    println!(
        "  Figma: {} text regions, {} shapes",
        report.design_count_of(RegionKind::Text),
        report.design_count_of(RegionKind::Shape)
    );

    println!("\n✓ Complete!");
    println!("  Wireframes: {}/wireframe-*.png", args.output_dir.display());
    println!("  JSON: {}/wireframe-*.json", args.output_dir.display());
    println!("  CSS: {}/wireframe-*.css", args.output_dir.display());

    println!("\nLayout Summary:");
    println!("  Current: {} elements", report.current_regions.len());
    println!("  Figma: {} elements", report.design_regions.len());

    print_comparison(&report, args.improved);
}
