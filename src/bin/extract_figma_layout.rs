//! Extract element positions from Figma-exported markup.
//!
//! Reads `left-[Npx]` style class tokens from design markup, scales the
//! positions to the target frame width, and writes JSON layout documents
//! plus CSS into the output directory. Without a markup file argument,
//! two built-in sample screens are extracted.
//!
//! Usage:
//!   cargo run --release --bin extract_figma_layout
//!   cargo run --release --bin extract_figma_layout -- [markup_file] [output_dir]

use std::path::{Path, PathBuf};
use std::process;

use wireframe_oxide::config::ScaleConfig;
use wireframe_oxide::css::generate_figma_css;
use wireframe_oxide::figma::{parse_markup, parse_markup_file, scale_layout, FigmaScaledLayout};
use wireframe_oxide::pipeline::DEFAULT_OUTPUT_DIR;

/// First sample screen: a hero title split over two lines. The first
/// paragraph carries a zero-size text token before the real one, the
/// way design exports emit wrapper paragraphs.
const SAMPLE_HOME1: &str = r#"
    <p className="absolute font-light leading-[normal] left-[394px] text-[0px] text-[64px] text-nowrap text-right text-white top-[261px] translate-x-[-100%]" data-node-id="12:101">
      <span className="font-semibold">Flora</span>
      Lane
    </p>
    <p className="absolute font-semibold leading-[normal] left-[399px] text-[0px] text-[128px] text-nowrap text-right text-white top-[318px] translate-x-[-100%]" data-node-id="12:102">
      Gallery
    </p>
"#;

/// Second sample screen: a four-word headline, one word per element.
const SAMPLE_HOME2: &str = r#"
    <p className="absolute font-semibold leading-[normal] left-[103px] text-[64px] text-nowrap text-white top-[285px]" data-node-id="12:110">
      WELCOME
    </p>
    <p className="absolute font-semibold leading-[normal] left-[205px] text-[64px] text-nowrap text-white top-[342px]" data-node-id="12:111">
      TO
    </p>
    <p className="absolute leading-[normal] left-[255px] not-italic text-[64px] text-nowrap text-white top-[342px]" data-node-id="12:112">
      the
    </p>
    <p className="absolute font-light leading-[normal] left-[51px] text-[64px] text-nowrap text-shadow-[0px_4px_4px_rgba(0,0,0,0.25)] text-white top-[399px]" data-node-id="12:113">
      greenhouse
    </p>
"#;

fn print_elements(layout: &FigmaScaledLayout) {
    println!("Found {} elements:", layout.elements.len());
    for (i, el) in layout.elements.iter().enumerate() {
        let font_size = match el.font_size {
            Some(v) => format!("{}px", v),
            None => "null".to_string(),
        };
        println!(
            "  Element {}: left={}px, top={}px, fontSize={}",
            i, el.left, el.top, font_size
        );
    }
}

fn write_outputs(
    layout: &FigmaScaledLayout,
    output_dir: &Path,
    stem: &str,
    prefix: &str,
) -> wireframe_oxide::Result<()> {
    layout.save(output_dir.join(format!("{}.json", stem)))?;
    std::fs::write(
        output_dir.join(format!("{}.css", stem)),
        generate_figma_css(layout, prefix),
    )?;
    Ok(())
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() > 3 {
        eprintln!("Usage: extract_figma_layout [markup_file] [output_dir]");
        process::exit(1);
    }
    let markup_file = args.get(1).map(PathBuf::from);
    let output_dir = args
        .get(2)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

    if let Err(e) = std::fs::create_dir_all(&output_dir) {
        eprintln!("Failed to create output directory: {}", e);
        process::exit(1);
    }

    let scale = ScaleConfig::default();
    let scale_factor = scale.factor();
    let target_width = scale.target_frame_width as u32;

    println!("Extracting layout from Figma design code...\n");

    let result = match &markup_file {
        Some(path) => {
            println!("=== {} ===", path.display());
            let layout = match parse_markup_file(path) {
                Ok(layout) => layout,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    process::exit(1);
                },
            };
            let scaled = scale_layout(&layout, scale_factor, target_width);
            print_elements(&scaled);
            write_outputs(&scaled, &output_dir, "figma-layout", ".home-1")
        },
        None => {
            println!("=== Home 1 ===");
            let scaled1 = scale_layout(&parse_markup(SAMPLE_HOME1), scale_factor, target_width);
            print_elements(&scaled1);

            println!("\n=== Home 2 ===");
            let scaled2 = scale_layout(&parse_markup(SAMPLE_HOME2), scale_factor, target_width);
            print_elements(&scaled2);

            write_outputs(&scaled1, &output_dir, "figma-layout-home1", ".home-1").and_then(|_| {
                write_outputs(&scaled2, &output_dir, "figma-layout-home2", ".home-2")
            })
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    println!("\n✓ Layout extracted!");
    match markup_file {
        Some(_) => {
            println!("  JSON: {}/figma-layout.json", output_dir.display());
            println!("  CSS: {}/figma-layout.css", output_dir.display());
        },
        None => {
            println!("  JSON: {}/figma-layout-home*.json", output_dir.display());
            println!("  CSS: {}/figma-layout-home*.css", output_dir.display());
        },
    }
}
