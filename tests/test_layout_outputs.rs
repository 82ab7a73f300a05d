//! Integration tests for layout documents, CSS generation and Figma
//! markup parsing.

use tempfile::tempdir;
use wireframe_oxide::css::{generate_css, generate_figma_css};
use wireframe_oxide::figma::{parse_markup, scale_layout};
use wireframe_oxide::geometry::Rect;
use wireframe_oxide::layout::LayoutDocument;
use wireframe_oxide::region::{Region, RegionKind};

fn sample_regions() -> Vec<Region> {
    vec![
        Region::new(Rect::new(100, 200, 50, 30), RegionKind::Text),
        Region::new(Rect::new(20, 300, 120, 80), RegionKind::Shape),
    ]
}

mod layout_document_tests {
    use super::*;

    #[test]
    fn test_json_round_trip_through_disk() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("layout.json");

        let doc = LayoutDocument::from_regions(&sample_regions(), 375.0 / 440.0, 440);
        doc.save(&path).expect("save layout");

        let loaded = LayoutDocument::load(&path).expect("load layout");
        assert_eq!(loaded, doc);
        assert_eq!(loaded.elements.len(), 2);
        assert_eq!(loaded.elements[0].id, "element_0");
        assert_eq!(loaded.elements[1].id, "element_1");
    }

    #[test]
    fn test_identity_scale_preserves_geometry() {
        let doc = LayoutDocument::from_regions(&sample_regions(), 1.0, 440);
        let first = &doc.elements[0];
        assert_eq!(first.position.left, 100.0);
        assert_eq!(first.position.top, 200.0);
        assert_eq!(first.position.width, 50.0);
        assert_eq!(first.position.height, 30.0);
    }

    #[test]
    fn test_mobile_scale_rounds_to_one_decimal() {
        let doc = LayoutDocument::from_regions(&sample_regions(), 375.0 / 440.0, 440);
        let first = &doc.elements[0];
        assert_eq!(first.position.left, 85.2);
        assert_eq!(first.position.top, 170.5);
        assert_eq!(first.position.width, 42.6);
        assert_eq!(first.position.height, 25.6);
        // The unscaled box rides along.
        let original = first.original.expect("original bounds");
        assert_eq!(original.left, 100);
        assert_eq!(original.width, 50);
    }
}

mod css_tests {
    use super::*;

    #[test]
    fn test_wireframe_css_block_shape() {
        let doc = LayoutDocument::from_regions(&sample_regions(), 1.0, 440);
        let css = generate_css(&doc, ".home-1");

        assert!(css.starts_with("/* Generated from wireframe - 2 elements */"));
        assert!(css.contains(".home-1__element-0 {"));
        assert!(css.contains(".home-1__element-1 {"));
        assert!(css.contains("position: absolute;"));
        assert!(css.contains("left: 100px;"));
        assert!(css.contains("top: 200px;"));
    }

    #[test]
    fn test_empty_document_still_has_headers() {
        let doc = LayoutDocument::from_regions(&[], 1.0, 375);
        let css = generate_css(&doc, ".home-1");
        assert!(css.contains("0 elements"));
        assert!(!css.contains("element-0"));
    }
}

mod figma_tests {
    use super::*;

    const MARKUP: &str = r#"
    <p className="absolute left-[394px] text-[0px] text-[64px] text-white top-[261px]">
      Heading
    </p>
    <div className="absolute left-[10px] top-[20px] w-[320px] h-[240px]">
    </div>
    <p className="absolute text-[32px] text-white top-[400px]">
      Footer
    </p>
    "#;

    #[test]
    fn test_parse_scale_and_serialize() {
        let layout = parse_markup(MARKUP);
        assert_eq!(layout.elements.len(), 3);

        // First text token wins, so the wrapper's 0px font size is kept
        // as an explicit zero.
        assert_eq!(layout.elements[0].font_size, Some(0.0));
        // Missing left defaults to zero; absent dimensions stay None.
        assert_eq!(layout.elements[2].left, 0.0);
        assert_eq!(layout.elements[2].width, None);

        let scaled = scale_layout(&layout, 375.0 / 440.0, 375);
        assert_eq!(scaled.target_width, 375);
        assert_eq!(scaled.elements[0].left, 335.8);
        assert_eq!(scaled.elements[1].width, Some(272.7));

        let json = scaled.to_pretty_json().expect("serialize scaled layout");
        // Explicit zero and null stay distinguishable in the output.
        assert!(json.contains("\"fontSize\": 0.0"));
        assert!(json.contains("\"width\": null"));
    }

    #[test]
    fn test_figma_css_emits_only_present_dimensions() {
        let layout = parse_markup(MARKUP);
        let scaled = scale_layout(&layout, 1.0, 440);
        let css = generate_figma_css(&scaled, ".home-2");

        assert!(css.starts_with("/* Generated from Figma layout - 3 elements */"));
        assert!(css.contains(".home-2__element-1 {"));
        assert!(css.contains("width: 320px;"));
        assert!(css.contains("height: 240px;"));
        // The footer has no width, so its block carries none.
        let footer_block = css.split(".home-2__element-2").nth(1).expect("footer block");
        assert!(!footer_block.contains("width:"));
        assert!(footer_block.contains("font-size: 32px;"));
    }
}
