//! CSS generation.
//!
//! Both layout flavors render to the same selector scheme,
//! `{prefix}__element-{index}`, one absolute-position block per
//! element. The output is a deterministic function of the layout.

use crate::figma::FigmaScaledLayout;
use crate::layout::LayoutDocument;

/// Generate absolute-position CSS from a wireframe layout document.
pub fn generate_css(layout: &LayoutDocument, selector_prefix: &str) -> String {
    let mut css = format!(
        "/* Generated from wireframe - {} elements */\n",
        layout.elements.len()
    );
    css.push_str(&format!(
        "/* Scale factor: {}, Frame width: {}px */\n\n",
        layout.scale_factor, layout.frame_width
    ));

    for (i, element) in layout.elements.iter().enumerate() {
        let pos = &element.position;
        css.push_str(&format!("{}__element-{} {{\n", selector_prefix, i));
        css.push_str("  position: absolute;\n");
        css.push_str(&format!("  left: {}px;\n", pos.left));
        css.push_str(&format!("  top: {}px;\n", pos.top));
        css.push_str(&format!("  width: {}px;\n", pos.width));
        css.push_str(&format!("  height: {}px;\n", pos.height));
        css.push_str("}\n\n");
    }

    css
}

/// Generate absolute-position CSS from a scaled Figma layout.
///
/// Width, height and font size appear only when the markup carried
/// them; a null dimension is omitted, a zero one is written out.
pub fn generate_figma_css(layout: &FigmaScaledLayout, selector_prefix: &str) -> String {
    let mut css = format!(
        "/* Generated from Figma layout - {} elements */\n",
        layout.elements.len()
    );
    css.push_str(&format!(
        "/* Scale: {}, Target width: {}px */\n\n",
        layout.scale_factor, layout.target_width
    ));

    for (i, element) in layout.elements.iter().enumerate() {
        css.push_str(&format!("{}__element-{} {{\n", selector_prefix, i));
        css.push_str("  position: absolute;\n");
        css.push_str(&format!("  left: {}px;\n", element.left));
        css.push_str(&format!("  top: {}px;\n", element.top));
        if let Some(width) = element.width {
            css.push_str(&format!("  width: {}px;\n", width));
        }
        if let Some(height) = element.height {
            css.push_str(&format!("  height: {}px;\n", height));
        }
        if let Some(font_size) = element.font_size {
            css.push_str(&format!("  font-size: {}px;\n", font_size));
        }
        css.push_str("}\n\n");
    }

    css
}
