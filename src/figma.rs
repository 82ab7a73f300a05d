//! Figma markup parsing.
//!
//! Design-tool exports carry exact pixel coordinates as Tailwind-style
//! bracket tokens inside `className` attributes (`left-[394px]`,
//! `w-[120px]`, ...). Reading them bypasses pixel analysis entirely
//! when the source markup is available.
//!
//! A missing dimension token stays `None` and serializes as JSON null;
//! null means "not specified" and is never collapsed into zero, since a
//! genuine `w-[0px]` is a value.

use crate::error::Result;
use crate::layout::round1;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

lazy_static! {
    /// `className="..."` attribute on an element line
    static ref RE_CLASS: Regex = Regex::new(r#"className="([^"]*)""#).unwrap();

    /// Left offset token, e.g. `left-[394px]`
    static ref RE_LEFT: Regex = Regex::new(r"left-\[(\d+)px\]").unwrap();

    /// Top offset token
    static ref RE_TOP: Regex = Regex::new(r"top-\[(\d+)px\]").unwrap();

    /// Width token, e.g. `w-[120px]`
    static ref RE_WIDTH: Regex = Regex::new(r"w-\[(\d+)px\]").unwrap();

    /// Height token
    static ref RE_HEIGHT: Regex = Regex::new(r"h-\[(\d+)px\]").unwrap();

    /// Font size token, e.g. `text-[64px]`
    static ref RE_FONT_SIZE: Regex = Regex::new(r"text-\[(\d+)px\]").unwrap();
}

/// One positioned element read from markup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FigmaElement {
    /// Left offset in design-frame pixels; 0 when only `top` was present
    pub left: f64,
    /// Top offset in design-frame pixels; 0 when only `left` was present
    pub top: f64,
    /// Explicit width, if the markup carried one
    pub width: Option<f64>,
    /// Explicit height, if the markup carried one
    pub height: Option<f64>,
    /// Font size, if the markup carried one
    #[serde(rename = "fontSize")]
    pub font_size: Option<f64>,
    /// The full class attribute the tokens came from
    pub classes: String,
}

/// Elements parsed from one markup document, in document order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FigmaLayout {
    /// Parsed elements, in document order
    pub elements: Vec<FigmaElement>,
}

/// One element after scaling to the target frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FigmaScaledElement {
    /// Scaled left offset
    pub left: f64,
    /// Scaled top offset
    pub top: f64,
    /// Scaled width, if the markup carried one
    pub width: Option<f64>,
    /// Scaled height, if the markup carried one
    pub height: Option<f64>,
    /// Scaled font size, if the markup carried one
    #[serde(rename = "fontSize")]
    pub font_size: Option<f64>,
    /// The unscaled element this was derived from
    pub original: FigmaElement,
}

/// A markup-derived layout scaled to the target frame width.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FigmaScaledLayout {
    /// Scaled elements, in document order
    pub elements: Vec<FigmaScaledElement>,
    /// Scalar applied to every geometric field
    pub scale_factor: f64,
    /// Pixel width of the target frame
    pub target_width: u32,
}

impl FigmaScaledLayout {
    /// Serialize as pretty-printed JSON (2-space indentation).
    pub fn to_pretty_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the scaled layout to a JSON file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        fs::write(path, self.to_pretty_json()?)?;
        Ok(())
    }
}

fn token_value(re: &Regex, classes: &str) -> Option<f64> {
    re.captures(classes)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

/// Parse positioned elements out of raw markup.
///
/// Scans line by line for `<p` / `<div` tags with a `className`
/// attribute; an element is emitted only when at least one of the
/// `left-[Npx]` / `top-[Npx]` tokens matched. Token patterns take the
/// first occurrence in the attribute, so `text-[0px] text-[64px]`
/// reads a font size of 0.
pub fn parse_markup(markup: &str) -> FigmaLayout {
    let mut elements = Vec::new();

    for line in markup.lines() {
        if !line.contains("<p") && !line.contains("<div") {
            continue;
        }
        let classes = match RE_CLASS.captures(line).and_then(|caps| caps.get(1)) {
            Some(m) => m.as_str(),
            None => continue,
        };

        let left = token_value(&RE_LEFT, classes);
        let top = token_value(&RE_TOP, classes);
        if left.is_none() && top.is_none() {
            continue;
        }

        elements.push(FigmaElement {
            left: left.unwrap_or(0.0),
            top: top.unwrap_or(0.0),
            width: token_value(&RE_WIDTH, classes),
            height: token_value(&RE_HEIGHT, classes),
            font_size: token_value(&RE_FONT_SIZE, classes),
            classes: classes.to_string(),
        });
    }

    log::debug!("parsed {} positioned elements from markup", elements.len());
    FigmaLayout { elements }
}

/// Parse positioned elements from a markup file.
pub fn parse_markup_file<P: AsRef<Path>>(path: P) -> Result<FigmaLayout> {
    let markup = fs::read_to_string(path)?;
    Ok(parse_markup(&markup))
}

/// Project a parsed layout onto the target frame width.
///
/// Every geometric field is multiplied by `scale_factor` and rounded to
/// one decimal; `None` dimensions stay `None`. The unscaled element is
/// kept under `original`.
pub fn scale_layout(
    layout: &FigmaLayout,
    scale_factor: f64,
    target_width: u32,
) -> FigmaScaledLayout {
    let elements = layout
        .elements
        .iter()
        .map(|el| FigmaScaledElement {
            left: round1(el.left * scale_factor),
            top: round1(el.top * scale_factor),
            width: el.width.map(|v| round1(v * scale_factor)),
            height: el.height.map(|v| round1(v * scale_factor)),
            font_size: el.font_size.map(|v| round1(v * scale_factor)),
            original: el.clone(),
        })
        .collect();

    FigmaScaledLayout {
        elements,
        scale_factor,
        target_width,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
    <p className="absolute font-light leading-[normal] left-[394px] text-[0px] text-[64px] text-nowrap text-right text-white top-[261px] translate-x-[-100%]">
      Title
    </p>
    <div className="absolute left-[40px] top-[120px] w-[320px] h-[180px] bg-neutral-900">
    </div>
    <p className="absolute left-[51px] text-[64px] text-nowrap text-shadow-[0px_4px_4px_rgba(0,0,0,0.25)] text-white top-[399px]">
      Subtitle
    </p>
    <p className="relative text-white font-semibold">
      No position tokens here
    </p>
    "#;

    #[test]
    fn test_parse_extracts_positioned_elements_only() {
        let layout = parse_markup(SAMPLE);
        assert_eq!(layout.elements.len(), 3);
    }

    #[test]
    fn test_parse_reads_all_tokens() {
        let layout = parse_markup(SAMPLE);
        let div = &layout.elements[1];
        assert_eq!(div.left, 40.0);
        assert_eq!(div.top, 120.0);
        assert_eq!(div.width, Some(320.0));
        assert_eq!(div.height, Some(180.0));
        assert_eq!(div.font_size, None);
    }

    #[test]
    fn test_missing_dimensions_stay_none() {
        let layout = parse_markup(SAMPLE);
        let first = &layout.elements[0];
        assert_eq!(first.left, 394.0);
        assert_eq!(first.top, 261.0);
        assert_eq!(first.width, None);
        assert_eq!(first.height, None);
    }

    #[test]
    fn test_first_font_token_wins() {
        // text-[0px] precedes text-[64px], so the parsed size is 0, a
        // real value distinct from None
        let layout = parse_markup(SAMPLE);
        assert_eq!(layout.elements[0].font_size, Some(0.0));
        assert_eq!(layout.elements[2].font_size, Some(64.0));
    }

    #[test]
    fn test_shadow_token_is_not_a_width() {
        let layout = parse_markup(SAMPLE);
        assert_eq!(layout.elements[2].width, None);
    }

    #[test]
    fn test_element_with_only_top_defaults_left_to_zero() {
        let layout = parse_markup(r#"<p className="absolute top-[50px] text-white">x</p>"#);
        assert_eq!(layout.elements.len(), 1);
        assert_eq!(layout.elements[0].left, 0.0);
        assert_eq!(layout.elements[0].top, 50.0);
    }

    #[test]
    fn test_scale_layout_rounds_and_preserves_none() {
        let layout = parse_markup(SAMPLE);
        let scaled = scale_layout(&layout, 375.0 / 440.0, 375);
        assert_eq!(scaled.elements.len(), 3);
        assert_eq!(scaled.target_width, 375);

        let first = &scaled.elements[0];
        assert_eq!(first.left, 335.8); // 394 * 375/440 = 335.795...
        assert_eq!(first.top, 222.4); // 261 * 375/440 = 222.443...
        assert_eq!(first.width, None);
        assert_eq!(first.original.left, 394.0);

        let div = &scaled.elements[1];
        assert_eq!(div.width, Some(272.7)); // 320 * 375/440 = 272.727...
    }

    #[test]
    fn test_scaled_layout_serializes_null_dimensions() {
        let layout = parse_markup(r#"<p className="absolute left-[10px] top-[20px]">x</p>"#);
        let scaled = scale_layout(&layout, 1.0, 375);
        let json = scaled.to_pretty_json().unwrap();
        assert!(json.contains("\"width\": null"));
        assert!(json.contains("\"height\": null"));
        assert!(json.contains("\"fontSize\": null"));
    }

    #[test]
    fn test_scaled_layout_json_round_trip() {
        let layout = parse_markup(SAMPLE);
        let scaled = scale_layout(&layout, 375.0 / 440.0, 375);
        let json = scaled.to_pretty_json().unwrap();
        let back: FigmaScaledLayout = serde_json::from_str(&json).unwrap();
        assert_eq!(scaled, back);
    }
}
