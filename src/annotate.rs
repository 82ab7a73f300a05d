//! Drawing annotated wireframe images.
//!
//! The annotator draws hollow bounding boxes over a copy of the source
//! screenshot, one per detected region, with a type label above each box
//! and a coordinate caption below it. Labels prefer a system TrueType
//! font; when none of the candidate paths resolve, a built-in 5x7 bitmap
//! font takes over so annotation never fails.

use ab_glyph::{FontVec, PxScale};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_hollow_rect_mut, draw_text_mut};
use imageproc::rect::Rect as PixelRect;

use crate::geometry::Rect;
use crate::region::{Region, RegionKind};

/// Outline width for comparison overlays.
const COMPARISON_OUTLINE_WIDTH: u32 = 2;
/// Comparison color for the first region set.
const COMPARISON_FIRST: Rgb<u8> = Rgb([255, 0, 0]);
/// Comparison color for the second region set.
const COMPARISON_SECOND: Rgb<u8> = Rgb([0, 0, 255]);

/// Candidate font files, probed in order.
const FONT_CANDIDATES: &[&str] = &[
    "/System/Library/Fonts/Helvetica.ttc",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Outline colors for the region kinds.
#[derive(Debug, Clone)]
pub struct AnnotationColors {
    /// Color for text regions
    pub text: Rgb<u8>,
    /// Color for shape regions
    pub shape: Rgb<u8>,
    /// Color for logo regions
    pub logo: Rgb<u8>,
    /// Color for unclassified regions
    pub other: Rgb<u8>,
}

impl Default for AnnotationColors {
    fn default() -> Self {
        Self {
            text: Rgb([255, 0, 0]),    // Red
            shape: Rgb([0, 128, 0]),   // Green
            logo: Rgb([0, 0, 255]),    // Blue
            other: Rgb([255, 255, 0]), // Yellow
        }
    }
}

impl AnnotationColors {
    /// Outline color for a region kind.
    pub fn for_kind(&self, kind: RegionKind) -> Rgb<u8> {
        match kind {
            RegionKind::Text => self.text,
            RegionKind::Shape => self.shape,
            RegionKind::Logo => self.logo,
            RegionKind::Other => self.other,
        }
    }
}

/// Options for wireframe annotation.
#[derive(Debug, Clone)]
pub struct AnnotationStyle {
    /// Colors for the region kinds
    pub colors: AnnotationColors,
    /// Bounding box outline width in pixels
    pub outline_width: u32,
    /// Label font size in pixels
    pub font_size: f32,
    /// Distance the label sits above the box top edge
    pub label_offset: u32,
    /// Distance the caption sits below the box bottom edge
    pub caption_offset: u32,
}

impl Default for AnnotationStyle {
    fn default() -> Self {
        Self {
            colors: AnnotationColors::default(),
            outline_width: 3,
            font_size: 14.0,
            label_offset: 20,
            caption_offset: 2,
        }
    }
}

enum LabelFont {
    System(FontVec),
    Builtin,
}

/// Draws detected regions onto wireframe images.
pub struct Annotator {
    style: AnnotationStyle,
    font: LabelFont,
}

impl Annotator {
    /// Create an annotator with the given style.
    ///
    /// Font resolution happens here, once, so repeated annotation calls
    /// do not re-probe the filesystem.
    pub fn new(style: AnnotationStyle) -> Self {
        let font = match load_system_font() {
            Some(font) => LabelFont::System(font),
            None => {
                log::debug!("no system font found, using builtin bitmap font");
                LabelFont::Builtin
            },
        };
        Self { style, font }
    }

    /// Draw bounding boxes, labels and captions for `regions` on a copy
    /// of `image`.
    ///
    /// Each region gets a hollow box in its kind's color, a
    /// `"{kind} {index}"` label above the box (clamped to the image top)
    /// and a `"(x,y) WxH"` caption below it.
    pub fn annotate(&self, image: &RgbImage, regions: &[Region]) -> RgbImage {
        let mut out = image.clone();
        for (index, region) in regions.iter().enumerate() {
            let color = self.style.colors.for_kind(region.kind);
            self.draw_outline(&mut out, &region.bbox, color, self.style.outline_width);

            let label = format!("{} {}", region.kind, index);
            let label_y = region.bbox.y.saturating_sub(self.style.label_offset);
            self.draw_label(&mut out, color, region.bbox.x as i32, label_y as i32, &label);

            let caption = format!(
                "({},{}) {}x{}",
                region.bbox.x, region.bbox.y, region.bbox.width, region.bbox.height
            );
            let caption_y = region.bbox.bottom() + self.style.caption_offset;
            self.draw_label(&mut out, color, region.bbox.x as i32, caption_y as i32, &caption);
        }
        out
    }

    /// Draw both region sets on one white canvas for side-by-side
    /// inspection: red boxes for `first`, blue boxes for `second`.
    ///
    /// Neither set is rescaled; the caller picks canvas dimensions that
    /// fit both.
    pub fn render_comparison(
        &self,
        width: u32,
        height: u32,
        first: &[Region],
        second: &[Region],
    ) -> RgbImage {
        let mut canvas = RgbImage::from_pixel(width, height, Rgb([255, 255, 255]));
        for region in first {
            self.draw_outline(&mut canvas, &region.bbox, COMPARISON_FIRST, COMPARISON_OUTLINE_WIDTH);
        }
        for region in second {
            self.draw_outline(&mut canvas, &region.bbox, COMPARISON_SECOND, COMPARISON_OUTLINE_WIDTH);
        }
        canvas
    }

    /// Draw a hollow rectangle with the outline thickened inward.
    fn draw_outline(&self, image: &mut RgbImage, rect: &Rect, color: Rgb<u8>, width: u32) {
        for inset in 0..width {
            if rect.width <= inset * 2 || rect.height <= inset * 2 {
                break;
            }
            let ring = PixelRect::at((rect.x + inset) as i32, (rect.y + inset) as i32)
                .of_size(rect.width - inset * 2, rect.height - inset * 2);
            draw_hollow_rect_mut(image, ring, color);
        }
    }

    fn draw_label(&self, image: &mut RgbImage, color: Rgb<u8>, x: i32, y: i32, text: &str) {
        match &self.font {
            LabelFont::System(font) => {
                let scale = PxScale::from(self.style.font_size);
                draw_text_mut(image, color, x, y, scale, font, text);
            },
            LabelFont::Builtin => {
                draw_bitmap_text(image, color, x, y, self.style.font_size, text);
            },
        }
    }
}

impl Default for Annotator {
    fn default() -> Self {
        Self::new(AnnotationStyle::default())
    }
}

/// Probe the candidate font paths and load the first one that parses.
fn load_system_font() -> Option<FontVec> {
    for path in FONT_CANDIDATES {
        if let Ok(data) = std::fs::read(path) {
            // Index 0 covers both plain .ttf files and .ttc collections.
            if let Ok(font) = FontVec::try_from_vec_and_index(data, 0) {
                log::debug!("label font: {}", path);
                return Some(font);
            }
        }
    }
    None
}

const GLYPH_WIDTH: u32 = 5;
const GLYPH_HEIGHT: u32 = 7;

/// Render `text` with the builtin 5x7 bitmap font.
///
/// The font carries digits, letters and the punctuation used by labels
/// and captions. Letters share one case. Unknown characters advance the
/// pen without drawing.
fn draw_bitmap_text(image: &mut RgbImage, color: Rgb<u8>, x: i32, y: i32, size: f32, text: &str) {
    let scale = ((size / GLYPH_HEIGHT as f32).round() as i32).max(1);
    let mut pen_x = x;
    for ch in text.chars() {
        if let Some(rows) = glyph(ch) {
            for (row, bits) in rows.iter().enumerate() {
                for col in 0..GLYPH_WIDTH {
                    if bits & (0b10000 >> col) == 0 {
                        continue;
                    }
                    for dy in 0..scale {
                        for dx in 0..scale {
                            let px = pen_x + col as i32 * scale + dx;
                            let py = y + row as i32 * scale + dy;
                            if px >= 0
                                && py >= 0
                                && (px as u32) < image.width()
                                && (py as u32) < image.height()
                            {
                                image.put_pixel(px as u32, py as u32, color);
                            }
                        }
                    }
                }
            }
        }
        pen_x += (GLYPH_WIDTH as i32 + 1) * scale;
    }
}

/// 5x7 bitmap rows for a character, top to bottom. Bit 4 is the leftmost
/// column. `None` for characters without a glyph (including space).
fn glyph(ch: char) -> Option<[u8; 7]> {
    let rows = match ch.to_ascii_uppercase() {
        'A' => [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'B' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
        'C' => [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'D' => [0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110],
        'E' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'F' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000],
        'G' => [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111],
        'H' => [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'I' => [0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        'J' => [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100],
        'K' => [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
        'L' => [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'M' => [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001],
        'N' => [0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001, 0b10001],
        'O' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'Q' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
        'R' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110],
        'T' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'U' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'V' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'W' => [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010],
        'X' => [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001],
        'Y' => [0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100],
        'Z' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111],
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
        '3' => [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        '(' => [0b00010, 0b00100, 0b01000, 0b01000, 0b01000, 0b00100, 0b00010],
        ')' => [0b01000, 0b00100, 0b00010, 0b00010, 0b00010, 0b00100, 0b01000],
        ',' => [0b00000, 0b00000, 0b00000, 0b00000, 0b00110, 0b00100, 0b01000],
        '.' => [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00110, 0b00110],
        '-' => [0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000],
        _ => return None,
    };
    Some(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
    const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

    fn black_image(width: u32, height: u32) -> RgbImage {
        RgbImage::from_pixel(width, height, BLACK)
    }

    #[test]
    fn test_style_defaults() {
        let style = AnnotationStyle::default();
        assert_eq!(style.outline_width, 3);
        assert_eq!(style.font_size, 14.0);
        assert_eq!(style.label_offset, 20);
        assert_eq!(style.caption_offset, 2);
        assert_eq!(style.colors.text, Rgb([255, 0, 0]));
        assert_eq!(style.colors.logo, Rgb([0, 0, 255]));
    }

    #[test]
    fn test_colors_for_kind() {
        let colors = AnnotationColors::default();
        assert_eq!(colors.for_kind(RegionKind::Text), colors.text);
        assert_eq!(colors.for_kind(RegionKind::Shape), colors.shape);
        assert_eq!(colors.for_kind(RegionKind::Logo), colors.logo);
        assert_eq!(colors.for_kind(RegionKind::Other), colors.other);
    }

    #[test]
    fn test_annotate_draws_hollow_outline() {
        let annotator = Annotator::default();
        let regions = vec![Region::new(Rect::new(20, 30, 40, 20), RegionKind::Text)];
        let out = annotator.annotate(&black_image(100, 100), &regions);

        // Outer ring corner and innermost ring corner are painted red.
        assert_eq!(*out.get_pixel(20, 30), Rgb([255, 0, 0]));
        assert_eq!(*out.get_pixel(22, 32), Rgb([255, 0, 0]));
        // The interior stays untouched.
        assert_eq!(*out.get_pixel(40, 40), BLACK);
        // The source image is not mutated.
        assert_eq!(out.dimensions(), (100, 100));
    }

    #[test]
    fn test_annotate_label_clamps_at_top_edge() {
        let annotator = Annotator::default();
        let regions = vec![Region::new(Rect::new(10, 5, 30, 12), RegionKind::Shape)];
        let out = annotator.annotate(&black_image(80, 60), &regions);
        // Label lands at y = 0 instead of underflowing; the box itself
        // is still outlined.
        assert_eq!(*out.get_pixel(10, 5), Rgb([0, 128, 0]));
    }

    #[test]
    fn test_annotate_tiny_region_does_not_panic() {
        let annotator = Annotator::default();
        let regions = vec![Region::new(Rect::new(2, 2, 3, 3), RegionKind::Other)];
        let out = annotator.annotate(&black_image(40, 40), &regions);
        assert_eq!(*out.get_pixel(2, 2), Rgb([255, 255, 0]));
    }

    #[test]
    fn test_render_comparison_colors_sides() {
        let annotator = Annotator::default();
        let first = vec![Region::new(Rect::new(10, 10, 30, 20), RegionKind::Text)];
        let second = vec![Region::new(Rect::new(50, 40, 20, 10), RegionKind::Text)];
        let canvas = annotator.render_comparison(100, 80, &first, &second);

        assert_eq!(canvas.dimensions(), (100, 80));
        assert_eq!(*canvas.get_pixel(10, 10), Rgb([255, 0, 0]));
        assert_eq!(*canvas.get_pixel(50, 40), Rgb([0, 0, 255]));
        assert_eq!(*canvas.get_pixel(0, 0), WHITE);
    }

    #[test]
    fn test_bitmap_text_sets_and_skips_pixels() {
        let mut image = black_image(40, 20);
        draw_bitmap_text(&mut image, WHITE, 0, 0, 14.0, "0");
        // At size 14 the 7-row glyph doubles to scale 2. Row 0 of '0' is
        // 0b01110, so column 0 stays dark and column 1 lights up.
        assert_eq!(*image.get_pixel(0, 0), BLACK);
        assert_eq!(*image.get_pixel(2, 0), WHITE);
        assert_eq!(*image.get_pixel(3, 1), WHITE);
    }

    #[test]
    fn test_bitmap_text_clips_at_image_border() {
        let mut image = black_image(8, 8);
        draw_bitmap_text(&mut image, WHITE, -4, -4, 14.0, "88");
        // No panic; the visible part of the first glyph still lands.
        assert_eq!(image.dimensions(), (8, 8));
    }

    #[test]
    fn test_glyphs_cover_label_and_caption_characters() {
        for ch in "text shape logo other 0123456789 (),.-x".chars() {
            if ch == ' ' {
                assert!(glyph(ch).is_none());
            } else {
                assert!(glyph(ch).is_some(), "missing glyph for {:?}", ch);
            }
        }
    }
}
