//! Boolean pixel masks and the classification rules that build them.
//!
//! Each detection rule turns an image into a [`PixelMask`] of identical
//! dimensions; the connected-component pass then works on the mask alone.
//! All builders are pure functions of the image and the rule parameters.

use image::{GrayImage, Luma, RgbImage};

/// A row-major boolean grid matching an image's dimensions.
#[derive(Debug, Clone)]
pub struct PixelMask {
    width: u32,
    height: u32,
    bits: Vec<bool>,
}

impl PixelMask {
    /// Create an all-false mask of the given dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            bits: vec![false; (width as usize) * (height as usize)],
        }
    }

    /// Mask width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Mask height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// Read one bit. Callers must stay inside the mask bounds.
    pub fn get(&self, x: u32, y: u32) -> bool {
        self.bits[self.index(x, y)]
    }

    /// Write one bit.
    pub fn set(&mut self, x: u32, y: u32, value: bool) {
        let i = self.index(x, y);
        self.bits[i] = value;
    }

    /// Number of true bits in the whole mask.
    pub fn count(&self) -> usize {
        self.bits.iter().filter(|b| **b).count()
    }

    /// Number of true bits in row `y`.
    pub fn row_count(&self, y: u32) -> u32 {
        let start = (y as usize) * (self.width as usize);
        let end = start + self.width as usize;
        self.bits[start..end].iter().filter(|b| **b).count() as u32
    }

    /// Render the mask as a binary grayscale image (255 where true),
    /// the form contour extraction consumes.
    pub fn to_binary_image(&self) -> GrayImage {
        GrayImage::from_fn(self.width, self.height, |x, y| {
            if self.get(x, y) {
                Luma([255u8])
            } else {
                Luma([0u8])
            }
        })
    }
}

/// A hue band with saturation and value floors, selecting pixels whose
/// color falls in a green-yellow range.
///
/// Hue is in degrees on the 0-360 circle; saturation and value are
/// fractions in \[0, 1\]. Bounds are inclusive.
#[derive(Debug, Clone, Copy)]
pub struct HsvBand {
    /// Lower hue bound in degrees. Default: 80.0
    pub hue_min_deg: f32,
    /// Upper hue bound in degrees. Default: 160.0
    pub hue_max_deg: f32,
    /// Minimum saturation fraction. Default: 50/255
    pub sat_min: f32,
    /// Minimum value fraction. Default: 50/255
    pub val_min: f32,
}

impl Default for HsvBand {
    fn default() -> Self {
        Self {
            hue_min_deg: 80.0,
            hue_max_deg: 160.0,
            sat_min: 50.0 / 255.0,
            val_min: 50.0 / 255.0,
        }
    }
}

impl HsvBand {
    /// Check whether an RGB pixel falls inside the band.
    pub fn contains(&self, r: u8, g: u8, b: u8) -> bool {
        let (hue, sat, val) = rgb_to_hsv(r, g, b);
        hue >= self.hue_min_deg
            && hue <= self.hue_max_deg
            && sat >= self.sat_min
            && val >= self.val_min
    }
}

/// Convert an RGB pixel to (hue degrees, saturation, value).
///
/// Hue is 0 for achromatic pixels; saturation and value are fractions.
fn rgb_to_hsv(r: u8, g: u8, b: u8) -> (f32, f32, f32) {
    let r = r as f32 / 255.0;
    let g = g as f32 / 255.0;
    let b = b as f32 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let val = max;
    let sat = if max > 0.0 { delta / max } else { 0.0 };

    let hue = if delta == 0.0 {
        0.0
    } else if max == r {
        60.0 * (((g - b) / delta) % 6.0)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };
    let hue = if hue < 0.0 { hue + 360.0 } else { hue };

    (hue, sat, val)
}

/// Bright-pixel rule: all three channels strictly above `threshold`.
///
/// Approximates light/white text on a dark background.
pub fn bright_mask(img: &RgbImage, threshold: u8) -> PixelMask {
    let mut mask = PixelMask::new(img.width(), img.height());
    for (x, y, px) in img.enumerate_pixels() {
        let [r, g, b] = px.0;
        if r > threshold && g > threshold && b > threshold {
            mask.set(x, y, true);
        }
    }
    mask
}

/// Green-dominant rule: green strictly above `floor` and strictly above
/// both red and blue.
///
/// Approximates green/yellow foliage-like shapes.
pub fn green_dominant_mask(img: &RgbImage, floor: u8) -> PixelMask {
    let mut mask = PixelMask::new(img.width(), img.height());
    for (x, y, px) in img.enumerate_pixels() {
        let [r, g, b] = px.0;
        if g > floor && g > r && g > b {
            mask.set(x, y, true);
        }
    }
    mask
}

/// Dark-pixel rule: luma at or below `threshold`.
///
/// This is the inverted binarization the contour detector uses to turn
/// dark-on-light text into foreground.
pub fn dark_mask(img: &RgbImage, threshold: u8) -> PixelMask {
    let mut mask = PixelMask::new(img.width(), img.height());
    let cutoff = threshold as f32;
    for (x, y, px) in img.enumerate_pixels() {
        let [r, g, b] = px.0;
        let luma = 0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32;
        if luma <= cutoff {
            mask.set(x, y, true);
        }
    }
    mask
}

/// Hue-band rule: pixel's HSV representation falls inside `band`.
pub fn hue_band_mask(img: &RgbImage, band: &HsvBand) -> PixelMask {
    let mut mask = PixelMask::new(img.width(), img.height());
    for (x, y, px) in img.enumerate_pixels() {
        let [r, g, b] = px.0;
        if band.contains(r, g, b) {
            mask.set(x, y, true);
        }
    }
    mask
}
