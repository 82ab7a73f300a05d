//! Geometric primitives for region detection.
//!
//! Detection works in integer pixel space: a [`Rect`] is an axis-aligned
//! bounding box whose origin is the top-left corner of the image. Scaled
//! (fractional) coordinates only appear later, in layout documents.

/// An axis-aligned rectangle in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    /// X coordinate of the left edge
    pub x: u32,
    /// Y coordinate of the top edge
    pub y: u32,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Rect {
    /// Create a new rectangle from position and dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// use wireframe_oxide::geometry::Rect;
    ///
    /// let rect = Rect::new(10, 20, 100, 50);
    /// assert_eq!(rect.width, 100);
    /// assert_eq!(rect.height, 50);
    /// ```
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle from inclusive pixel bounds.
    ///
    /// A flood fill tracks the minimum and maximum pixel coordinates it
    /// touched; both bounds name real pixels, so the box is one wider and
    /// one taller than the plain difference.
    ///
    /// # Examples
    ///
    /// ```
    /// use wireframe_oxide::geometry::Rect;
    ///
    /// let rect = Rect::from_bounds(10, 10, 49, 29);
    /// assert_eq!(rect, Rect::new(10, 10, 40, 20));
    /// ```
    pub fn from_bounds(min_x: u32, min_y: u32, max_x: u32, max_y: u32) -> Self {
        Self {
            x: min_x,
            y: min_y,
            width: max_x - min_x + 1,
            height: max_y - min_y + 1,
        }
    }

    /// Get the left edge x-coordinate.
    pub fn left(&self) -> u32 {
        self.x
    }

    /// Get the exclusive right edge x-coordinate.
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    /// Get the top edge y-coordinate.
    pub fn top(&self) -> u32 {
        self.y
    }

    /// Get the exclusive bottom edge y-coordinate.
    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }

    /// Compute the area in pixels.
    ///
    /// Widened to `u64` so large boxes on large screenshots cannot overflow.
    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Width-to-height ratio.
    pub fn aspect_ratio(&self) -> f32 {
        if self.height == 0 {
            0.0
        } else {
            self.width as f32 / self.height as f32
        }
    }

    /// Check whether a pixel lies inside this rectangle.
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.left() && x < self.right() && y >= self.top() && y < self.bottom()
    }

    /// Check if this rectangle overlaps another.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Compute the union of this rectangle with another.
    ///
    /// Returns the smallest rectangle containing both.
    ///
    /// # Examples
    ///
    /// ```
    /// use wireframe_oxide::geometry::Rect;
    ///
    /// let a = Rect::new(10, 50, 30, 15);
    /// let b = Rect::new(50, 52, 30, 15);
    /// assert_eq!(a.union(&b), Rect::new(10, 50, 70, 17));
    /// ```
    pub fn union(&self, other: &Rect) -> Rect {
        let x0 = self.left().min(other.left());
        let y0 = self.top().min(other.top());
        let x1 = self.right().max(other.right());
        let y1 = self.bottom().max(other.bottom());
        Rect {
            x: x0,
            y: y0,
            width: x1 - x0,
            height: y1 - y0,
        }
    }

    /// Signed horizontal gap between this rectangle's x-range and another's.
    ///
    /// Positive when the ranges are separated by that many pixels, zero when
    /// they abut, negative when they overlap.
    ///
    /// # Examples
    ///
    /// ```
    /// use wireframe_oxide::geometry::Rect;
    ///
    /// let a = Rect::new(10, 0, 30, 10);   // x-range 10..40
    /// let b = Rect::new(50, 0, 30, 10);   // x-range 50..80
    /// assert_eq!(a.gap_x(&b), 10);
    /// assert_eq!(b.gap_x(&a), 10);
    ///
    /// let c = Rect::new(25, 0, 30, 10);   // overlaps a
    /// assert!(a.gap_x(&c) < 0);
    /// ```
    pub fn gap_x(&self, other: &Rect) -> i64 {
        let a = other.left() as i64 - self.right() as i64;
        let b = self.left() as i64 - other.right() as i64;
        a.max(b)
    }

    /// Signed vertical gap between this rectangle's y-range and another's.
    ///
    /// Same sign convention as [`Rect::gap_x`].
    pub fn gap_y(&self, other: &Rect) -> i64 {
        let a = other.top() as i64 - self.bottom() as i64;
        let b = self.top() as i64 - other.bottom() as i64;
        a.max(b)
    }
}
