#![forbid(unsafe_code)]

//! Geometric primitives.

/// A rectangle in container or item pixel space.
///
/// Origin is top-left and coordinates are signed, so a pointer above or left
/// of a container stays representable. Edges saturate instead of overflowing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rect {
    /// Left edge (inclusive).
    pub x: i32,
    /// Top edge (inclusive).
    pub y: i32,
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A zero-width vertical span, as used for item rows.
    #[inline]
    pub const fn span(top: i32, height: i32) -> Self {
        Self::new(0, top, 0, height)
    }

    /// Top edge (inclusive).
    #[inline]
    pub const fn top(&self) -> i32 {
        self.y
    }

    /// Right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// Vertical midpoint, rounded toward the top edge.
    #[inline]
    pub const fn mid_y(&self) -> i32 {
        self.y.saturating_add(self.height / 2)
    }

    /// Check if the rectangle has zero (or negative) area.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && self.contains_y(y)
    }

    /// Check if a vertical coordinate falls within `top..bottom`.
    #[inline]
    pub const fn contains_y(&self, y: i32) -> bool {
        y >= self.y && y < self.bottom()
    }

    /// Move the rectangle by the given offsets.
    #[inline]
    #[must_use]
    pub const fn offset(&self, dx: i32, dy: i32) -> Rect {
        Rect::new(
            self.x.saturating_add(dx),
            self.y.saturating_add(dy),
            self.width,
            self.height,
        )
    }
}
