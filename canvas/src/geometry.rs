//! Geometry: points, integer rectangles, container bounds and clamp rules.
//!
//! Every transform a gesture proposes goes through the functions in this
//! module before it reaches the card list. The live pointer-move path and the
//! pointer-up commit path call the same functions with the same inputs, so a
//! committed card always matches the last preview.
//!
//! Invariant after any clamp: `left >= 0`, `top >= 0`,
//! `left + width <= bounds.width`, `top + height <= bounds.height`.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use crate::consts::MIN_CARD_SIZE;
use crate::hit::ResizeAnchor;

/// A point in container space (CSS pixels).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Size of the container every card must stay inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bounds {
    pub width: i32,
    pub height: i32,
}

impl Bounds {
    #[must_use]
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Bounds from a CSS size, rounding fractional pixels down.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_css(width: f64, height: f64) -> Self {
        Self { width: width.floor() as i32, height: height.floor() as i32 }
    }

    /// Whether the container has a usable, non-empty area.
    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Axis-aligned integer rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    #[must_use]
    pub fn new(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self { left, top, width, height }
    }

    #[must_use]
    pub fn right(self) -> i32 {
        self.left + self.width
    }

    #[must_use]
    pub fn bottom(self) -> i32 {
        self.top + self.height
    }

    /// Whether `pt` lies inside the rectangle (edges inclusive).
    #[must_use]
    pub fn contains(self, pt: Point) -> bool {
        pt.x >= f64::from(self.left)
            && pt.x <= f64::from(self.right())
            && pt.y >= f64::from(self.top)
            && pt.y <= f64::from(self.bottom())
    }

    /// Whether the rectangle satisfies the container invariant.
    #[must_use]
    pub fn within(self, bounds: Bounds) -> bool {
        self.left >= 0 && self.top >= 0 && self.right() <= bounds.width && self.bottom() <= bounds.height
    }
}

/// Clamp a proposed size so the box ends at the container edge at most.
///
/// Returns `(width, height)`. Each axis is only touched when the proposed
/// extent overflows the container; otherwise the proposal is kept as is.
#[must_use]
pub fn clamp_size(top: i32, left: i32, proposed_width: i32, proposed_height: i32, bounds: Bounds) -> (i32, i32) {
    let height = if top + proposed_height > bounds.height {
        bounds.height - top
    } else {
        proposed_height
    };
    let width = if left + proposed_width > bounds.width {
        bounds.width - left
    } else {
        proposed_width
    };
    (width, height)
}

/// Floor a translated origin at the container origin. Returns `(left, top)`.
#[must_use]
pub fn clamp_origin(left: i32, top: i32) -> (i32, i32) {
    (left.max(0), top.max(0))
}

/// Translate `orig` by `(dx, dy)` and keep the whole box inside `bounds`.
///
/// The size is preserved unless the box is larger than the container.
#[must_use]
pub fn drag_rect(orig: Rect, dx: i32, dy: i32, bounds: Bounds) -> Rect {
    let (left, top) = clamp_origin(orig.left + dx, orig.top + dy);
    let left = left.min((bounds.width - orig.width).max(0));
    let top = top.min((bounds.height - orig.height).max(0));
    let (width, height) = clamp_size(top, left, orig.width, orig.height, bounds);
    Rect { left, top, width, height }
}

/// Move the edges named by `anchor` by `(dx, dy)` and clamp the result.
///
/// The opposite edges stay put. Neither axis shrinks below
/// [`MIN_CARD_SIZE`] before clamping; a moving left/top edge stops at the
/// container origin.
#[must_use]
pub fn resize_rect(orig: Rect, anchor: ResizeAnchor, dx: i32, dy: i32, bounds: Bounds) -> Rect {
    let edges = anchor.edges();
    let mut left = orig.left;
    let mut top = orig.top;
    let mut right = orig.right();
    let mut bottom = orig.bottom();

    if edges.west {
        left = (orig.left + dx).min(right - MIN_CARD_SIZE);
    }
    if edges.east {
        right = (orig.right() + dx).max(left + MIN_CARD_SIZE);
    }
    if edges.north {
        top = (orig.top + dy).min(bottom - MIN_CARD_SIZE);
    }
    if edges.south {
        bottom = (orig.bottom() + dy).max(top + MIN_CARD_SIZE);
    }

    let (left, top) = clamp_origin(left, top);
    let (width, height) = clamp_size(top, left, right - left, bottom - top, bounds);
    Rect { left, top, width, height }
}

/// Pull an existing box back inside `bounds`, shrinking it only when it is
/// larger than the container.
#[must_use]
pub fn fit_rect(rect: Rect, bounds: Bounds) -> Rect {
    let width = rect.width.min(bounds.width).max(0);
    let height = rect.height.min(bounds.height).max(0);
    let (left, top) = clamp_origin(rect.left, rect.top);
    let left = left.min(bounds.width - width);
    let top = top.min(bounds.height - height);
    let (width, height) = clamp_size(top, left, width, height, bounds);
    Rect { left, top, width, height }
}

/// Round a pointer delta to whole pixels.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn pixel_delta(from: Point, to: Point) -> (i32, i32) {
    ((to.x - from.x).round() as i32, (to.y - from.y).round() as i32)
}
