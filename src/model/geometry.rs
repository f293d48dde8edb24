//! Rectangle geometry in page coordinates.
//!
//! Coordinates follow the top-left origin convention of the layout dump:
//! `y` grows downwards, so `y0` is the top edge and `y1` the bottom edge.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle `(x0, y0, x1, y1)`.
///
/// Serialized as a four-element array `[x0, y0, x1, y1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f32; 4]", into = "[f32; 4]")]
pub struct Rect {
    /// Left edge
    pub x0: f32,
    /// Top edge
    pub y0: f32,
    /// Right edge
    pub x1: f32,
    /// Bottom edge
    pub y1: f32,
}

impl Rect {
    /// Create a new rectangle from its edges.
    pub const fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Width of the rectangle (may be negative for invalid rectangles).
    pub fn width(&self) -> f32 {
        self.x1 - self.x0
    }

    /// Height of the rectangle (may be negative for invalid rectangles).
    pub fn height(&self) -> f32 {
        self.y1 - self.y0
    }

    /// A rectangle is empty when it has no interior.
    pub fn is_empty(&self) -> bool {
        self.x0 >= self.x1 || self.y0 >= self.y1
    }

    /// Area of the rectangle; empty rectangles have zero area.
    pub fn area(&self) -> f32 {
        if self.is_empty() {
            0.0
        } else {
            self.width() * self.height()
        }
    }

    /// Intersection of two rectangles. The result is empty when they do not overlap.
    pub fn intersect(&self, other: &Rect) -> Rect {
        Rect {
            x0: self.x0.max(other.x0),
            y0: self.y0.max(other.y0),
            x1: self.x1.min(other.x1),
            y1: self.y1.min(other.y1),
        }
    }

    /// Smallest rectangle containing both rectangles.
    ///
    /// An empty operand contributes nothing, so the union of a table bbox
    /// with a missing (all-zero) header bbox is the table bbox itself.
    pub fn union(&self, other: &Rect) -> Rect {
        if other.is_empty() {
            return *self;
        }
        if self.is_empty() {
            return *other;
        }
        Rect {
            x0: self.x0.min(other.x0),
            y0: self.y0.min(other.y0),
            x1: self.x1.max(other.x1),
            y1: self.y1.max(other.y1),
        }
    }

    /// Check whether `other` lies completely inside this rectangle.
    pub fn contains(&self, other: &Rect) -> bool {
        other.x0 >= self.x0 && other.y0 >= self.y0 && other.x1 <= self.x1 && other.y1 <= self.y1
    }

    /// Centre point `(x, y)` of the rectangle.
    pub fn center(&self) -> (f32, f32) {
        ((self.x0 + self.x1) / 2.0, (self.y0 + self.y1) / 2.0)
    }

    /// Copy of this rectangle with a different top edge.
    pub fn with_top(mut self, y0: f32) -> Self {
        self.y0 = y0;
        self
    }

    /// Copy of this rectangle with a different bottom edge.
    pub fn with_bottom(mut self, y1: f32) -> Self {
        self.y1 = y1;
        self
    }
}

impl From<[f32; 4]> for Rect {
    fn from(r: [f32; 4]) -> Self {
        Rect::new(r[0], r[1], r[2], r[3])
    }
}

impl From<Rect> for [f32; 4] {
    fn from(r: Rect) -> Self {
        [r.x0, r.y0, r.x1, r.y1]
    }
}
