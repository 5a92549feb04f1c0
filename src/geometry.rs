//! Shared geometry types for the view engine
//!
//! Everything here is plain value math: points and rectangles in f64
//! (component or image space depending on context), integer regions for
//! repaint coalescing, and the axis-aligned affine map used by the
//! coordinate transform.

use serde::{Deserialize, Serialize};

/// A point in either component (screen) or image (canvas) space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Straight-line distance to another point
    pub fn distance_to(&self, other: Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Linear interpolation toward another point, t in [0, 1]
    pub fn lerp(&self, other: Point, t: f64) -> Point {
        Point {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }

    /// Angle of travel from this point toward another, in radians
    pub fn angle_to(&self, other: Point) -> f64 {
        (other.y - self.y).atan2(other.x - self.x)
    }
}

/// An axis-aligned rectangle with f64 coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Center point of the rectangle
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// A rectangle of the given size centered on a point
    pub fn centered_at(center: Point, width: f64, height: f64) -> Self {
        Self {
            x: center.x - width / 2.0,
            y: center.y - height / 2.0,
            width,
            height,
        }
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.x + self.width && p.y >= self.y && p.y < self.y + self.height
    }
}

/// An integer region for repaint coalescing, in left/top/right/bottom form
///
/// `right` and `bottom` are exclusive. An empty region unions as identity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Region {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn empty() -> Self {
        Self {
            left: i32::MAX,
            top: i32::MAX,
            right: i32::MIN,
            bottom: i32::MIN,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.left >= self.right || self.top >= self.bottom
    }

    /// Grow the region to cover a point plus a radius around it
    pub fn expand(&mut self, x: i32, y: i32, radius: i32) {
        self.left = self.left.min(x - radius);
        self.top = self.top.min(y - radius);
        self.right = self.right.max(x + radius + 1);
        self.bottom = self.bottom.max(y + radius + 1);
    }

    pub fn union(&mut self, other: &Region) {
        if other.is_empty() {
            return;
        }
        self.left = self.left.min(other.left);
        self.top = self.top.min(other.top);
        self.right = self.right.max(other.right);
        self.bottom = self.bottom.max(other.bottom);
    }

    pub fn clamp_to(&mut self, width: i32, height: i32) {
        self.left = self.left.max(0);
        self.top = self.top.max(0);
        self.right = self.right.min(width);
        self.bottom = self.bottom.min(height);
    }

    pub fn width(&self) -> i32 {
        self.right.saturating_sub(self.left).max(0)
    }

    pub fn height(&self) -> i32 {
        self.bottom.saturating_sub(self.top).max(0)
    }
}

/// An axis-aligned affine map: scale followed by translation
///
/// The view engine never shears or rotates, so the full 2×2 matrix collapses
/// to per-axis scale plus offset: `x' = tx + sx * x`, `y' = ty + sy * y`.
/// `translate`/`scale` compose like AWT's AffineTransform: each call is
/// applied in the coordinate system produced by the calls before it, so
/// `Affine::identity().translate(d, d).scale(s, s)` maps `x` to `d + s * x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Affine {
    pub sx: f64,
    pub sy: f64,
    pub tx: f64,
    pub ty: f64,
}

impl Affine {
    pub fn identity() -> Self {
        Self {
            sx: 1.0,
            sy: 1.0,
            tx: 0.0,
            ty: 0.0,
        }
    }

    /// Concatenate a translation (applied before any later call)
    pub fn translate(mut self, dx: f64, dy: f64) -> Self {
        self.tx += self.sx * dx;
        self.ty += self.sy * dy;
        self
    }

    /// Concatenate a scale (applied before any later call)
    pub fn scale(mut self, fx: f64, fy: f64) -> Self {
        self.sx *= fx;
        self.sy *= fy;
        self
    }

    pub fn apply(&self, p: Point) -> Point {
        Point {
            x: self.tx + self.sx * p.x,
            y: self.ty + self.sy * p.y,
        }
    }

    /// Scale a width/height pair; sizes carry no offset
    pub fn apply_size(&self, width: f64, height: f64) -> (f64, f64) {
        (width * self.sx, height * self.sy)
    }
}
