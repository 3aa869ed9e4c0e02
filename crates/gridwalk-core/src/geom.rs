//! Geometry primitives: [`GridPoint`], [`WorldPoint`] and [`WorldRect`].

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// GridPoint
// ---------------------------------------------------------------------------

/// A 2D integer grid coordinate. One `GridPoint` identifies one cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPoint {
    pub x: i32,
    pub y: i32,
}

impl GridPoint {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new grid point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return a point shifted by (dx, dy).
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl fmt::Display for GridPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for GridPoint {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for GridPoint {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

// ---------------------------------------------------------------------------
// WorldPoint
// ---------------------------------------------------------------------------

/// A 2D world-space position. Also used for anchor fractions, where
/// (0, 0) is a cell's bottom-left corner and (0.5, 0.5) its center.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldPoint {
    pub x: f32,
    pub y: f32,
}

impl WorldPoint {
    /// Origin (0.0, 0.0).
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new world point.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for WorldPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for WorldPoint {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for WorldPoint {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

// ---------------------------------------------------------------------------
// WorldRect
// ---------------------------------------------------------------------------

/// An anchored, optionally rotated rectangle in world space.
///
/// `(x, y)` is the rectangle's position, interpreted relative to its anchor
/// fractions: anchor (0, 0) puts the position at the bottom-left corner,
/// (0.5, 0.5) at the center. `angle` is in degrees; only quarter-turn
/// rotations (±90°, ±270°) affect the footprint, by swapping width and
/// height. Other angles leave the axis-aligned size unchanged.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub anchor_x: f32,
    pub anchor_y: f32,
    pub angle: f32,
}

impl WorldRect {
    /// Create a rectangle with anchor (0, 0) and no rotation.
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            anchor_x: 0.0,
            anchor_y: 0.0,
            angle: 0.0,
        }
    }

    /// Set the anchor fractions.
    #[inline]
    pub const fn with_anchor(mut self, anchor_x: f32, anchor_y: f32) -> Self {
        self.anchor_x = anchor_x;
        self.anchor_y = anchor_y;
        self
    }

    /// Set the rotation angle in degrees.
    #[inline]
    pub const fn with_angle(mut self, angle: f32) -> Self {
        self.angle = angle;
        self
    }

    /// Unrotated area of the rectangle.
    #[inline]
    pub fn area(self) -> f32 {
        self.width * self.height
    }

    /// Bottom-left corner after anchor adjustment, ignoring rotation.
    #[inline]
    pub fn anchored_origin(self) -> WorldPoint {
        WorldPoint::new(
            self.x - self.width * self.anchor_x,
            self.y - self.height * self.anchor_y,
        )
    }

    /// Axis-aligned size, with width and height swapped for quarter turns.
    #[inline]
    pub fn oriented_size(self) -> (f32, f32) {
        if self.is_quarter_turn() {
            (self.height, self.width)
        } else {
            (self.width, self.height)
        }
    }

    /// Minimum and maximum world corners of the anchored, oriented footprint.
    pub fn bounds(self) -> (WorldPoint, WorldPoint) {
        let (w, h) = self.oriented_size();
        let min = WorldPoint::new(self.x - w * self.anchor_x, self.y - h * self.anchor_y);
        let max = WorldPoint::new(min.x + w, min.y + h);
        (min, max)
    }

    /// A copy of the rectangle with its angle negated.
    #[inline]
    pub fn negated_angle(mut self) -> Self {
        self.angle = -self.angle;
        self
    }

    #[inline]
    fn is_quarter_turn(self) -> bool {
        let a = self.angle;
        a == 90.0 || a == -90.0 || a == 270.0 || a == -270.0
    }
}
