//! Points and rectangles in design-database units.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 2-D location in design-database units.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
}

impl Point {
    /// Creates a new point.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// An axis-aligned rectangle in design-database units.
///
/// By convention `(xl, yl)` is the lower-left corner and `(xh, yh)` the
/// upper-right corner. The constructor does not validate `xl <= xh` or
/// `yl <= yh`; records are populated by the parse engine, which is
/// responsible for only handing over well-formed geometry.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge.
    pub xl: i32,
    /// Bottom edge.
    pub yl: i32,
    /// Right edge.
    pub xh: i32,
    /// Top edge.
    pub yh: i32,
}

impl Rect {
    /// Creates a new rectangle from its corner coordinates.
    pub fn new(xl: i32, yl: i32, xh: i32, yh: i32) -> Self {
        Self { xl, yl, xh, yh }
    }

    /// Returns the width (`xh - xl`).
    pub fn width(&self) -> i32 {
        self.xh - self.xl
    }

    /// Returns the height (`yh - yl`).
    pub fn height(&self) -> i32 {
        self.yh - self.yl
    }

    /// Returns the lower-left corner.
    pub fn lower_left(&self) -> Point {
        Point::new(self.xl, self.yl)
    }

    /// Returns the upper-right corner.
    pub fn upper_right(&self) -> Point {
        Point::new(self.xh, self.yh)
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.xl, self.yl, self.xh, self.yh)
    }
}
