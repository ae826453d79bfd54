use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Rendered size of an element, as measured at invocation time.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Center point in the element's own coordinate space.
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Offset of an element's top-left corner from the origin of its positioning context.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Placement {
    pub left: f64,
    pub top: f64,
}

impl Placement {
    pub fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }

    /// Places an element of `size` so that its center lands on `center`.
    pub fn centered_on(center: Point, size: Size) -> Self {
        Self::new(center.x - size.width / 2.0, center.y - size.height / 2.0)
    }

    pub fn center_of(&self, size: Size) -> Point {
        Point::new(self.left + size.width / 2.0, self.top + size.height / 2.0)
    }

    pub fn rounded(&self) -> (i64, i64) {
        (self.left.round() as i64, self.top.round() as i64)
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "left: {}px; top: {}px", self.left, self.top)
    }
}
