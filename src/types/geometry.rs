use std::ops::{Add, Sub};

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// A point in screen or window-local pixel coordinates.
///
/// `+` and `-` saturate at the `i32` bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x.saturating_add(rhs.x), self.y.saturating_add(rhs.y))
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x.saturating_sub(rhs.x), self.y.saturating_sub(rhs.y))
    }
}

/// A width/height pair in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Window bounds: top-left origin plus size.
///
/// `right()` and `bottom()` are exclusive, so `x + width == right()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// Whether `point` lies inside the rectangle (right/bottom exclusive).
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// Maps a global point into this rectangle's local coordinate space.
    pub fn to_local(&self, global: Point) -> Point {
        global - self.origin()
    }
}

bitflags! {
    /// Window edges that take part in a resize gesture.
    ///
    /// Corners are two edges at once, e.g. `TOP | LEFT`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Edges: u8 {
        const TOP = 0b0001;
        const BOTTOM = 0b0010;
        const LEFT = 0b0100;
        const RIGHT = 0b1000;
    }
}

impl Edges {
    /// Short lowercase names of the set edges, in top/bottom/left/right order.
    pub fn names(&self) -> Vec<&'static str> {
        let mut out = Vec::with_capacity(2);
        if self.contains(Edges::TOP) {
            out.push("top");
        }
        if self.contains(Edges::BOTTOM) {
            out.push("bottom");
        }
        if self.contains(Edges::LEFT) {
            out.push("left");
        }
        if self.contains(Edges::RIGHT) {
            out.push("right");
        }
        out
    }
}
