//! Planar points and displacements

use std::ops::Sub;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
/// A position (or a displacement) in the plane
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[allow(missing_docs)]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Half of this displacement
    pub(crate) fn half(self) -> Self {
        Self {
            x: self.x / 2.0,
            y: self.y / 2.0,
        }
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Point {
        Point { x, y }
    }
}

impl From<Point> for [f64; 2] {
    fn from(Point { x, y }: Point) -> [f64; 2] {
        [x, y]
    }
}

impl From<Point> for (f64, f64) {
    fn from(Point { x, y }: Point) -> (f64, f64) {
        (x, y)
    }
}
