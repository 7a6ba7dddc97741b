//! Packed integer pair used for window sizes and positions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// Two-component integer value
///
/// Every native call that takes or returns a coordinate pair (window size,
/// position, size limits) goes through this type. It has plain value
/// semantics: copy, compare, hash.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal component (x coordinate or width)
    pub x: i32,
    /// Vertical component (y coordinate or height)
    pub y: i32,
}

impl Point {
    /// Create a new point
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Horizontal component
    pub const fn x(self) -> i32 {
        self.x
    }

    /// Vertical component
    pub const fn y(self) -> i32 {
        self.y
    }

    /// Copy of this point with a different x
    #[must_use]
    pub const fn with_x(self, x: i32) -> Self {
        Self { x, y: self.y }
    }

    /// Copy of this point with a different y
    #[must_use]
    pub const fn with_y(self, y: i32) -> Self {
        Self { x: self.x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl From<Point> for (i32, i32) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

impl PartialEq<(i32, i32)> for Point {
    fn eq(&self, other: &(i32, i32)) -> bool {
        self.x == other.0 && self.y == other.1
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[x:{},y:{}]", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Point {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl Mul<i32> for Point {
    type Output = Self;

    fn mul(self, rhs: i32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<i32> for Point {
    type Output = Self;

    fn div(self, rhs: i32) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl SubAssign for Point {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_tuple_conversions() {
        let p: Point = (640, 480).into();
        assert_eq!(p, Point::new(640, 480));
        assert_eq!(p, (640, 480));

        let (w, h): (i32, i32) = p.into();
        assert_eq!((w, h), (640, 480));
    }

    #[test]
    fn test_point_arithmetic() {
        let a = Point::new(10, 20);
        let b = Point::new(1, 2);

        assert_eq!(a + b, Point::new(11, 22));
        assert_eq!(a - b, Point::new(9, 18));
        assert_eq!(-b, Point::new(-1, -2));
        assert_eq!(b * 3, Point::new(3, 6));
        assert_eq!(a / 10, Point::new(1, 2));

        let mut c = a;
        c += b;
        c -= Point::new(0, 2);
        assert_eq!(c, Point::new(11, 20));
    }

    #[test]
    fn test_point_builders_and_display() {
        let p = Point::default().with_x(5).with_y(-7);
        assert_eq!(p.x(), 5);
        assert_eq!(p.y(), -7);
        assert_eq!(p.to_string(), "[x:5,y:-7]");
    }
}
