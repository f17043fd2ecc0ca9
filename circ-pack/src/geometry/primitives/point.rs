use std::hash::{Hash, Hasher};
use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

use crate::geometry::geo_traits::CollidesWith;

/// Geometric primitive representing a point
#[derive(Debug, Clone, PartialEq, Copy, Serialize, Deserialize)]
pub struct Point(pub f64, pub f64);

impl Point {
    pub const ORIGIN: Point = Point(0.0, 0.0);

    /// Point at `distance` from `self` in the direction of `angle` (radians).
    pub fn polar_offset(&self, distance: f64, angle: f64) -> Point {
        Point(
            self.0 + distance * angle.cos(),
            self.1 + distance * angle.sin(),
        )
    }

    /// Point at `distance` from the origin in the direction of `angle` (radians).
    pub fn from_polar(distance: f64, angle: f64) -> Point {
        Point::ORIGIN.polar_offset(distance, angle)
    }

    pub fn distance(&self, other: &Point) -> f64 {
        (self.0 - other.0).hypot(self.1 - other.1)
    }

    pub fn sq_distance(&self, other: &Point) -> f64 {
        (self.0 - other.0).powi(2) + (self.1 - other.1).powi(2)
    }

    /// Distance from the origin
    pub fn norm(&self) -> f64 {
        self.0.hypot(self.1)
    }

    /// Squared distance from the origin
    pub fn sq_norm(&self) -> f64 {
        self.0 * self.0 + self.1 * self.1
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite() && self.1.is_finite()
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point(self.0 + rhs.0, self.1 + rhs.1)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point(self.0 - rhs.0, self.1 - rhs.1)
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let x = self.0.to_bits();
        let y = self.1.to_bits();
        x.hash(state);
        y.hash(state);
    }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self {
        (p.0, p.1)
    }
}

impl From<(f64, f64)> for Point {
    fn from(p: (f64, f64)) -> Self {
        Point(p.0, p.1)
    }
}

impl<T> CollidesWith<T> for Point
where
    T: CollidesWith<Point>,
{
    fn collides_with(&self, other: &T) -> bool {
        other.collides_with(self)
    }
}
