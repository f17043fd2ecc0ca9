use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::EPSILON;
use crate::geometry::geo_traits::{CollidesWith, Contains, Shape};
use crate::geometry::primitives::Point;

/// Geometric primitive representing a circle
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Point, radius: f64) -> Self {
        debug_assert!(
            radius.is_finite() && radius >= 0.0,
            "invalid circle radius: {}",
            radius
        );
        debug_assert!(center.is_finite(), "invalid circle center: {:?}", center);

        Self { center, radius }
    }

    /// Distance from `reference` to the furthest point of the circle.
    pub fn extent_from(&self, reference: &Point) -> f64 {
        self.center.distance(reference) + self.radius
    }

    /// Returns true if the gap between `self` and `other` is at least `spacing`.
    pub fn is_separated_from(&self, other: &Circle, spacing: f64) -> bool {
        let min_sep = self.radius + other.radius + spacing;
        self.center.distance(&other.center) >= min_sep - EPSILON
    }
}

impl CollidesWith<Circle> for Circle {
    /// Tangent circles do not collide, only genuine overlap counts.
    fn collides_with(&self, other: &Circle) -> bool {
        !self.is_separated_from(other, 0.0)
    }
}

impl CollidesWith<Point> for Circle {
    fn collides_with(&self, point: &Point) -> bool {
        point.sq_distance(&self.center) <= self.radius.powi(2)
    }
}

impl Contains<Circle> for Circle {
    fn contains(&self, other: &Circle) -> bool {
        other.extent_from(&self.center) <= self.radius + EPSILON
    }
}

impl Contains<Point> for Circle {
    fn contains(&self, point: &Point) -> bool {
        point.distance(&self.center) <= self.radius + EPSILON
    }
}

impl Shape for Circle {
    fn centroid(&self) -> Point {
        self.center
    }

    fn area(&self) -> f64 {
        self.radius * self.radius * PI
    }

    fn diameter(&self) -> f64 {
        self.radius * 2.0
    }
}
