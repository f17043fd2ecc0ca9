use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};

use crate::geometry::geo_traits::Contains;
use crate::geometry::primitives::{Circle, Point};

/// The circular area in which [`Item`](crate::entities::Item)s are positioned, e.g. the inside of a conduit.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundingRegion {
    pub center: Point,
    pub radius: f64,
}

impl BoundingRegion {
    pub fn new(center: Point, radius: f64) -> Result<Self> {
        ensure!(
            radius.is_finite() && radius > 0.0,
            "bounding radius must be positive and finite, got {radius}"
        );
        ensure!(center.is_finite(), "bounding center must be finite, got {center:?}");
        Ok(Self { center, radius })
    }

    /// A region of `radius` centered at the origin.
    pub fn centered(radius: f64) -> Result<Self> {
        Self::new(Point::ORIGIN, radius)
    }

    pub fn circle(&self) -> Circle {
        Circle::new(self.center, self.radius)
    }

    /// Whether an item of this radius can be placed at all.
    /// Non-positive, non-finite and oversized radii are rejected.
    pub fn admits(&self, radius: f64) -> bool {
        radius.is_finite() && radius > 0.0 && radius <= self.radius
    }

    /// Whether `circle` lies fully inside the region.
    pub fn contains(&self, circle: &Circle) -> bool {
        self.circle().contains(circle)
    }

    /// Distance from the center of the region to the furthest point of `circle`.
    pub fn extent_of(&self, circle: &Circle) -> f64 {
        circle.extent_from(&self.center)
    }

    pub fn area(&self) -> f64 {
        std::f64::consts::PI * self.radius * self.radius
    }
}
