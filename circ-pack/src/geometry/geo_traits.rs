use crate::geometry::primitives::Point;

/// Trait for types that can detect collisions between `Self` and `T`.
pub trait CollidesWith<T> {
    fn collides_with(&self, other: &T) -> bool;
}

/// Trait for types that can determine whether `T` lies fully inside `Self`.
pub trait Contains<T> {
    /// Returns true if `other` lies inside `self`, allowing for [`EPSILON`](crate::EPSILON) of numerical slack.
    fn contains(&self, other: &T) -> bool;
}

/// Trait for shared properties of geometric primitives.
pub trait Shape {
    /// Geometric center of the shape
    fn centroid(&self) -> Point;

    /// Area of the interior of the shape
    fn area(&self) -> f64;

    /// The distance between the two furthest points in the shape.
    fn diameter(&self) -> f64;
}
