#![doc = document_features::document_features!()]
//! Shared components for laying out circular cross-sections (cables in a conduit, conductors in a cable)
//! inside a bounding circle.

/// Entities to model a circular layout: the bounding region, items and placement results
pub mod entities;

/// Geometric primitives and base algorithms
pub mod geometry;

/// Importing layout instances into and exporting placement results out of this library
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;

/// Absolute tolerance used when checking containment and separation of circles.
pub const EPSILON: f64 = 1e-9;
