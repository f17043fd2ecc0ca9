/// Set of functions used throughout to assure the correctness of the library.
pub mod assertions;

/// Radius of a circle with the given area, `None` for non-positive or non-finite areas.
pub fn area_to_radius(area: f64) -> Option<f64> {
    match area.is_finite() && area > 0.0 {
        true => Some((area / std::f64::consts::PI).sqrt()),
        false => None,
    }
}
