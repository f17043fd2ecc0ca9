use crate::geometry::primitives::{Circle, Point};

/// Intersection points of the borders of two circles.
///
/// Returns `None` when the centers coincide, or when the circles are too far apart
/// or nested inside one another so that their borders never meet.
/// Touching circles yield the same point twice.
pub fn circle_intersections(c0: &Circle, c1: &Circle) -> Option<[Point; 2]> {
    let (Point(x0, y0), r0) = (c0.center, c0.radius);
    let (Point(x1, y1), r1) = (c1.center, c1.radius);

    let (dx, dy) = (x1 - x0, y1 - y0);
    let d = dx.hypot(dy);
    if d == 0.0 || d > r0 + r1 || d < (r0 - r1).abs() {
        return None;
    }

    //distance from c0 to the chord connecting both intersection points
    let a = (r0 * r0 - r1 * r1 + d * d) / (2.0 * d);
    let h_sq = r0 * r0 - a * a;
    if h_sq < 0.0 {
        return None;
    }
    let h = h_sq.sqrt();

    let (xm, ym) = (x0 + a * dx / d, y0 + a * dy / d);
    let (rx, ry) = (-dy * (h / d), dx * (h / d));

    Some([Point(xm + rx, ym + ry), Point(xm - rx, ym - ry)])
}

/// Centers at which a circle of radius `r` touches both `c0` and `c1` from the outside,
/// keeping a gap of `spacing` to each of them.
pub fn tangent_to_pair(c0: &Circle, c1: &Circle, r: f64, spacing: f64) -> Option<[Point; 2]> {
    circle_intersections(
        &Circle::new(c0.center, c0.radius + r + spacing),
        &Circle::new(c1.center, c1.radius + r + spacing),
    )
}

#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;

    use super::*;

    #[test]
    fn intersections_of_overlapping_circles() {
        let c0 = Circle::new(Point(0.0, 0.0), 5.0);
        let c1 = Circle::new(Point(6.0, 0.0), 5.0);
        let [p, q] = circle_intersections(&c0, &c1).unwrap();

        for pt in [p, q] {
            assert!(approx_eq!(f64, pt.distance(&c0.center), 5.0, epsilon = 1e-9));
            assert!(approx_eq!(f64, pt.distance(&c1.center), 5.0, epsilon = 1e-9));
        }
        assert!(approx_eq!(f64, p.0, 3.0, epsilon = 1e-9));
        assert!(approx_eq!(f64, p.1, 4.0, epsilon = 1e-9));
        assert!(approx_eq!(f64, q.1, -4.0, epsilon = 1e-9));
    }

    #[test]
    fn no_intersections_when_apart_nested_or_concentric() {
        let c0 = Circle::new(Point(0.0, 0.0), 1.0);
        assert!(circle_intersections(&c0, &Circle::new(Point(5.0, 0.0), 1.0)).is_none());
        assert!(circle_intersections(&c0, &Circle::new(Point(0.1, 0.0), 3.0)).is_none());
        assert!(circle_intersections(&c0, &Circle::new(Point(0.0, 0.0), 1.0)).is_none());
    }

    #[test]
    fn pair_tangent_touches_both() {
        let c0 = Circle::new(Point(-3.0, 0.0), 3.0);
        let c1 = Circle::new(Point(3.0, 0.0), 3.0);
        let [p, _] = tangent_to_pair(&c0, &c1, 3.0, 0.0).unwrap();

        let new = Circle::new(p, 3.0);
        assert!(approx_eq!(f64, new.center.distance(&c0.center), 6.0, epsilon = 1e-9));
        assert!(approx_eq!(f64, new.center.distance(&c1.center), 6.0, epsilon = 1e-9));
    }
}
