use circ_pack::entities::Layout;
use circ_pack::geometry::primitives::Point;
use circ_pack::geometry::tangency::tangent_to_pair;
use itertools::Itertools;

use crate::config::SeedMode;

/// Generates candidate centers for a new circle of radius `r` in `layout`, keeping a gap of `spacing` to the placed circles.
///
/// The candidates are, in this order:
/// 1. touching every placed circle, at each of the `angles`
/// 2. touching every pair of placed circles simultaneously
/// 3. touching the boundary from the inside, at each of the `angles` (only if `r` is smaller than the region)
///
/// In an empty layout, the single candidate depends on `seed_mode`.
/// No feasibility filtering is performed.
pub fn tangent_candidates(
    layout: &Layout,
    r: f64,
    spacing: f64,
    angles: &[f64],
    seed_mode: SeedMode,
) -> Vec<Point> {
    let region = &layout.region;

    if layout.is_empty() {
        let seed = match seed_mode {
            SeedMode::Center => region.center,
            SeedMode::Boundary => {
                let offset = angles.first().copied().unwrap_or(0.0);
                region
                    .center
                    .polar_offset(f64::max(0.0, region.radius - r), offset)
            }
        };
        return vec![seed];
    }

    let single = layout.circles().flat_map(|c| {
        let d = c.radius + r + spacing;
        angles.iter().map(move |&a| c.center.polar_offset(d, a))
    });

    let pairs = layout
        .circles()
        .tuple_combinations()
        .filter_map(|(c0, c1)| tangent_to_pair(c0, c1, r, spacing))
        .flatten();

    let boundary_d = region.radius - r;
    let boundary = angles
        .iter()
        .filter(|_| boundary_d > 0.0)
        .map(|&a| region.center.polar_offset(boundary_d, a));

    single.chain(pairs).chain(boundary).collect_vec()
}

#[cfg(test)]
mod tests {
    use circ_pack::entities::{BoundingRegion, Item, Layout};
    use circ_pack::geometry::primitives::Point;
    use float_cmp::approx_eq;

    use super::*;
    use crate::config::AttemptConfig;

    fn layout_with(radius: f64, circles: &[(Point, f64)]) -> Layout {
        let mut layout = Layout::new(BoundingRegion::centered(radius).unwrap());
        for (i, &(center, r)) in circles.iter().enumerate() {
            layout.place_item(&Item::new(i, r), center);
        }
        layout
    }

    #[test]
    fn empty_layout_seeds() {
        let layout = layout_with(10.0, &[]);
        let angles = AttemptConfig::new(SeedMode::Boundary, 0.5, 36).angles();

        let center = tangent_candidates(&layout, 3.0, 0.5, &angles, SeedMode::Center);
        assert_eq!(center, vec![Point(0.0, 0.0)]);

        let boundary = tangent_candidates(&layout, 3.0, 0.5, &angles, SeedMode::Boundary);
        assert_eq!(boundary.len(), 1);
        assert!(approx_eq!(f64, boundary[0].norm(), 7.0, epsilon = 1e-9));
        assert!(approx_eq!(f64, boundary[0].1.atan2(boundary[0].0), 0.5, epsilon = 1e-9));
    }

    #[test]
    fn boundary_seed_of_region_sized_item_is_the_center() {
        let layout = layout_with(4.0, &[]);
        let angles = AttemptConfig::default_for(12).angles();
        let seed = tangent_candidates(&layout, 4.0, 0.0, &angles, SeedMode::Boundary);
        assert!(approx_eq!(f64, seed[0].norm(), 0.0, epsilon = 1e-12));
    }

    #[test]
    fn candidate_counts_and_order() {
        let layout = layout_with(20.0, &[(Point(-3.0, 0.0), 3.0), (Point(3.0, 0.0), 3.0)]);
        let angles = AttemptConfig::default_for(12).angles();
        let candidates = tangent_candidates(&layout, 2.0, 0.0, &angles, SeedMode::Center);

        // 2 circles x 12 angles + 2 pair points + 12 boundary points
        assert_eq!(candidates.len(), 24 + 2 + 12);

        // first candidate: touching the first circle at angle 0
        assert!(approx_eq!(f64, candidates[0].0, 2.0, epsilon = 1e-9));
        assert!(approx_eq!(f64, candidates[0].1, 0.0, epsilon = 1e-9));

        // pair candidates touch both circles
        for p in &candidates[24..26] {
            assert!(approx_eq!(f64, p.distance(&Point(-3.0, 0.0)), 5.0, epsilon = 1e-9));
            assert!(approx_eq!(f64, p.distance(&Point(3.0, 0.0)), 5.0, epsilon = 1e-9));
        }

        // boundary candidates touch the boundary from the inside
        for p in &candidates[26..] {
            assert!(approx_eq!(f64, p.norm(), 18.0, epsilon = 1e-9));
        }
    }

    #[test]
    fn no_boundary_candidates_for_region_sized_items() {
        let layout = layout_with(5.0, &[(Point(0.0, 0.0), 1.0)]);
        let angles = AttemptConfig::default_for(8).angles();
        let candidates = tangent_candidates(&layout, 5.0, 0.0, &angles, SeedMode::Center);
        assert_eq!(candidates.len(), 8);
    }
}
