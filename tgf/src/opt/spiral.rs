use circ_pack::entities::{BoundingRegion, Item, Layout, PlacementMode, PlacementResult};
use itertools::Itertools;
use log::debug;

use crate::config::SpiralConfig;

/// Best-effort placement for item sets that cannot be laid out without overlap.
///
/// Items are placed in input order along an expanding spiral around the center of the region:
/// the `k`-th admitted item at angle `k * angle_step` and distance `min(R - r_k, growth * r_ref * sqrt(k))`,
/// with `r_ref` the largest admitted radius. Every admitted item gets a position inside the region,
/// possibly overlapping others. Items that can never fit are dropped.
pub fn place_overlapping(
    region: BoundingRegion,
    items: &[Item],
    config: &SpiralConfig,
) -> PlacementResult {
    let (admitted, dropped): (Vec<&Item>, Vec<&Item>) =
        items.iter().partition(|item| region.admits(item.radius));

    let r_ref = admitted.iter().map(|item| item.radius).fold(0.0, f64::max);

    let mut layout = Layout::new(region);
    for (k, item) in admitted.into_iter().enumerate() {
        let k = k as f64;
        let dist = f64::min(
            region.radius - item.radius,
            config.growth * r_ref * k.sqrt(),
        );
        let center = region.center.polar_offset(dist, k * config.angle_step);
        layout.place_item(item, center);
    }

    debug!(
        "[SPIRAL] placed {} items with overlap allowed, {} dropped",
        layout.placed_items.len(),
        dropped.len()
    );

    let dropped = dropped.into_iter().map(|item| item.id).collect_vec();
    layout.save(vec![], dropped, PlacementMode::OverlapAllowed)
}

#[cfg(test)]
mod tests {
    use circ_pack::entities::Instance;
    use circ_pack::geometry::primitives::Point;
    use circ_pack::util::assertions;
    use float_cmp::approx_eq;

    use super::*;

    #[test]
    fn first_item_at_center_then_spiral() {
        let instance = Instance::from_radii(10.0, &[1.0, 2.0, 1.0]).unwrap();
        let result = place_overlapping(instance.region, instance.items(), &SpiralConfig::default());

        assert_eq!(result.mode, PlacementMode::OverlapAllowed);
        assert_eq!(result.placed_items[0].center(), Point(0.0, 0.0));

        // r_ref = 2: second item at distance 0.7 * 2 * sqrt(1) and angle 0.7
        let c1 = result.placed_items[1].center();
        assert!(approx_eq!(f64, c1.norm(), 1.4, epsilon = 1e-9));
        assert!(approx_eq!(f64, c1.1.atan2(c1.0), 0.7, epsilon = 1e-9));
        assert!(assertions::items_are_contained(&result));
    }

    #[test]
    fn distance_is_capped_by_the_boundary() {
        let instance = Instance::from_radii(5.0, &[2.0; 12]).unwrap();
        let result = place_overlapping(instance.region, instance.items(), &SpiralConfig::default());

        assert_eq!(result.n_placed(), 12);
        assert!(result.unplaced.is_empty());
        assert!(assertions::items_are_contained(&result));
        let last = result.placed_items[11].center();
        assert!(approx_eq!(f64, last.norm(), 3.0, epsilon = 1e-9));
    }

    #[test]
    fn oversized_items_are_still_dropped() {
        let instance = Instance::from_radii(5.0, &[2.0, 7.0, 0.0]).unwrap();
        let result = place_overlapping(instance.region, instance.items(), &SpiralConfig::default());
        assert_eq!(result.n_placed(), 1);
        assert_eq!(result.dropped, vec![1, 2]);
    }
}
