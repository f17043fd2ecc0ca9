use circ_pack::entities::{BoundingRegion, Item, NestedItem, NestedLayout, PlacedItem};
use itertools::Itertools;
use log::debug;

use crate::config::NestedConfig;
use crate::opt::multi_seed::MultiSeedOptimizer;

/// Radius given to nested items without one: `child_r / max(1.6 * sqrt(n), 1.6)`
pub fn uniform_nested_radius(child_r: f64, n: usize) -> f64 {
    child_r / f64::max(1.6 * (n as f64).sqrt(), 1.6)
}

/// Lays out `nested_items` inside `parent`, in a region of radius `parent_r - inner_margin` centered at the parent.
///
/// Nested items that do not fit the child region with their initial radius are dropped.
/// While not every remaining item could be placed, all radii are shrunk and the search is repeated,
/// up to `config.max_attempts` times. Returns `None` if there is no room inside the parent or nothing to place.
pub fn pack_nested(
    parent: &PlacedItem,
    nested_items: &[NestedItem],
    config: &NestedConfig,
) -> Option<NestedLayout> {
    let child_r = parent.radius() - config.inner_margin;
    if nested_items.is_empty() || child_r <= 0.0 {
        return None;
    }
    let region = BoundingRegion::new(parent.center(), child_r).ok()?;

    let uniform_r = uniform_nested_radius(child_r, nested_items.len());
    let initial_items = nested_items
        .iter()
        .enumerate()
        .map(|(id, n)| Item::new(id, n.radius.unwrap_or(uniform_r)))
        .collect_vec();

    let (admitted, dropped): (Vec<Item>, Vec<Item>) = initial_items
        .into_iter()
        .partition(|item| region.admits(item.radius));
    let dropped = dropped.into_iter().map(|item| item.id).collect_vec();

    let max_attempts = config.max_attempts.max(1);
    let mut attempt = 0;
    let mut scale = 1.0;
    let mut result = loop {
        attempt += 1;
        let items = admitted
            .iter()
            .map(|item| Item::new(item.id, item.radius * scale))
            .collect_vec();
        let result = MultiSeedOptimizer::new(region, &items, &config.search).solve();

        if result.is_complete() || attempt >= max_attempts {
            break result;
        }
        debug!(
            "[NESTED] {}/{} nested items placed in item {} at scale {:.3}, shrinking",
            result.n_placed(),
            items.len(),
            parent.item_id,
            scale
        );
        scale *= config.shrink_factor;
    };

    result.dropped = dropped.into_iter().merge(result.dropped.drain(..)).collect_vec();

    Some(NestedLayout {
        result,
        n_requested: nested_items.len(),
        n_attempts: attempt,
        scale,
    })
}

#[cfg(test)]
mod tests {
    use circ_pack::geometry::primitives::Point;

    use super::*;

    fn parent(r: f64) -> PlacedItem {
        PlacedItem::new(&Item::new(0, r), Point(2.0, -1.0))
    }

    #[test]
    fn uniform_radius() {
        assert_eq!(uniform_nested_radius(3.2, 1), 2.0);
        assert_eq!(uniform_nested_radius(6.4, 4), 2.0);
    }

    #[test]
    fn no_room_inside_parent() {
        let nested = vec![NestedItem::unspecified(); 3];
        assert!(pack_nested(&parent(0.5), &nested, &NestedConfig::default()).is_none());
        assert!(pack_nested(&parent(5.0), &[], &NestedConfig::default()).is_none());
    }

    #[test]
    fn child_region_is_centered_at_the_parent() {
        let nested = vec![NestedItem::new(1.0); 3];
        let layout = pack_nested(&parent(5.0), &nested, &NestedConfig::default()).unwrap();
        assert_eq!(layout.result.region.center, Point(2.0, -1.0));
        assert!((layout.result.region.radius - 4.4).abs() < 1e-12);
        assert!(layout.is_complete());
        assert_eq!(layout.n_attempts, 1);
        assert_eq!(layout.scale, 1.0);
    }

    #[test]
    fn oversized_nested_items_are_dropped() {
        let nested = vec![NestedItem::new(1.0), NestedItem::new(4.5), NestedItem::new(0.0)];
        let layout = pack_nested(&parent(5.0), &nested, &NestedConfig::default()).unwrap();
        assert_eq!(layout.result.dropped, vec![1, 2]);
        assert_eq!(layout.result.n_placed(), 1);
        assert!(!layout.is_complete());
    }

    #[test]
    fn crowded_nested_items_are_shrunk() {
        // seven items of r = 1.5 cannot fit in a region of r = 3.4 (optimal ratio is 3)
        let nested = vec![NestedItem::new(1.5); 7];
        let layout = pack_nested(&parent(4.0), &nested, &NestedConfig::default()).unwrap();
        assert!(layout.n_attempts > 1);
        assert!(layout.scale < 1.0);
        assert!(layout.result.placed_items.iter().all(|pi| pi.radius() < 1.5));
    }
}
