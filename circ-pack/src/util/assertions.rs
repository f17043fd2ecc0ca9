use float_cmp::approx_eq;
use itertools::Itertools;
use log::error;

use crate::EPSILON;
use crate::entities::{Instance, PlacedItem, PlacementMode, PlacementResult};
use crate::geometry::geo_traits::CollidesWith;
//Various checks to verify correctness of placement results
//Used in debug_assertion!() blocks and tests

/// No two placed items overlap (touching is fine).
pub fn items_do_not_overlap(placed_items: &[PlacedItem]) -> bool {
    for (a, b) in placed_items.iter().tuple_combinations() {
        if a.circle.collides_with(&b.circle) {
            error!(
                "items {} and {} overlap: {:?} <-> {:?}",
                a.item_id, b.item_id, a.circle, b.circle
            );
            return false;
        }
    }
    true
}

/// Every placed item lies inside the region of the result.
pub fn items_are_contained(result: &PlacementResult) -> bool {
    for pi in &result.placed_items {
        if !result.region.contains(&pi.circle) {
            error!(
                "item {} exceeds the region (extent: {:.6}, radius: {:.6})",
                pi.item_id,
                result.region.extent_of(&pi.circle),
                result.region.radius
            );
            return false;
        }
    }
    true
}

/// Containment always holds, non-overlap only in [`PlacementMode::NonOverlapping`].
pub fn result_is_valid(result: &PlacementResult) -> bool {
    let contained = items_are_contained(result);
    let separated = match result.mode {
        PlacementMode::NonOverlapping => items_do_not_overlap(&result.placed_items),
        PlacementMode::OverlapAllowed => true,
    };
    contained && separated
}

/// Every item of the instance is accounted for exactly once: placed, unplaced or dropped.
pub fn result_matches_instance(result: &PlacementResult, instance: &Instance) -> bool {
    let mut ids = result
        .placed_items
        .iter()
        .map(|pi| pi.item_id)
        .chain(result.unplaced.iter().copied())
        .chain(result.dropped.iter().copied())
        .collect_vec();
    ids.sort_unstable();

    let expected = (0..instance.total_item_qty()).collect_vec();
    if ids != expected {
        error!("item ids in result {ids:?} do not match the instance");
        return false;
    }

    result.placed_items.iter().all(|pi| {
        approx_eq!(
            f64,
            pi.radius(),
            instance.item(pi.item_id).radius,
            epsilon = EPSILON
        )
    })
}

/// The nested items of `parent` stay within `parent_r - inner_margin` of the parent's center.
pub fn nested_items_are_contained(parent: &PlacedItem, inner_margin: f64) -> bool {
    let Some(nested) = parent.nested.as_ref() else {
        return true;
    };
    let child_radius = parent.radius() - inner_margin;
    nested.result.placed_items.iter().all(|pi| {
        let extent = pi.circle.extent_from(&parent.center());
        if extent > child_radius + EPSILON {
            error!(
                "nested item {} of item {} exceeds the inner region ({extent:.6} > {child_radius:.6})",
                pi.item_id, parent.item_id
            );
            false
        } else {
            true
        }
    })
}
