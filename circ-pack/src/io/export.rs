use std::time::Duration;

use itertools::Itertools;

use crate::entities::{NestedLayout, PlacedItem, PlacementResult};
use crate::io::ext_repr::{ExtCircle, ExtInstance, ExtNestedLayout, ExtPlacedItem, ExtSolution};
use crate::io::import::expanded_ext_ids;

/// Exports a [`PlacementResult`] of an instance imported from `ext_instance` by composing an [`ExtSolution`] from it.
pub fn export_solution(
    ext_instance: &ExtInstance,
    result: &PlacementResult,
    run_time: Duration,
) -> ExtSolution {
    let ext_ids = expanded_ext_ids(ext_instance);

    ExtSolution {
        container_radius: result.region.radius,
        mode: result.mode,
        max_extent: result.max_extent(),
        density: result.density(),
        placed_items: result
            .placed_items
            .iter()
            .map(|pi| export_placed_item(pi, ext_ids[pi.item_id]))
            .collect_vec(),
        unplaced: result.unplaced.iter().map(|&id| ext_ids[id]).collect_vec(),
        dropped: result.dropped.iter().map(|&id| ext_ids[id]).collect_vec(),
        run_time_ms: run_time.as_millis() as u64,
    }
}

pub fn export_placed_item(placed_item: &PlacedItem, ext_id: u64) -> ExtPlacedItem {
    ExtPlacedItem {
        item_id: ext_id,
        copy_index: placed_item.item_id,
        center: placed_item.center().into(),
        radius: placed_item.radius(),
        group: placed_item.group,
        conductors: placed_item.nested.as_ref().map(export_nested_layout),
    }
}

pub fn export_nested_layout(nested: &NestedLayout) -> ExtNestedLayout {
    ExtNestedLayout {
        inner_radius: nested.result.region.radius,
        requested: nested.n_requested,
        placed: nested
            .result
            .placed_items
            .iter()
            .map(|pi| ExtCircle {
                center: pi.center().into(),
                radius: pi.radius(),
            })
            .collect_vec(),
        complete: nested.is_complete(),
    }
}
