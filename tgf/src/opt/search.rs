use std::cmp::Reverse;

use circ_pack::entities::{BoundingRegion, Item, Layout};
use circ_pack::geometry::primitives::{Circle, Point};
use itertools::Itertools;
use log::trace;
use ordered_float::NotNan;

use crate::config::SeedMode;
use crate::opt::loss::TGFLoss;
use crate::samplers::tangent_sampler::tangent_candidates;

/// Search the layout for a valid position of the item with minimal loss, keeping a gap of `spacing` to all placed items.
pub fn search(
    layout: &Layout,
    item: &Item,
    spacing: f64,
    angles: &[f64],
    seed_mode: SeedMode,
    sample_counter: &mut usize,
) -> Option<(Point, TGFLoss)> {
    let candidates = tangent_candidates(layout, item.radius, spacing, angles, seed_mode);
    *sample_counter += candidates.len();

    let mut best: Option<(Point, TGFLoss)> = None;

    for (i, center) in candidates.into_iter().enumerate() {
        let circle = Circle::new(center, item.radius);
        let Some(loss) = TGFLoss::from_circle(layout, &circle) else {
            continue;
        };

        //only validate the candidate if it improves on the current best (earlier candidates win ties)
        let worth_testing = match &best {
            Some((_, best_loss)) => loss < *best_loss,
            None => true,
        };

        if worth_testing && layout.fits(&circle, spacing) {
            trace!("[SEARCH: {i}] better: {center:?} {loss}");
            best = Some((center, loss));
        }
    }

    best
}

/// Splits the items into the ids of those that can never fit `region` (in input order)
/// and the order (indices into `items`) in which the others should be placed: by descending radius, ties in input order.
pub fn item_placement_order(region: &BoundingRegion, items: &[Item]) -> (Vec<usize>, Vec<usize>) {
    let dropped = items
        .iter()
        .filter(|item| !region.admits(item.radius))
        .map(|item| item.id)
        .collect_vec();

    let order = items
        .iter()
        .enumerate()
        .filter(|(_, item)| region.admits(item.radius))
        .filter_map(|(i, item)| NotNan::new(item.radius).ok().map(|r| (i, r)))
        .sorted_by_key(|&(i, r)| (Reverse(r), i))
        .map(|(i, _)| i)
        .collect_vec();

    (dropped, order)
}
