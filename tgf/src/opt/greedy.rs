use circ_pack::entities::{BoundingRegion, Item, Layout, PlacementMode, PlacementResult};
use circ_pack::geometry::primitives::Point;
use circ_pack::util::assertions;
use log::{debug, trace};

use crate::config::{AttemptConfig, SearchConfig};
use crate::opt::search::{item_placement_order, search};
use crate::samplers::ring_sampler::RingSampler;

/// Places items one at a time, largest first, at the best tangent candidate.
/// Every item is searched for with decreasing spacing tolerances, falling back on a ring sweep
/// at the final tolerance. Items for which nothing is found are left unplaced.
pub struct GreedyPlacementEngine<'a> {
    pub region: BoundingRegion,
    pub items: &'a [Item],
    pub config: &'a SearchConfig,
    pub attempt: AttemptConfig,
    pub sample_counter: usize,
}

impl<'a> GreedyPlacementEngine<'a> {
    pub fn new(
        region: BoundingRegion,
        items: &'a [Item],
        config: &'a SearchConfig,
        attempt: AttemptConfig,
    ) -> Self {
        Self {
            region,
            items,
            config,
            attempt,
            sample_counter: 0,
        }
    }

    pub fn solve(&mut self) -> PlacementResult {
        let (dropped, order) = item_placement_order(&self.region, self.items);
        if !dropped.is_empty() {
            debug!("[GREEDY] dropping items {dropped:?}, they can never fit the region");
        }

        let items = self.items;
        let angles = self.attempt.angles();
        let mut layout = Layout::new(self.region);
        let mut unplaced = vec![];

        for item in order.into_iter().map(|i| &items[i]) {
            match self.find_position(&layout, item, &angles) {
                Some(center) => {
                    layout.place_item(item, center);
                    trace!(
                        "[GREEDY] placed item {} (r: {:.3}) at ({:.3}, {:.3})",
                        item.id, item.radius, center.0, center.1
                    );
                }
                None => {
                    trace!("[GREEDY] no position found for item {}", item.id);
                    unplaced.push(item.id);
                }
            }
        }

        let result = layout.save(unplaced, dropped, PlacementMode::NonOverlapping);
        debug_assert!(assertions::result_is_valid(&result));
        result
    }

    fn find_position(&mut self, layout: &Layout, item: &Item, angles: &[f64]) -> Option<Point> {
        let config = self.config;
        for &spacing in &config.spacing_tolerances {
            let best = search(
                layout,
                item,
                spacing,
                angles,
                self.attempt.seed_mode,
                &mut self.sample_counter,
            );
            if let Some((center, _)) = best {
                return Some(center);
            }
        }

        let final_spacing = config.spacing_tolerances.last().copied().unwrap_or(0.0);
        let mut ring_sampler = RingSampler::new(self.region, item.radius, config.ring_step_factor);
        let found = ring_sampler.search(layout, final_spacing, angles);
        self.sample_counter += ring_sampler.n_samples;
        if found.is_some() {
            debug!("[GREEDY] item {} placed by ring fallback", item.id);
        }
        found
    }
}
