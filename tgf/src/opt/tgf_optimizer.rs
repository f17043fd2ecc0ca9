use std::time::{Duration, Instant};

use circ_pack::entities::{Instance, PlacementResult};
use circ_pack::util::assertions;
use log::{info, warn};
use thousands::Separable;

use crate::config::TGFConfig;
use crate::opt::multi_seed::MultiSeedOptimizer;
use crate::opt::nested::pack_nested;
use crate::opt::spiral::place_overlapping;

/// Tangent Greedy Fill (TGF) optimizer.
///
/// Lays out the items of an [`Instance`] with the [`MultiSeedOptimizer`]. If not every item could be placed
/// and overlap is permitted, the items are laid out on a spiral instead. Finally, the nested items of every
/// placed item are laid out inside it.
pub struct TGFOptimizer {
    pub instance: Instance,
    pub config: TGFConfig,
    /// Set by callers that know the items exceed the allowed fill of the region
    pub permit_overlap: bool,
    pub sample_counter: usize,
    /// Wall time spent in the last call to [`TGFOptimizer::solve`]
    pub run_time: Duration,
}

impl TGFOptimizer {
    pub fn new(instance: Instance, config: TGFConfig, permit_overlap: bool) -> Self {
        assert!(config.search.n_angle_samples > 0);
        assert!(config.nested.search.n_angle_samples > 0);
        Self {
            instance,
            config,
            permit_overlap,
            sample_counter: 0,
            run_time: Duration::ZERO,
        }
    }

    pub fn solve(&mut self) -> PlacementResult {
        let start = Instant::now();
        let region = self.instance.region;
        let items = self.instance.items();

        let mut ms_optimizer = MultiSeedOptimizer::new(region, items, &self.config.search);
        let mut result = ms_optimizer.solve();
        self.sample_counter += ms_optimizer.sample_counter;

        info!(
            "[TGF] multi-seed search placed {}/{} items (extent: {:.3}, radius: {:.3})",
            result.n_placed(),
            self.instance.total_item_qty(),
            result.max_extent(),
            region.radius
        );

        if !result.is_complete() && self.permit_overlap {
            warn!(
                "[TGF] {} items could not be placed without overlap, switching to overlapping layout",
                result.n_unplaced()
            );
            result = place_overlapping(region, items, &self.config.overlap);
        }

        for pi in result.placed_items.iter_mut() {
            let item = self.instance.item(pi.item_id);
            if item.has_nested() {
                pi.nested = pack_nested(pi, &item.nested, &self.config.nested);
                if let Some(nested) = &pi.nested {
                    if !nested.is_complete() {
                        warn!(
                            "[TGF] only {}/{} nested items placed inside item {}",
                            nested.result.n_placed(),
                            nested.n_requested,
                            pi.item_id
                        );
                    }
                }
            }
        }

        debug_assert!(assertions::result_is_valid(&result));
        debug_assert!(assertions::result_matches_instance(&result, &self.instance));
        debug_assert!(
            result
                .placed_items
                .iter()
                .all(|pi| assertions::nested_items_are_contained(pi, self.config.nested.inner_margin))
        );

        self.run_time = start.elapsed();
        info!(
            "[TGF] optimization finished in {:.3}ms ({} samples)",
            self.run_time.as_secs_f64() * 1000.0,
            self.sample_counter.separate_with_commas()
        );

        info!(
            "[TGF] solution contains {} items ({} unplaced, {} dropped) with a density of {:.3}%",
            result.n_placed(),
            result.n_unplaced(),
            result.n_dropped(),
            result.density() * 100.0
        );
        result
    }
}
