use std::f64::consts::TAU;

use circ_pack::entities::{BoundingRegion, Item, PlacementResult};
use log::debug;
use rayon::prelude::*;

use crate::config::{AttemptConfig, SearchConfig, SeedMode};
use crate::opt::greedy::GreedyPlacementEngine;

/// Angle sample counts that also contribute rotated and boundary-seeded attempts.
pub const SAMPLE_COUNT_LADDER: [usize; 7] = [12, 24, 36, 48, 72, 96, 144];

/// Sample count of the alternative attempts derived from a base count `n`
pub fn refined_sample_count(n: usize) -> usize {
    n + n / 3
}

/// Runs the [`GreedyPlacementEngine`] under a fixed set of seed modes and angle offsets, keeping the best result.
pub struct MultiSeedOptimizer<'a> {
    pub region: BoundingRegion,
    pub items: &'a [Item],
    pub config: &'a SearchConfig,
    pub sample_counter: usize,
}

impl<'a> MultiSeedOptimizer<'a> {
    pub fn new(region: BoundingRegion, items: &'a [Item], config: &'a SearchConfig) -> Self {
        assert!(config.n_angle_samples > 0);
        Self {
            region,
            items,
            config,
            sample_counter: 0,
        }
    }

    pub fn solve(&mut self) -> PlacementResult {
        let attempts = attempts(self.config);

        //attempts are independent, the ordered collect keeps the selection deterministic
        let outcomes = attempts
            .par_iter()
            .map(|attempt| {
                let mut engine =
                    GreedyPlacementEngine::new(self.region, self.items, self.config, *attempt);
                let result = engine.solve();
                (result, engine.sample_counter)
            })
            .collect::<Vec<_>>();

        self.sample_counter += outcomes.iter().map(|(_, n)| n).sum::<usize>();

        let mut results = outcomes.into_iter().map(|(r, _)| r).collect::<Vec<_>>();
        let best_idx = select_best(&results);

        debug!(
            "[MS] selected attempt {}/{} ({:?}), {} placed, {} unplaced, extent: {:.3}",
            best_idx,
            results.len(),
            attempts[best_idx],
            results[best_idx].n_placed(),
            results[best_idx].n_unplaced(),
            results[best_idx].max_extent()
        );

        results.swap_remove(best_idx)
    }
}

/// All configurations under which the greedy placement is run, in order.
///
/// The first is the default attempt: center seed, no rotation, `config.n_angle_samples` angles.
/// Then, for every count `c` from 1 up to `config.n_angle_samples`, the default attempt with `c` angles.
/// Counts on the [`SAMPLE_COUNT_LADDER`] additionally contribute every seed mode and offset fraction
/// with [`refined_sample_count(c)`](refined_sample_count) angles. Duplicates are skipped.
///
/// The attempts of a count are therefore a subset of the attempts of every larger count.
pub fn attempts(config: &SearchConfig) -> Vec<AttemptConfig> {
    let n = config.n_angle_samples;

    let mut attempts = vec![AttemptConfig::default_for(n)];
    for c in 1..=n {
        let alternatives = if SAMPLE_COUNT_LADDER.contains(&c) {
            seed_alternatives(config, c)
        } else {
            vec![]
        };
        for attempt in [AttemptConfig::default_for(c)].into_iter().chain(alternatives) {
            if !attempts.contains(&attempt) {
                attempts.push(attempt);
            }
        }
    }
    attempts
}

/// Every seed mode and offset fraction (of the angular step of `c`), sampled at the refined count of `c`
fn seed_alternatives(config: &SearchConfig, c: usize) -> Vec<AttemptConfig> {
    let base_step = TAU / c as f64;
    let refined = refined_sample_count(c);
    [SeedMode::Center, SeedMode::Boundary]
        .into_iter()
        .flat_map(|seed_mode| {
            config
                .offset_fractions
                .iter()
                .map(move |f| AttemptConfig::new(seed_mode, f * base_step, refined))
        })
        .collect()
}

/// Index of the best result: the tightest among those that placed every item,
/// otherwise the one with the fewest unplaced items. Earlier results win ties.
pub fn select_best(results: &[PlacementResult]) -> usize {
    let mut best_complete: Option<(usize, f64)> = None;
    let mut best_partial: Option<(usize, usize)> = None;

    for (i, result) in results.iter().enumerate() {
        if result.is_complete() {
            let extent = result.max_extent();
            if best_complete.is_none_or(|(_, e)| extent < e) {
                best_complete = Some((i, extent));
            }
        } else {
            let n_unplaced = result.n_unplaced();
            if best_partial.is_none_or(|(_, u)| n_unplaced < u) {
                best_partial = Some((i, n_unplaced));
            }
        }
    }

    best_complete
        .map(|(i, _)| i)
        .or(best_partial.map(|(i, _)| i))
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test]
    fn default_attempt_comes_first() {
        let config = SearchConfig::default();
        let attempts = attempts(&config);
        assert_eq!(attempts[0], AttemptConfig::default_for(36));
        assert!(attempts.contains(&AttemptConfig::default_for(12)));
        assert_eq!(attempts.iter().filter(|a| **a == attempts[0]).count(), 1);
        assert!(attempts.iter().any(|a| a.n_angle_samples == 48));
    }

    #[test_case(24, 48; "ladder")]
    #[test_case(25, 30; "off_ladder")]
    #[test_case(37, 40; "off_ladder_above_default")]
    #[test_case(13, 20; "off_ladder_to_off_ladder")]
    #[test_case(1, 12; "single_angle")]
    fn larger_sample_counts_only_add_attempts(n_small: usize, n_large: usize) {
        let attempts_for = |n| {
            attempts(&SearchConfig {
                n_angle_samples: n,
                ..SearchConfig::default()
            })
        };
        let small = attempts_for(n_small);
        let large = attempts_for(n_large);
        assert!(small.len() < large.len());
        assert!(small.iter().all(|a| large.contains(a)));
    }

    #[test]
    fn empty_results_select_the_first() {
        assert_eq!(select_best(&[]), 0);
    }
}
