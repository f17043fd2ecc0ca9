use std::f64::consts::TAU;

use circ_pack::io::svg::SvgDrawOptions;
use serde::{Deserialize, Serialize};

/// Configuration for the TGF optimizer
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct TGFConfig {
    /// Search for the top-level items (e.g. cables in a conduit)
    pub search: SearchConfig,
    /// Placement used when the caller permits overlap and no valid layout was found
    pub overlap: SpiralConfig,
    /// Layout of items nested inside placed items (e.g. conductors in a cable)
    pub nested: NestedConfig,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}

impl TGFConfig {
    /// Draw options for a layout of an instance, forcing the over-fill hatch if the instance is flagged as over-filled
    pub fn svg_draw_options_for(&self, over_filled: bool) -> SvgDrawOptions {
        SvgDrawOptions {
            overfill_hatch: self.svg_draw_options.overfill_hatch || over_filled,
            ..self.svg_draw_options
        }
    }
}

/// Configuration of the greedy placement and the multi-seed search around it
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SearchConfig {
    /// Number of evenly spaced angles sampled around every placed circle and along the boundary
    pub n_angle_samples: usize,
    /// Minimum gaps between items, tried in order until a position is found
    pub spacing_tolerances: Vec<f64>,
    /// Distance between the rings of the fallback sweep, as a multiple of the item's diameter
    pub ring_step_factor: f64,
    /// Rotations of the sampled angles tried by the multi-seed search, as fractions of the angular step
    pub offset_fractions: Vec<f64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            n_angle_samples: 36,
            spacing_tolerances: vec![0.5, 0.2, 0.0],
            ring_step_factor: 1.1,
            offset_fractions: vec![0.0, 0.5, 1.0, 1.5, 2.0],
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct SpiralConfig {
    /// Angle (radians) between consecutive items on the spiral
    pub angle_step: f64,
    /// Radial growth of the spiral, as a multiple of the largest item radius
    pub growth: f64,
}

impl Default for SpiralConfig {
    fn default() -> Self {
        Self {
            angle_step: 0.7,
            growth: 0.7,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct NestedConfig {
    /// Thickness of the parent's wall: nested items stay within `parent_r - inner_margin` of its center
    pub inner_margin: f64,
    /// Factor applied to all nested radii after an incomplete attempt
    pub shrink_factor: f64,
    /// Maximum number of (shrinking) attempts
    pub max_attempts: usize,
    pub search: SearchConfig,
}

impl Default for NestedConfig {
    fn default() -> Self {
        Self {
            inner_margin: 0.6,
            shrink_factor: 0.9,
            max_attempts: 15,
            search: SearchConfig {
                spacing_tolerances: vec![0.2, 0.0],
                ..SearchConfig::default()
            },
        }
    }
}

/// How the first item of a layout is positioned
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SeedMode {
    /// At the center of the region
    Center,
    /// Against the boundary, at the angle offset
    Boundary,
}

/// A single configuration under which the greedy placement is run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttemptConfig {
    pub seed_mode: SeedMode,
    /// Rotation (radians) applied to all sampled angles
    pub angle_offset: f64,
    pub n_angle_samples: usize,
}

impl AttemptConfig {
    pub fn new(seed_mode: SeedMode, angle_offset: f64, n_angle_samples: usize) -> Self {
        Self {
            seed_mode,
            angle_offset,
            n_angle_samples,
        }
    }

    /// Center seed without rotation
    pub fn default_for(n_angle_samples: usize) -> Self {
        Self::new(SeedMode::Center, 0.0, n_angle_samples)
    }

    /// `angle_k = offset + k * 2π / n` for `k` in `0..n`
    pub fn angles(&self) -> Vec<f64> {
        let n = self.n_angle_samples;
        (0..n)
            .map(|k| self.angle_offset + k as f64 * TAU / n as f64)
            .collect()
    }
}
