use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::entities::{BoundingRegion, PlacedItem};
use crate::geometry::geo_traits::Shape;

/// Whether the items of a [`PlacementResult`] are guaranteed not to overlap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlacementMode {
    NonOverlapping,
    /// Best-effort layout in which items may overlap each other (but never the boundary)
    OverlapAllowed,
}

impl Display for PlacementMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PlacementMode::NonOverlapping => write!(f, "non-overlapping"),
            PlacementMode::OverlapAllowed => write!(f, "overlap-allowed"),
        }
    }
}

/// Immutable outcome of laying out a set of items in a [`BoundingRegion`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlacementResult {
    pub region: BoundingRegion,
    /// Items that received a position, in order of placement
    pub placed_items: Vec<PlacedItem>,
    /// Ids of items that fit the region on their own, but for which no position could be found
    pub unplaced: Vec<usize>,
    /// Ids of items that can never be placed: radius non-positive or larger than the region
    pub dropped: Vec<usize>,
    pub mode: PlacementMode,
}

impl PlacementResult {
    pub fn n_placed(&self) -> usize {
        self.placed_items.len()
    }

    pub fn n_unplaced(&self) -> usize {
        self.unplaced.len()
    }

    pub fn n_dropped(&self) -> usize {
        self.dropped.len()
    }

    /// True if every item that fits the region on its own received a position.
    pub fn is_complete(&self) -> bool {
        self.unplaced.is_empty()
    }

    /// Tightness of the layout: maximum distance from the center of the region to the edge of any placed item.
    /// 0 if nothing was placed.
    pub fn max_extent(&self) -> f64 {
        self.placed_items
            .iter()
            .map(|pi| self.region.extent_of(&pi.circle))
            .fold(0.0, f64::max)
    }

    /// Fraction of the region's area covered by placed items (overlapping areas counted twice)
    pub fn density(&self) -> f64 {
        let item_area: f64 = self.placed_items.iter().map(|pi| pi.circle.area()).sum();
        item_area / self.region.area()
    }

    pub fn placed_item(&self, item_id: usize) -> Option<&PlacedItem> {
        self.placed_items.iter().find(|pi| pi.item_id == item_id)
    }
}

/// Placement of the items nested inside a [`PlacedItem`], e.g. the conductors of a cable.
/// Item ids refer to the position of the nested item within its parent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NestedLayout {
    /// Result within the child region, which is centered at the parent's center
    pub result: PlacementResult,
    /// Number of nested items requested by the parent
    pub n_requested: usize,
    /// Number of (shrinking) attempts that were made
    pub n_attempts: usize,
    /// Factor applied to the initial nested radii in the reported attempt
    pub scale: f64,
}

impl NestedLayout {
    /// True if every requested nested item was placed.
    pub fn is_complete(&self) -> bool {
        self.result.n_placed() == self.n_requested
    }
}
