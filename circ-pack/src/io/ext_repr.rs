use serde::{Deserialize, Serialize};

use crate::entities::PlacementMode;

/// External representation of an [`Instance`](crate::entities::Instance).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtInstance {
    /// The name of the instance
    pub name: String,
    /// The circular container (e.g. conduit) in which all items are laid out
    pub container: ExtContainer,
    /// Set of items to be laid out
    pub items: Vec<ExtItem>,
    /// Set by the caller when the items are known to exceed the allowed fill,
    /// permitting an overlapping layout if no valid one can be found
    #[serde(default)]
    pub permit_overlap: bool,
}

/// External representation of a [`BoundingRegion`](crate::entities::BoundingRegion).
/// Either the radius or the internal area has to be defined; the radius takes precedence.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtContainer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<f64>,
}

/// External representation of an [`Item`](crate::entities::Item).
/// Either the radius or the cross-sectional area may be defined; the radius takes precedence.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtItem {
    /// Unique identifier of the item
    pub id: u64,
    /// Number of identical copies of this item to lay out
    #[serde(default = "default_demand")]
    pub demand: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<f64>,
    /// Items nested inside every copy of this item
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conductors: Option<ExtConductors>,
    /// Group used to color the item in renders. Defaults to the position of the item in the instance
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<usize>,
}

fn default_demand() -> usize {
    1
}

/// Identical items nested inside an [`ExtItem`].
/// If neither radius nor area are defined, the size is derived from the space inside the parent.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtConductors {
    pub count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<f64>,
}

/// External representation of a [`PlacementResult`](crate::entities::PlacementResult).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtSolution {
    pub container_radius: f64,
    pub mode: PlacementMode,
    /// Maximum distance from the center of the container to the edge of any placed item
    pub max_extent: f64,
    pub density: f64,
    pub placed_items: Vec<ExtPlacedItem>,
    /// Ids of the items for which no position was found
    pub unplaced: Vec<u64>,
    /// Ids of the items that can never fit the container
    pub dropped: Vec<u64>,
    /// Time it took to compute the layout, in milliseconds
    pub run_time_ms: u64,
}

/// External representation of a [`PlacedItem`](crate::entities::PlacedItem).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtPlacedItem {
    /// Id of the [`ExtItem`] this copy stems from
    pub item_id: u64,
    /// Index of the copy among all expanded items of the instance
    pub copy_index: usize,
    pub center: (f64, f64),
    pub radius: f64,
    pub group: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conductors: Option<ExtNestedLayout>,
}

/// External representation of a [`NestedLayout`](crate::entities::NestedLayout).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtNestedLayout {
    /// Radius of the region available to the nested items
    pub inner_radius: f64,
    pub requested: usize,
    /// Positions of the nested items, in absolute coordinates
    pub placed: Vec<ExtCircle>,
    pub complete: bool,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
pub struct ExtCircle {
    pub center: (f64, f64),
    pub radius: f64,
}
