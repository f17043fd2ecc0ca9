use serde::{Deserialize, Serialize};

use crate::entities::{Item, NestedLayout};
use crate::geometry::primitives::{Circle, Point};

/// Represents an [`Item`] that has been placed at a specific position.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlacedItem {
    pub item_id: usize,
    /// The circle occupied by the item
    pub circle: Circle,
    pub group: Option<usize>,
    /// Layout of the items nested inside this one, if any were requested
    pub nested: Option<NestedLayout>,
}

impl PlacedItem {
    pub fn new(item: &Item, center: Point) -> Self {
        PlacedItem {
            item_id: item.id,
            circle: Circle::new(center, item.radius),
            group: item.group,
            nested: None,
        }
    }

    pub fn center(&self) -> Point {
        self.circle.center
    }

    pub fn radius(&self) -> f64 {
        self.circle.radius
    }
}
