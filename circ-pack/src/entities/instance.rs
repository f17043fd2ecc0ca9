use anyhow::{Result, ensure};
use itertools::Itertools;

use crate::entities::{BoundingRegion, Item};

/// A bounding region together with the items that should be laid out inside it.
#[derive(Clone, Debug)]
pub struct Instance {
    pub region: BoundingRegion,
    items: Vec<Item>,
}

impl Instance {
    /// Creates a new instance.
    /// Items are identified by their position: `items[i].id` must equal `i`.
    ///
    /// Radii that are zero or negative, or larger than the region, are accepted here and will be
    /// reported as dropped by the placement; non-finite radii are rejected.
    pub fn new(region: BoundingRegion, items: Vec<Item>) -> Result<Self> {
        ensure!(!items.is_empty(), "instance contains no items");
        ensure!(
            items.iter().enumerate().all(|(i, item)| item.id == i),
            "item ids must match their index: {:?}",
            items.iter().map(|i| i.id).collect_vec()
        );
        for item in &items {
            ensure!(
                item.radius.is_finite(),
                "item {} has a non-finite radius: {}",
                item.id,
                item.radius
            );
            ensure!(
                item.nested
                    .iter()
                    .filter_map(|n| n.radius)
                    .all(f64::is_finite),
                "item {} has a nested item with a non-finite radius",
                item.id
            );
        }
        Ok(Self { region, items })
    }

    /// Instance with a region of `radius` centered at the origin and one item for every entry of `radii`.
    pub fn from_radii(radius: f64, radii: &[f64]) -> Result<Self> {
        let items = radii
            .iter()
            .enumerate()
            .map(|(id, &r)| Item::new(id, r))
            .collect_vec();
        Self::new(BoundingRegion::centered(radius)?, items)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item(&self, id: usize) -> &Item {
        &self.items[id]
    }

    pub fn total_item_qty(&self) -> usize {
        self.items.len()
    }

    /// Sum of the areas of all items
    pub fn item_area(&self) -> f64 {
        self.items
            .iter()
            .map(|i| std::f64::consts::PI * i.radius * i.radius)
            .sum()
    }
}
