use crate::entities::{BoundingRegion, Item, PlacedItem, PlacementMode, PlacementResult};
use crate::geometry::primitives::{Circle, Point};

/// A [`Layout`] is a dynamic representation of items that have been placed in a [`BoundingRegion`].
/// Items are only ever added; once the layout is complete it is turned into a [`PlacementResult`] with [`Layout::save`].
#[derive(Clone, Debug)]
pub struct Layout {
    pub region: BoundingRegion,
    /// All items placed so far, in order of placement
    pub placed_items: Vec<PlacedItem>,
    /// Running maximum of the extent of all placed items
    max_extent: f64,
}

impl Layout {
    pub fn new(region: BoundingRegion) -> Self {
        Layout {
            region,
            placed_items: vec![],
            max_extent: 0.0,
        }
    }

    /// Places `item` with its center at `center`.
    /// Returns the index of the placed item within the layout.
    pub fn place_item(&mut self, item: &Item, center: Point) -> usize {
        let placed_item = PlacedItem::new(item, center);
        debug_assert!(
            self.region.contains(&placed_item.circle),
            "item {} placed outside the region: {:?}",
            item.id,
            placed_item.circle
        );
        self.max_extent = f64::max(self.max_extent, self.region.extent_of(&placed_item.circle));
        self.placed_items.push(placed_item);
        self.placed_items.len() - 1
    }

    pub fn circles(&self) -> impl Iterator<Item = &Circle> + Clone {
        self.placed_items.iter().map(|pi| &pi.circle)
    }

    pub fn is_empty(&self) -> bool {
        self.placed_items.is_empty()
    }

    /// Maximum distance from the center of the region to the edge of any placed item (0 if empty)
    pub fn max_extent(&self) -> f64 {
        self.max_extent
    }

    /// Whether `circle` could be added to the layout: it lies within the region and keeps a gap of
    /// at least `spacing` to every placed item.
    pub fn fits(&self, circle: &Circle, spacing: f64) -> bool {
        self.region.contains(circle) && self.is_separated(circle, spacing)
    }

    /// Whether `circle` keeps a gap of at least `spacing` to every placed item.
    pub fn is_separated(&self, circle: &Circle, spacing: f64) -> bool {
        self.circles().all(|c| c.is_separated_from(circle, spacing))
    }

    /// Consumes the layout and turns it into a [`PlacementResult`].
    pub fn save(self, unplaced: Vec<usize>, dropped: Vec<usize>, mode: PlacementMode) -> PlacementResult {
        PlacementResult {
            region: self.region,
            placed_items: self.placed_items,
            unplaced,
            dropped,
            mode,
        }
    }
}
