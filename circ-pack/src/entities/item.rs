use serde::{Deserialize, Serialize};

/// Circular item to be placed in a [`BoundingRegion`](crate::entities::BoundingRegion), e.g. the cross-section of a cable.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: usize,
    pub radius: f64,
    /// Items to be laid out inside this one once it has been placed, e.g. the conductors of a cable
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nested: Vec<NestedItem>,
    /// Group the item belongs to, only used to color the item when rendering
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<usize>,
}

impl Item {
    pub fn new(id: usize, radius: f64) -> Self {
        Self {
            id,
            radius,
            nested: vec![],
            group: None,
        }
    }

    pub fn with_nested(mut self, nested: impl IntoIterator<Item = NestedItem>) -> Self {
        self.nested = nested.into_iter().collect();
        self
    }

    pub fn with_group(mut self, group: usize) -> Self {
        self.group = Some(group);
        self
    }

    pub fn has_nested(&self) -> bool {
        !self.nested.is_empty()
    }
}

/// An item that lives inside another [`Item`], e.g. a conductor inside a cable.
/// If the radius is unspecified, one is derived from the space available in the parent.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct NestedItem {
    pub radius: Option<f64>,
}

impl NestedItem {
    pub fn new(radius: f64) -> Self {
        Self {
            radius: Some(radius),
        }
    }

    pub fn unspecified() -> Self {
        Self { radius: None }
    }
}
