mod instance;
mod item;
mod layout;
mod placed_item;
mod region;
mod result;

#[doc(inline)]
pub use instance::Instance;

#[doc(inline)]
pub use item::Item;

#[doc(inline)]
pub use item::NestedItem;

#[doc(inline)]
pub use layout::Layout;

#[doc(inline)]
pub use placed_item::PlacedItem;

#[doc(inline)]
pub use region::BoundingRegion;

#[doc(inline)]
pub use result::NestedLayout;

#[doc(inline)]
pub use result::PlacementMode;

#[doc(inline)]
pub use result::PlacementResult;
