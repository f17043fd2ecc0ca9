use std::fmt::{Display, Formatter};

use circ_pack::entities::Layout;
use circ_pack::geometry::primitives::Circle;
use ordered_float::NotNan;

/// The loss TGF assigns to a candidate position, compared lexicographically:
/// 1. the maximum extent of the layout once the candidate is added
/// 2. the extent of the candidate itself
/// 3. the squared distance between the candidate and the center of the region
///
/// Lower is better. Ties are broken by the caller in favor of the earliest candidate.
#[derive(PartialEq, PartialOrd, Copy, Clone, Debug, Eq, Ord)]
pub struct TGFLoss {
    pub max_extent: NotNan<f64>,
    pub extent: NotNan<f64>,
    pub sq_dist: NotNan<f64>,
}

impl TGFLoss {
    /// `None` if any of the components is NaN
    pub fn new(max_extent: f64, extent: f64, sq_dist: f64) -> Option<Self> {
        Some(TGFLoss {
            max_extent: NotNan::new(max_extent).ok()?,
            extent: NotNan::new(extent).ok()?,
            sq_dist: NotNan::new(sq_dist).ok()?,
        })
    }

    /// Loss of adding `circle` to `layout`
    pub fn from_circle(layout: &Layout, circle: &Circle) -> Option<Self> {
        let region = &layout.region;
        let extent = region.extent_of(circle);
        TGFLoss::new(
            f64::max(layout.max_extent(), extent),
            extent,
            circle.center.sq_distance(&region.center),
        )
    }
}

impl Display for TGFLoss {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({:.5}, {:.5}, {:.5})",
            self.max_extent, self.extent, self.sq_dist
        )
    }
}
