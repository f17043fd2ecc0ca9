use circ_pack::EPSILON;
use circ_pack::entities::{BoundingRegion, Layout};
use circ_pack::geometry::primitives::{Circle, Point};

/// Sweeps concentric rings around the center of the region, from the inside out.
/// Ring `k` (starting at 1) has a radius of `k * step`, with `step` a multiple of the item's diameter.
/// The sweep stops at the last ring on which an item of radius `r` still lies within the region.
pub struct RingSampler {
    pub region: BoundingRegion,
    pub r: f64,
    pub step: f64,
    pub n_samples: usize,
}

impl RingSampler {
    pub fn new(region: BoundingRegion, r: f64, step_factor: f64) -> Self {
        Self {
            region,
            r,
            step: step_factor * 2.0 * r,
            n_samples: 0,
        }
    }

    pub fn n_rings(&self) -> usize {
        if self.step <= 0.0 || !self.step.is_finite() {
            return 0;
        }
        ((self.region.radius - self.r + EPSILON) / self.step).floor().max(0.0) as usize
    }

    /// All points on the rings, ring by ring, in the order of `angles`.
    pub fn points<'a>(&'a self, angles: &'a [f64]) -> impl Iterator<Item = Point> + 'a {
        (1..=self.n_rings()).flat_map(move |k| {
            let ring_r = k as f64 * self.step;
            angles
                .iter()
                .map(move |&a| self.region.center.polar_offset(ring_r, a))
        })
    }

    /// First point on the rings at which an item of radius `r` keeps a gap of `spacing` to all items in `layout`.
    pub fn search(&mut self, layout: &Layout, spacing: f64, angles: &[f64]) -> Option<Point> {
        let mut n_samples = 0;
        let found = self.points(angles).find(|p| {
            n_samples += 1;
            layout.fits(&Circle::new(*p, self.r), spacing)
        });
        self.n_samples += n_samples;
        found
    }
}

#[cfg(test)]
mod tests {
    use circ_pack::entities::Item;

    use super::*;
    use crate::config::AttemptConfig;

    #[test]
    fn ring_count_respects_the_boundary() {
        let region = BoundingRegion::centered(10.0).unwrap();
        // step 2.2: rings at 2.2, 4.4, 6.6 and 8.8 all keep r = 1 inside
        assert_eq!(RingSampler::new(region, 1.0, 1.1).n_rings(), 4);
        assert_eq!(RingSampler::new(region, 2.0, 1.1).n_rings(), 1);
        assert_eq!(RingSampler::new(region, 6.0, 1.1).n_rings(), 0);
    }

    #[test]
    fn finds_first_free_point() {
        let region = BoundingRegion::centered(10.0).unwrap();
        let mut layout = Layout::new(region);
        layout.place_item(&Item::new(0, 3.0), Point(0.0, 0.0));

        let angles = AttemptConfig::default_for(4).angles();
        let mut sampler = RingSampler::new(region, 1.0, 1.1);
        let p = sampler.search(&layout, 0.0, &angles).unwrap();

        // rings at 2.2 collide with the center item, 4.4 is the first free ring
        assert!((p.norm() - 4.4).abs() < 1e-9);
        assert_eq!(sampler.n_samples, 5);
    }
}
