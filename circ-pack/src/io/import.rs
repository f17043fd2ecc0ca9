use anyhow::{Context, Result, bail, ensure};
use itertools::Itertools;
use log::warn;

use crate::entities::{BoundingRegion, Instance, Item, NestedItem};
use crate::io::ext_repr::{ExtConductors, ExtContainer, ExtInstance, ExtItem};

/// Converts an [`ExtInstance`] into an [`Instance`].
/// Every [`ExtItem`] is expanded into `demand` identical [`Item`]s, numbered sequentially.
pub fn import_instance(ext_instance: &ExtInstance) -> Result<Instance> {
    let radius = import_container_radius(&ext_instance.container)?;
    let region = BoundingRegion::centered(radius)?;

    let mut items = vec![];
    for (idx, ext_item) in ext_instance.items.iter().enumerate() {
        let radius =
            import_item_radius(ext_item).with_context(|| format!("invalid item {}", ext_item.id))?;
        let nested = match &ext_item.conductors {
            Some(ext_cond) => import_conductors(ext_cond)
                .with_context(|| format!("invalid conductors of item {}", ext_item.id))?,
            None => vec![],
        };
        let group = ext_item.group.unwrap_or(idx);
        for _ in 0..ext_item.demand {
            let item = Item::new(items.len(), radius)
                .with_nested(nested.iter().copied())
                .with_group(group);
            items.push(item);
        }
    }

    Instance::new(region, items)
        .with_context(|| format!("invalid instance '{}'", ext_instance.name))
}

/// For every [`Item`] created by [`import_instance`], the id of the [`ExtItem`] it stems from.
pub fn expanded_ext_ids(ext_instance: &ExtInstance) -> Vec<u64> {
    ext_instance
        .items
        .iter()
        .flat_map(|ext_item| std::iter::repeat_n(ext_item.id, ext_item.demand))
        .collect_vec()
}

pub fn import_container_radius(ext_container: &ExtContainer) -> Result<f64> {
    match (ext_container.radius, ext_container.area) {
        (Some(radius), _) => Ok(radius),
        (None, Some(area)) => {
            ensure!(
                area.is_finite() && area > 0.0,
                "container area must be positive, got {area}"
            );
            Ok(radius_from_area(area))
        }
        (None, None) => bail!("container has neither a radius nor an area"),
    }
}

/// Radius of an [`ExtItem`].
/// Without an explicit size, the item is approximated as the sum of the areas of its conductors.
/// Non-positive sizes are passed on, such items are dropped during placement.
pub fn import_item_radius(ext_item: &ExtItem) -> Result<f64> {
    let radius = match (ext_item.radius, ext_item.area) {
        (Some(radius), _) => radius,
        (None, Some(area)) => radius_from_area(area),
        (None, None) => match ext_item.conductors.as_ref().and_then(conductor_area) {
            Some(cond_area) => {
                let count = ext_item.conductors.as_ref().map_or(0, |c| c.count);
                warn!(
                    "item {} has no size, approximating it by the area of its {} conductors",
                    ext_item.id, count
                );
                radius_from_area(cond_area * count as f64)
            }
            None => bail!("item has neither a radius nor an area"),
        },
    };
    ensure!(radius.is_finite(), "item radius is not finite: {radius}");
    Ok(radius)
}

pub fn import_conductors(ext_cond: &ExtConductors) -> Result<Vec<NestedItem>> {
    let radius = match (ext_cond.radius, ext_cond.area) {
        (Some(radius), _) => Some(radius),
        (None, Some(area)) => Some(radius_from_area(area)),
        (None, None) => None,
    };
    if let Some(r) = radius {
        ensure!(r.is_finite(), "conductor radius is not finite: {r}");
    }
    Ok(vec![NestedItem { radius }; ext_cond.count])
}

fn conductor_area(ext_cond: &ExtConductors) -> Option<f64> {
    match (ext_cond.radius, ext_cond.area) {
        (Some(r), _) => Some(std::f64::consts::PI * r * r),
        (None, Some(area)) => Some(area),
        (None, None) => None,
    }
}

/// Non-positive areas map to a radius of 0.
fn radius_from_area(area: f64) -> f64 {
    crate::util::area_to_radius(area).unwrap_or(0.0)
}
