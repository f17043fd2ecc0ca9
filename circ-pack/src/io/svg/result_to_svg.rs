use itertools::Itertools;
use svg::Document;
use svg::node::element::{ClipPath, Definitions, Group, Text, Title};

use crate::entities::{PlacementMode, PlacementResult};
use crate::geometry::geo_traits::CollidesWith;
use crate::geometry::primitives::Point;
use crate::io::svg::svg_util;
use crate::io::svg::svg_util::SvgDrawOptions;

/// Number of hatch lines drawn across the diameter of the region
const N_HATCH_LINES: usize = 24;

/// Printed below the region (and as the title of the hatch) whenever the hatch is drawn
pub const OVERFILL_NOTE: &str = "Red hatching indicates the conduit is over-packed";

pub fn result_to_svg(result: &PlacementResult, options: SvgDrawOptions, title: &str) -> Document {
    let region = &result.region;
    let theme = &options.theme;

    let (cx, cy): (f64, f64) = region.center.into();
    let r = region.radius;
    let vbox_r = r * 1.10;
    let vbox = (cx - vbox_r, cy - vbox_r, 2.0 * vbox_r, 2.0 * vbox_r);

    let stroke_width = 2.0 * vbox_r * 0.001 * theme.stroke_width_multiplier;

    let over_filled = options.overfill_hatch || result.mode == PlacementMode::OverlapAllowed;

    let label = options.label.then(|| {
        //print some information above the left top of the region
        let font_size = 2.0 * r * 0.025;
        let label_content = format!(
            "radius: {:.3} | extent: {:.3} | density: {:.3}% | placed: {}/{} | {} | {}",
            r,
            result.max_extent(),
            result.density() * 100.0,
            result.n_placed(),
            result.n_placed() + result.n_unplaced() + result.n_dropped(),
            result.mode,
            title,
        );
        let text = Text::new(label_content)
            .set("x", cx - r)
            .set("y", cy - r - 0.5 * font_size)
            .set("font-size", font_size)
            .set("font-family", "monospace")
            .set("font-weight", "500");
        let note = over_filled.then(|| {
            Text::new(OVERFILL_NOTE)
                .set("x", cx - r)
                .set("y", cy + r + 1.5 * font_size)
                .set("font-size", 0.8 * font_size)
                .set("font-family", "monospace")
                .set("fill", format!("{}", theme.hatch_color))
        });
        [Some(text), note]
            .into_iter()
            .flatten()
            .fold(Group::new().set("id", "label"), |g, t| g.add(t))
    });

    //draw region
    let region_group = Group::new()
        .set("id", "region")
        .add(Title::new(format!(
            "region, radius: {:.3}, center: ({:.3}, {:.3})",
            r, cx, cy
        )))
        .add(svg_util::circle(
            region.circle(),
            &[
                ("fill", &*format!("{}", theme.region_fill)),
                ("stroke", &*format!("{}", theme.region_stroke)),
                ("stroke-width", &*format!("{}", 2.0 * stroke_width)),
            ],
        ));

    //draw items
    let items_group = {
        let mut items_group = Group::new().set("id", "items");
        for pi in &result.placed_items {
            let color = theme.group_color(pi.group);
            let title = Title::new(format!(
                "item {}, radius: {:.3}, center: ({:.3}, {:.3})",
                pi.item_id,
                pi.radius(),
                pi.center().0,
                pi.center().1
            ));
            let mut item_group = Group::new()
                .set("id", format!("item_{}", pi.item_id))
                .add(title)
                .add(svg_util::circle(
                    pi.circle,
                    &[
                        ("fill", &*format!("{color}")),
                        ("fill-opacity", &*format!("{}", theme.item_fill_opac)),
                        (
                            "stroke",
                            &*format!("{}", svg_util::change_brightness(color, 0.5)),
                        ),
                        ("stroke-width", &*format!("{stroke_width}")),
                    ],
                ));
            if let (true, Some(nested)) = (options.nested, &pi.nested) {
                for npi in &nested.result.placed_items {
                    item_group = item_group.add(svg_util::circle(
                        npi.circle,
                        &[
                            ("fill", &*format!("{}", theme.nested_fill)),
                            ("stroke", "none"),
                        ],
                    ));
                }
            }
            items_group = items_group.add(item_group);
        }
        items_group
    };

    //hatch the region to signal an over-filled layout
    let hatch_group = match over_filled {
        false => None,
        true => {
            let clip = ClipPath::new()
                .set("id", "region_clip")
                .add(svg_util::circle(region.circle(), &[]));
            let step = 2.0 * r / N_HATCH_LINES as f64;
            let hatch_style = [
                ("stroke", &*format!("{}", theme.hatch_color)),
                ("stroke-opacity", "0.35"),
                ("stroke-width", &*format!("{}", 1.5 * stroke_width)),
            ];
            //diagonal lines covering the bounding square of the region
            let lines = (0..=2 * N_HATCH_LINES)
                .map(|i| {
                    let offset = i as f64 * step - 2.0 * r;
                    let start = Point(cx - r + offset, cy + r);
                    let end = Point(cx + r + offset, cy - r);
                    svg_util::data_to_path(svg_util::edge_data(start, end), &hatch_style)
                })
                .fold(Group::new().set("clip-path", "url(#region_clip)"), |g, l| {
                    g.add(l)
                });
            Some(
                Group::new()
                    .set("id", "overfill_hatch")
                    .add(Title::new(OVERFILL_NOTE))
                    .add(Definitions::new().add(clip))
                    .add(lines),
            )
        }
    };

    //highlight colliding items (if enabled)
    let collision_group = match options.highlight_collisions {
        false => None,
        true => {
            let collision_lines = result
                .placed_items
                .iter()
                .tuple_combinations()
                .filter(|(pi1, pi2)| pi1.circle.collides_with(&pi2.circle))
                .map(|(pi1, pi2)| {
                    svg_util::data_to_path(
                        svg_util::edge_data(pi1.center(), pi2.center()),
                        &[
                            ("stroke", &*format!("{}", theme.collision_highlight_color)),
                            ("stroke-opacity", "0.75"),
                            ("stroke-width", &*format!("{}", stroke_width * 4.0)),
                            (
                                "stroke-dasharray",
                                &*format!("{} {}", 4.0 * stroke_width, 8.0 * stroke_width),
                            ),
                            ("stroke-linecap", "round"),
                            ("stroke-linejoin", "round"),
                        ],
                    )
                })
                .fold(Group::new().set("id", "collision_lines"), |g, l| g.add(l));
            Some(collision_lines)
        }
    };

    let optionals = [hatch_group, collision_group]
        .into_iter()
        .flatten()
        .fold(Group::new().set("id", "optionals"), |g, opt| g.add(opt));

    let document = Document::new()
        .set("viewBox", vbox)
        .add(region_group)
        .add(items_group)
        .add(optionals);

    match label {
        Some(label) => document.add(label),
        None => document,
    }
}
