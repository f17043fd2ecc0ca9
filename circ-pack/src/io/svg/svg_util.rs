use std::fmt::{Display, Formatter};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use svg::node::element::path::Data;
use svg::node::element::{Circle, Path};

use crate::geometry;
use crate::geometry::primitives::Point;

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgDrawOptions {
    ///The theme to use for the svg
    #[serde(default)]
    pub theme: SvgLayoutTheme,
    ///Draw the nested items (conductors) inside their parents
    #[serde(default = "default_true")]
    pub nested: bool,
    ///Cover the region with a red hatch, signaling the region is over-filled
    #[serde(default)]
    pub overfill_hatch: bool,
    ///Draw dashed lines between overlapping items
    #[serde(default)]
    pub highlight_collisions: bool,
    ///Print a label with statistics above the region
    #[serde(default = "default_true")]
    pub label: bool,
}

fn default_true() -> bool {
    true
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            theme: SvgLayoutTheme::default(),
            nested: true,
            overfill_hatch: false,
            highlight_collisions: true,
            label: true,
        }
    }
}

pub const N_GROUP_COLORS: usize = 7;

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgLayoutTheme {
    pub stroke_width_multiplier: f64,
    pub region_fill: Color,
    pub region_stroke: Color,
    /// Fill of the items, cycled through by group
    pub group_fill: [Color; N_GROUP_COLORS],
    pub item_fill_opac: f64,
    pub nested_fill: Color,
    pub hatch_color: Color,
    pub collision_highlight_color: Color,
}

impl Default for SvgLayoutTheme {
    fn default() -> Self {
        SvgLayoutTheme::CONDUIT
    }
}

impl SvgLayoutTheme {
    pub const CONDUIT: SvgLayoutTheme = SvgLayoutTheme {
        stroke_width_multiplier: 2.0,
        region_fill: Color(0xF8, 0xF8, 0xF8),
        region_stroke: Color(0x22, 0x22, 0x22),
        group_fill: [
            Color(0x5B, 0x8F, 0xF9), // BLUE
            Color(0x61, 0xDD, 0xAA), // GREEN
            Color(0xF6, 0xBD, 0x16), // YELLOW
            Color(0xE8, 0x68, 0x4A), // RED
            Color(0x92, 0x70, 0xCA), // PURPLE
            Color(0x6D, 0xC8, 0xEC), // LIGHT BLUE
            Color(0xFF, 0x9D, 0x4D), // ORANGE
        ],
        item_fill_opac: 0.55,
        nested_fill: Color(0x00, 0x00, 0x00),
        hatch_color: Color(0xCC, 0x00, 0x00),
        collision_highlight_color: Color(0x00, 0xFF, 0x00), // LIME
    };

    pub const GRAY: SvgLayoutTheme = SvgLayoutTheme {
        stroke_width_multiplier: 2.5,
        region_fill: Color(0xFF, 0xFF, 0xFF),
        region_stroke: Color(0x00, 0x00, 0x00),
        group_fill: [Color(0x8F, 0x8F, 0x8F); N_GROUP_COLORS],
        item_fill_opac: 0.8,
        nested_fill: Color(0x2D, 0x2D, 0x2D),
        hatch_color: Color(0x63, 0x63, 0x63),
        collision_highlight_color: Color(0xD0, 0x00, 0x00),
    };

    pub fn group_color(&self, group: Option<usize>) -> Color {
        self.group_fill[group.unwrap_or(0) % N_GROUP_COLORS]
    }
}

pub fn change_brightness(color: Color, fraction: f64) -> Color {
    let Color(r, g, b) = color;

    let r = (r as f64 * fraction) as u8;
    let g = (g as f64 * fraction) as u8;
    let b = (b as f64 * fraction) as u8;
    Color(r, g, b)
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Color(pub u8, pub u8, pub u8);

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl TryFrom<&str> for Color {
    type Error = anyhow::Error;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        anyhow::ensure!(hex.len() == 6 && hex.is_ascii(), "invalid color: {s}");
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16);
        Ok(Color(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{self}"))
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Color::try_from(s.as_str()).map_err(serde::de::Error::custom)
    }
}

pub fn data_to_path(data: Data, params: &[(&str, &str)]) -> Path {
    let mut path = Path::new();
    for param in params {
        path = path.set(param.0, param.1)
    }
    path.set("d", data)
}

pub fn circle(circle: geometry::primitives::Circle, params: &[(&str, &str)]) -> Circle {
    let mut circle = Circle::new()
        .set("cx", circle.center.0)
        .set("cy", circle.center.1)
        .set("r", circle.radius);
    for param in params {
        circle = circle.set(param.0, param.1)
    }
    circle
}

pub fn edge_data(start: Point, end: Point) -> Data {
    Data::new()
        .move_to((start.0, start.1))
        .line_to((end.0, end.1))
}
