use serde::{Deserialize, Serialize};
use svg::node::element::Rectangle;

use crate::geometry::Rect;
use crate::io::theme::Theme;

#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct SvgDrawOptions {
    #[serde(default)]
    pub theme: Theme,
    /// Width of the view box in px
    pub view_width: f64,
    /// Height of the drawing area in px (excluding the details block)
    pub view_height: f64,
    /// Minimum distance between the sheet and the border of the view box
    pub padding: f64,
    /// Adds pieces, layout and efficiency below the drawing
    #[serde(default)]
    pub details: bool,
    /// Grids with more pieces are drawn as a single block instead of one rectangle per piece
    #[serde(default = "default_max_drawn_cells")]
    pub max_drawn_cells: usize,
}

fn default_max_drawn_cells() -> usize {
    10_000
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            view_width: 400.0,
            view_height: 300.0,
            padding: 20.0,
            details: true,
            max_drawn_cells: default_max_drawn_cells(),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SvgLayoutTheme {
    pub background: &'static str,
    pub sheet_fill: &'static str,
    pub sheet_stroke: &'static str,
    pub gripper_fill: &'static str,
    pub gripper_stroke: &'static str,
    pub usable_fill: &'static str,
    pub usable_stroke: &'static str,
    pub item_fill: &'static str,
    pub item_stroke: &'static str,
    pub item_opacity: f64,
    pub text_fill: &'static str,
    pub text_muted: &'static str,
}

impl From<Theme> for SvgLayoutTheme {
    fn from(theme: Theme) -> Self {
        match theme {
            Theme::Light => LIGHT_THEME,
            Theme::Dark => DARK_THEME,
        }
    }
}

pub static LIGHT_THEME: SvgLayoutTheme = SvgLayoutTheme {
    background: "#FFFFFF",
    sheet_fill: "#DBEAFE",
    sheet_stroke: "#1D4ED8",
    gripper_fill: "#FECACA",
    gripper_stroke: "#B91C1C",
    usable_fill: "#E5E7EB",
    usable_stroke: "#6B7280",
    item_fill: "#1D4ED8",
    item_stroke: "#1E3A8A",
    item_opacity: 0.6,
    text_fill: "#111827",
    text_muted: "#6B7280",
};

pub static DARK_THEME: SvgLayoutTheme = SvgLayoutTheme {
    background: "#111827",
    sheet_fill: "#1E293B",
    sheet_stroke: "#60A5FA",
    gripper_fill: "#7F1D1D",
    gripper_stroke: "#F87171",
    usable_fill: "#374151",
    usable_stroke: "#9CA3AF",
    item_fill: "#3B82F6",
    item_stroke: "#BFDBFE",
    item_opacity: 0.7,
    text_fill: "#F9FAFB",
    text_muted: "#9CA3AF",
};

pub fn rect_to_svg(rect: &Rect, params: &[(&str, &str)]) -> Rectangle {
    let mut svg_rect = Rectangle::new()
        .set("x", rect.x_min)
        .set("y", rect.y_min)
        .set("width", rect.width())
        .set("height", rect.height());
    for param in params {
        svg_rect = svg_rect.set(param.0, param.1)
    }
    svg_rect
}
