use serde::{Deserialize, Serialize};

use super::ViewColor;

/// Named palette entry supplied by the host application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteColor {
    pub name: String,
    pub hex: String,
}

impl PaletteColor {
    #[must_use]
    pub fn new(name: impl Into<String>, hex: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hex: hex.into(),
        }
    }
}

/// Palette used when a view declares no colors.
#[must_use]
pub fn default_line_colors() -> Vec<PaletteColor> {
    vec![
        PaletteColor::new("Nineteen Eighty Four", "#31C0F6"),
        PaletteColor::new("Nineteen Eighty Four", "#A500A5"),
        PaletteColor::new("Nineteen Eighty Four", "#FF7E27"),
    ]
}

/// Declared color hexes in order, or the fallback palette when none are
/// declared.
#[must_use]
pub fn resolve_color_hexes(declared: &[ViewColor], fallback: &[PaletteColor]) -> Vec<String> {
    if declared.is_empty() {
        fallback.iter().map(|color| color.hex.clone()).collect()
    } else {
        declared.iter().map(|color| color.hex.clone()).collect()
    }
}

/// Shared visual settings merged into every resolved plot configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VisTheme {
    pub axis_color: String,
    pub grid_color: String,
    pub grid_opacity: f64,
    pub tick_font: String,
    pub tick_font_color: String,
    pub legend_font: String,
    pub legend_font_color: String,
    pub legend_font_bright_color: String,
    pub legend_background_color: String,
    pub legend_border: String,
    pub legend_crosshair_color: String,
}

impl Default for VisTheme {
    fn default() -> Self {
        Self {
            axis_color: "#31313d".to_owned(),
            grid_color: "#31313d".to_owned(),
            grid_opacity: 1.0,
            tick_font: "bold 10px Roboto".to_owned(),
            tick_font_color: "#c6cad3".to_owned(),
            legend_font: "12px Roboto".to_owned(),
            legend_font_color: "#8e91a1".to_owned(),
            legend_font_bright_color: "#c6cad3".to_owned(),
            legend_background_color: "#1c1c21".to_owned(),
            legend_border: "1px solid #202028".to_owned(),
            legend_crosshair_color: "#31313d".to_owned(),
        }
    }
}
