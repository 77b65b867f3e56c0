use serde::{Deserialize, Serialize};

use crate::core::{Domain, RawBounds, XyGeom};
use crate::error::{VisError, VisResult};

/// Color entry as stored in a cell's view properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ViewColor {
    pub id: String,
    #[serde(rename = "type")]
    pub color_type: String,
    pub hex: String,
    pub name: String,
    pub value: f64,
}

impl ViewColor {
    #[must_use]
    pub fn from_hex(hex: impl Into<String>) -> Self {
        Self {
            color_type: "scale".to_owned(),
            hex: hex.into(),
            ..Self::default()
        }
    }
}

/// Stored settings of one axis.
///
/// `bounds` holds the raw declared min/max strings; see
/// [`parse_bounds`](crate::core::parse_bounds) for how they resolve.
/// `prefix` and `suffix` are only read for the y axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Axis {
    pub label: String,
    pub bounds: Option<RawBounds>,
    pub prefix: String,
    pub suffix: String,
    pub base: String,
    pub scale: String,
}

impl Axis {
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    #[must_use]
    pub fn with_bounds(mut self, min: &str, max: &str) -> Self {
        self.bounds = Some([Some(min.to_owned()), Some(max.to_owned())]);
        self
    }

    #[must_use]
    pub fn with_affixes(mut self, prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self.suffix = suffix.into();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Axes {
    pub x: Axis,
    pub y: Axis,
}

/// Persisted properties of a line graph cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct XyViewProperties {
    pub geom: XyGeom,
    pub colors: Vec<ViewColor>,
    pub axes: Axes,
}

impl XyViewProperties {
    pub fn from_json_str(input: &str) -> VisResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| VisError::InvalidJson(format!("failed to parse xy view properties: {e}")))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HistogramPosition {
    #[default]
    Stacked,
    Overlaid,
}

/// Persisted properties of a histogram cell.
///
/// Unlike line graphs, the x domain is stored directly as numbers and is
/// not derived from the data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HistogramViewProperties {
    pub x_column: String,
    pub fill_columns: Vec<String>,
    pub bin_count: u32,
    pub position: HistogramPosition,
    pub colors: Vec<ViewColor>,
    pub x_axis_label: String,
    pub x_domain: Option<Domain>,
}

impl Default for HistogramViewProperties {
    fn default() -> Self {
        Self {
            x_column: "_value".to_owned(),
            fill_columns: Vec::new(),
            bin_count: 30,
            position: HistogramPosition::Stacked,
            colors: Vec::new(),
            x_axis_label: String::new(),
            x_domain: None,
        }
    }
}

impl HistogramViewProperties {
    pub fn from_json_str(input: &str) -> VisResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            VisError::InvalidJson(format!("failed to parse histogram view properties: {e}"))
        })
    }
}
