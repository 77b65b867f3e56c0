use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Interpolation, Table};

use super::{AxisDomainBinding, HistogramPosition, VisTheme};

pub type TickFormatterFn = Arc<dyn Fn(f64) -> String + Send + Sync + 'static>;

/// Grouping columns of a layer; most series are keyed by a handful of tags.
pub type FillColumns = SmallVec<[String; 4]>;

/// Message shown in place of a chart whose data lacks required columns.
pub const INVALID_DATA_COPY: &str =
    "The data returned from the query can't be visualized with this graph type.\n\
     Try updating the query or selecting a different graph type.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineLayer {
    pub x: String,
    pub y: String,
    pub fill: FillColumns,
    pub interpolation: Interpolation,
    pub colors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistogramLayer {
    pub x: String,
    pub fill: FillColumns,
    pub bin_count: u32,
    pub position: HistogramPosition,
    pub colors: Vec<String>,
}

/// Layer descriptor consumed by the rendering surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Layer {
    Line(LineLayer),
    Histogram(HistogramLayer),
}

/// Renderable configuration produced by one resolution pass.
///
/// Built fresh on every pass and never persisted. Domain bindings stay
/// connected to the chart that produced them.
#[derive(Clone)]
pub struct PlotConfig {
    pub theme: VisTheme,
    pub table: Arc<Table>,
    pub x_axis_label: String,
    pub y_axis_label: Option<String>,
    pub x_domain: AxisDomainBinding,
    pub y_domain: Option<AxisDomainBinding>,
    pub x_tick_formatter: TickFormatterFn,
    pub y_tick_formatter: Option<TickFormatterFn>,
    /// `None` leaves legend columns to the renderer.
    pub legend_columns: Option<Vec<String>>,
    pub layers: Vec<Layer>,
}

impl PlotConfig {
    #[must_use]
    pub fn format_x_tick(&self, value: f64) -> String {
        (self.x_tick_formatter)(value)
    }

    #[must_use]
    pub fn format_y_tick(&self, value: f64) -> Option<String> {
        self.y_tick_formatter.as_ref().map(|formatter| formatter(value))
    }
}

impl fmt::Debug for PlotConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlotConfig")
            .field("table_rows", &self.table.len())
            .field("x_axis_label", &self.x_axis_label)
            .field("y_axis_label", &self.y_axis_label)
            .field("x_domain", &self.x_domain.domain())
            .field(
                "y_domain",
                &self.y_domain.as_ref().map(AxisDomainBinding::domain),
            )
            .field("legend_columns", &self.legend_columns)
            .field("layers", &self.layers)
            .finish_non_exhaustive()
    }
}

/// Why a view cannot be drawn for the current data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvalidView {
    pub missing_columns: Vec<String>,
}

impl InvalidView {
    #[must_use]
    pub fn message(&self) -> &'static str {
        INVALID_DATA_COPY
    }
}

/// Result of a resolution pass: a renderable configuration, or the
/// invalid-data sentinel.
#[derive(Debug, Clone)]
pub enum Resolution {
    Ready(PlotConfig),
    Invalid(InvalidView),
}

impl Resolution {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    #[must_use]
    pub fn config(&self) -> Option<&PlotConfig> {
        match self {
            Self::Ready(config) => Some(config),
            Self::Invalid(_) => None,
        }
    }

    #[must_use]
    pub fn into_config(self) -> Option<PlotConfig> {
        match self {
            Self::Ready(config) => Some(config),
            Self::Invalid(_) => None,
        }
    }

    #[must_use]
    pub fn invalid(&self) -> Option<&InvalidView> {
        match self {
            Self::Invalid(invalid) => Some(invalid),
            Self::Ready(_) => None,
        }
    }
}
