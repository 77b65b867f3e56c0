use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{Table, format_number};
use crate::error::{VisError, VisResult};

use super::{
    AxisDomainBinding, DomainState, HistogramLayer, HistogramViewProperties, InvalidView, Layer,
    PaletteColor, PlotConfig, Resolution, VisTheme, default_line_colors, resolve_color_hexes,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HistogramChartConfig {
    pub default_colors: Vec<PaletteColor>,
    pub theme: VisTheme,
}

impl Default for HistogramChartConfig {
    fn default() -> Self {
        Self {
            default_colors: default_line_colors(),
            theme: VisTheme::default(),
        }
    }
}

impl HistogramChartConfig {
    pub fn from_json_str(input: &str) -> VisResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            VisError::InvalidJson(format!("failed to parse histogram chart config: {e}"))
        })
    }
}

/// Histogram resolver. The x domain comes straight from the stored view
/// properties and is overridable like an XY axis domain.
#[derive(Debug, Default)]
pub struct HistogramChart {
    config: HistogramChartConfig,
    x_domain: Rc<RefCell<DomainState>>,
}

impl HistogramChart {
    #[must_use]
    pub fn new(config: HistogramChartConfig) -> Self {
        Self {
            config,
            x_domain: Rc::default(),
        }
    }

    #[must_use]
    pub fn x_domain(&self) -> AxisDomainBinding {
        AxisDomainBinding::new(Rc::clone(&self.x_domain))
    }

    pub fn resolve(
        &mut self,
        table: &Arc<Table>,
        properties: &HistogramViewProperties,
    ) -> Resolution {
        self.x_domain
            .borrow_mut()
            .update_authoritative(properties.x_domain);

        let missing_columns = missing_histogram_columns(table, properties);
        if !missing_columns.is_empty() {
            warn!(?missing_columns, "histogram view is invalid for the current table");
            return Resolution::Invalid(InvalidView { missing_columns });
        }

        debug!(
            rows = table.len(),
            x_column = %properties.x_column,
            fill_columns = properties.fill_columns.len(),
            bin_count = properties.bin_count,
            "resolved histogram view"
        );

        Resolution::Ready(PlotConfig {
            theme: self.config.theme.clone(),
            table: Arc::clone(table),
            x_axis_label: properties.x_axis_label.clone(),
            y_axis_label: None,
            x_domain: self.x_domain(),
            y_domain: None,
            x_tick_formatter: Arc::new(format_number),
            y_tick_formatter: None,
            legend_columns: None,
            layers: vec![Layer::Histogram(HistogramLayer {
                x: properties.x_column.clone(),
                fill: properties.fill_columns.iter().cloned().collect(),
                bin_count: properties.bin_count,
                position: properties.position,
                colors: resolve_color_hexes(&properties.colors, &self.config.default_colors),
            })],
        })
    }
}

fn missing_histogram_columns(table: &Table, properties: &HistogramViewProperties) -> Vec<String> {
    let mut missing = Vec::new();
    if properties.x_column.is_empty() || !table.has_column(&properties.x_column) {
        missing.push(properties.x_column.clone());
    }
    missing.extend(
        properties
            .fill_columns
            .iter()
            .filter(|column| !table.has_column(column))
            .cloned(),
    );
    missing
}
