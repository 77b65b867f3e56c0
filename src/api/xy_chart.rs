use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{
    FluxTable, Interpolation, filter_noisy_columns, format_number, format_number_with_affixes,
    resolve_geom,
};
use crate::error::{VisError, VisResult};

use super::{
    AxisDomainBinding, DomainState, DomainUpdate, FillColumns, InvalidView, Layer, LineLayer,
    PaletteColor, PlotConfig, Resolution, TickFormatterFn, VisTheme, XyViewProperties,
    default_line_colors, resolve_color_hexes,
};

/// Implicit group key column naming the query a series came from.
pub const RESULT_COLUMN: &str = "result";

/// Static settings of an XY chart, supplied by the host application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct XyChartConfig {
    pub x_column: String,
    pub y_column: String,
    pub default_colors: Vec<PaletteColor>,
    pub theme: VisTheme,
}

impl Default for XyChartConfig {
    fn default() -> Self {
        Self {
            x_column: "_time".to_owned(),
            y_column: "_value".to_owned(),
            default_colors: default_line_colors(),
            theme: VisTheme::default(),
        }
    }
}

impl XyChartConfig {
    pub fn validate(self) -> VisResult<Self> {
        if self.x_column.is_empty() || self.y_column.is_empty() {
            return Err(VisError::InvalidConfig(
                "xy chart x and y columns must be non-empty".to_owned(),
            ));
        }
        if self.x_column == self.y_column {
            return Err(VisError::InvalidConfig(format!(
                "xy chart x and y columns must differ, both are `{}`",
                self.x_column
            )));
        }
        Ok(self)
    }

    pub fn from_json_str(input: &str) -> VisResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| VisError::InvalidJson(format!("failed to parse xy chart config: {e}")))?;
        config.validate()
    }
}

/// Line graph resolver. Owns the x and y domain state of one chart.
///
/// Call [`XyChart::resolve`] whenever the table or the view properties
/// change; interactive overrides made through the returned domain bindings
/// survive passes that leave the authoritative domains untouched.
#[derive(Debug)]
pub struct XyChart {
    config: XyChartConfig,
    x_domain: Rc<RefCell<DomainState>>,
    y_domain: Rc<RefCell<DomainState>>,
}

impl XyChart {
    pub fn new(config: XyChartConfig) -> VisResult<Self> {
        Ok(Self {
            config: config.validate()?,
            x_domain: Rc::default(),
            y_domain: Rc::default(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &XyChartConfig {
        &self.config
    }

    #[must_use]
    pub fn x_domain(&self) -> AxisDomainBinding {
        AxisDomainBinding::new(Rc::clone(&self.x_domain))
    }

    #[must_use]
    pub fn y_domain(&self) -> AxisDomainBinding {
        AxisDomainBinding::new(Rc::clone(&self.y_domain))
    }

    /// Runs one resolution pass.
    ///
    /// Domains are refreshed first, even when the view turns out invalid,
    /// so that a later valid pass starts from the latest data.
    pub fn resolve(&mut self, data: &FluxTable, properties: &XyViewProperties) -> Resolution {
        let table = &data.table;
        let x_column = self.config.x_column.as_str();
        let y_column = self.config.y_column.as_str();
        let axes = &properties.axes;

        let x_update = self
            .x_domain
            .borrow_mut()
            .update(axes.x.bounds.as_ref(), table.numeric_values(x_column));
        let y_update = self
            .y_domain
            .borrow_mut()
            .update(axes.y.bounds.as_ref(), table.numeric_values(y_column));

        let missing_columns: Vec<String> = [x_column, y_column]
            .into_iter()
            .filter(|column| !table.has_column(column))
            .map(str::to_owned)
            .collect();
        if !missing_columns.is_empty() {
            warn!(?missing_columns, "xy view is invalid for the current table");
            return Resolution::Invalid(InvalidView { missing_columns });
        }

        let fill: FillColumns = data
            .group_key_union
            .iter()
            .map(String::as_str)
            .chain([RESULT_COLUMN])
            .map(str::to_owned)
            .collect();
        let legend_candidates: Vec<&str> = fill
            .iter()
            .map(String::as_str)
            .chain([x_column, y_column])
            .collect();
        let legend_columns = filter_noisy_columns(&legend_candidates, table);

        let geom = resolve_geom(properties.geom);
        let colors = resolve_color_hexes(&properties.colors, &self.config.default_colors);

        debug!(
            rows = table.len(),
            ?geom,
            legend_columns = legend_columns.len(),
            x_resynced = x_update == DomainUpdate::Resynced,
            y_resynced = y_update == DomainUpdate::Resynced,
            "resolved xy view"
        );

        let x_is_time = table
            .column_data(x_column)
            .is_some_and(|column| column.is_time());
        let y_prefix = axes.y.prefix.clone();
        let y_suffix = axes.y.suffix.clone();
        let y_tick_formatter: TickFormatterFn =
            Arc::new(move |value| format_number_with_affixes(value, &y_prefix, &y_suffix));

        Resolution::Ready(PlotConfig {
            theme: self.config.theme.clone(),
            table: Arc::clone(table),
            x_axis_label: axes.x.label.clone(),
            y_axis_label: Some(axes.y.label.clone()),
            x_domain: self.x_domain(),
            y_domain: Some(self.y_domain()),
            x_tick_formatter: x_tick_formatter(x_is_time),
            y_tick_formatter: Some(y_tick_formatter),
            legend_columns: Some(legend_columns),
            layers: vec![Layer::Line(LineLayer {
                x: x_column.to_owned(),
                y: y_column.to_owned(),
                fill,
                interpolation: Interpolation::from_geom(geom),
                colors,
            })],
        })
    }

    /// Convenience for hosts driving interaction through the chart itself.
    pub fn reset_domains(&self) {
        self.x_domain.borrow_mut().reset_current();
        self.y_domain.borrow_mut().reset_current();
    }
}

fn x_tick_formatter(is_time: bool) -> TickFormatterFn {
    if is_time {
        return Arc::new(format_time_tick);
    }
    Arc::new(format_number)
}

/// Formats epoch milliseconds as a UTC timestamp.
#[must_use]
pub fn format_time_tick(epoch_millis: f64) -> String {
    if !epoch_millis.is_finite() {
        return format_number(epoch_millis);
    }
    match DateTime::<Utc>::from_timestamp_millis(epoch_millis.round() as i64) {
        Some(time) => time.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => format_number(epoch_millis),
    }
}
