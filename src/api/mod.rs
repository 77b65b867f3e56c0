mod domain_state;
mod histogram_chart;
mod plot_config;
mod theme;
mod view_properties;
mod xy_chart;

pub use domain_state::{AxisDomainBinding, DomainState, DomainUpdate, resolve_domain};
pub use histogram_chart::{HistogramChart, HistogramChartConfig};
pub use plot_config::{
    FillColumns, HistogramLayer, INVALID_DATA_COPY, InvalidView, Layer, LineLayer, PlotConfig,
    Resolution, TickFormatterFn,
};
pub use theme::{PaletteColor, VisTheme, default_line_colors, resolve_color_hexes};
pub use view_properties::{
    Axes, Axis, HistogramPosition, HistogramViewProperties, ViewColor, XyViewProperties,
};
pub use xy_chart::{RESULT_COLUMN, XyChart, XyChartConfig, format_time_tick};
