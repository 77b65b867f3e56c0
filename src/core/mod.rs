pub mod bounds;
pub mod domain;
pub mod geometry;
pub mod legend;
pub mod number_format;
pub mod table;

pub use bounds::{RawBounds, coerce_number, parse_bounds};
pub use domain::{Domain, extent};
pub use geometry::{Interpolation, XyGeom, resolve_geom};
pub use legend::{NOISY_LEGEND_COLUMNS, filter_noisy_columns, is_noisy_legend_column};
pub use number_format::{format_number, format_number_with_affixes};
pub use table::{Column, ColumnData, FluxTable, Table, TableBuilder};
