//! vis-resolver: turns stored view settings and query tables into
//! renderer-agnostic plot configurations.
//!
//! `core` holds the pure building blocks (number formatting, bounds parsing,
//! extents, legend filtering, geometry). `api` holds the stateful chart
//! resolvers that combine them and own interactive domain overrides.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{HistogramChart, PlotConfig, Resolution, XyChart, XyChartConfig};
pub use error::{VisError, VisResult};
