use serde::{Deserialize, Serialize};

/// Persisted geometry of an XY view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum XyGeom {
    #[default]
    Line,
    Step,
    Bar,
    Stacked,
}

/// Maps a stored geometry to one the line layer can draw.
///
/// Only `Line` and `Step` are drawable; `Bar` and `Stacked` are still
/// accepted in persisted views and render as lines.
#[must_use]
pub fn resolve_geom(geom: XyGeom) -> XyGeom {
    match geom {
        XyGeom::Step => XyGeom::Step,
        XyGeom::Line | XyGeom::Bar | XyGeom::Stacked => XyGeom::Line,
    }
}

/// Curve interpolation handed to the line layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Interpolation {
    Linear,
    MonotoneX,
    Step,
}

impl Interpolation {
    /// Interpolation for a stored geometry, after [`resolve_geom`].
    #[must_use]
    pub fn from_geom(geom: XyGeom) -> Self {
        match resolve_geom(geom) {
            XyGeom::Step => Self::Step,
            _ => Self::MonotoneX,
        }
    }
}
