use serde::{Deserialize, Serialize};

/// Numeric `(min, max)` range used to scale an axis.
///
/// An "undefined" domain (nothing to show, let the renderer auto-scale) is
/// modelled as `Option<Domain>::None` by callers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Domain {
    pub min: f64,
    pub max: f64,
}

impl Domain {
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Returns the domain when both ends are finite.
    #[must_use]
    pub fn finite(min: f64, max: f64) -> Option<Self> {
        (min.is_finite() && max.is_finite()).then_some(Self { min, max })
    }

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

impl From<[f64; 2]> for Domain {
    fn from([min, max]: [f64; 2]) -> Self {
        Self { min, max }
    }
}

impl From<Domain> for [f64; 2] {
    fn from(domain: Domain) -> Self {
        [domain.min, domain.max]
    }
}

impl From<(f64, f64)> for Domain {
    fn from((min, max): (f64, f64)) -> Self {
        Self { min, max }
    }
}

/// Spans every finite value in `values`.
///
/// Non-finite samples are skipped. Returns `None` when nothing finite
/// remains, including for an empty slice.
#[must_use]
pub fn extent(values: &[f64]) -> Option<Domain> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut seen = false;

    for &value in values {
        if !value.is_finite() {
            continue;
        }
        seen = true;
        min = min.min(value);
        max = max.max(value);
    }

    seen.then_some(Domain { min, max })
}
