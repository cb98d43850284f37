use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// KPI Sentinel
// ============================================================================

/// A KPI that is either a finite value or explicitly undefined.
///
/// Undefined never surfaces as NaN or infinity; it serializes to JSON
/// `null` and renders as a dash, so reporting consumers need no
/// NaN-aware comparisons.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Kpi {
    Value(f64),
    NoData,
}

impl Kpi {
    /// Build from a numerator/denominator pair, undefined when the
    /// denominator cannot support a ratio.
    pub fn ratio(numerator: f64, denominator: f64) -> Self {
        if denominator > 0.0 {
            Self::Value(numerator / denominator)
        } else {
            Self::NoData
        }
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Value(v) => Some(*v),
            Self::NoData => None,
        }
    }

    pub fn is_defined(&self) -> bool {
        matches!(self, Self::Value(_))
    }
}

impl From<Option<f64>> for Kpi {
    fn from(value: Option<f64>) -> Self {
        match value {
            Some(v) => Self::Value(v),
            None => Self::NoData,
        }
    }
}

impl fmt::Display for Kpi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(v) => write!(f, "{v:.2}"),
            Self::NoData => write!(f, "-"),
        }
    }
}

// ============================================================================
// Forecast Output Types
// ============================================================================

/// Projected output for one future day, aggregated across flocks.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ForecastPoint {
    pub date: NaiveDate,

    /// Estimate adjusted by each flock's performance factor.
    pub projected_total: f64,

    /// Unadjusted baseline estimate from the standard curve alone.
    pub standard_total: f64,
}

/// A full forward projection: one point per day, ordered by date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct YieldForecast {
    /// Reference date the projection was computed from.
    pub generated_on: NaiveDate,

    pub points: Vec<ForecastPoint>,
}

impl YieldForecast {
    pub fn new(generated_on: NaiveDate, points: Vec<ForecastPoint>) -> Self {
        Self {
            generated_on,
            points,
        }
    }

    /// Total adjusted eggs expected over the horizon.
    pub fn cumulative_yield(&self) -> f64 {
        self.points.iter().map(|p| p.projected_total).sum()
    }

    /// Total baseline eggs expected over the horizon.
    pub fn cumulative_standard_yield(&self) -> f64 {
        self.points.iter().map(|p| p.standard_total).sum()
    }

    pub fn horizon_days(&self) -> usize {
        self.points.len()
    }

    /// The projection for a specific date, if inside the horizon.
    pub fn point_on(&self, date: NaiveDate) -> Option<&ForecastPoint> {
        self.points.iter().find(|p| p.date == date)
    }

    /// The day with the highest projected output.
    pub fn peak_day(&self) -> Option<&ForecastPoint> {
        self.points
            .iter()
            .max_by(|a, b| a.projected_total.total_cmp(&b.projected_total))
    }
}
