use serde::{Deserialize, Serialize};

/// Binary reading of the regression slope. A slope of exactly zero is
/// reported as `Rising`; downstream wording treats it as flat, but the
/// classification contract is "falling if slope < 0, else rising".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Rising,
    Falling,
}

/// Trend indicators over the trailing window of a company's metric.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendResult {
    /// Fiscal years inside the analysis window, ascending.
    pub years: Vec<i32>,
    pub values: Vec<f64>,

    /// Percent change between the first and last value in the window.
    pub yoy_pct: f64,

    /// Compound annual growth rate, percent. `None` whenever any value in
    /// the window is zero or negative (the compound root is undefined).
    pub cagr_pct: Option<f64>,

    /// OLS regression slope of value on fiscal year (metric units per year).
    pub slope: f64,

    pub direction: TrendDirection,
}
