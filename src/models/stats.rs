use serde::{Deserialize, Serialize};

/// Descriptive summary of one metric series.
///
/// Percentage-valued metrics keep their unit here (e.g. 10.5 for 10.5%).
/// Invariant: `q1 <= median <= q3` and `iqr = q3 - q1 >= 0`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatSummary {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,

    /// Population standard deviation (no Bessel correction).
    pub std_dev: f64,

    /// 25th percentile (linear interpolation), the historical floor.
    pub q1: f64,

    /// 75th percentile (linear interpolation), the historical ceiling.
    pub q3: f64,

    pub iqr: f64,

    /// Fisher-Pearson skewness, population estimator (third standardized moment).
    pub skewness: f64,
}
