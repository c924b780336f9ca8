use thiserror::Error;

use crate::models::{TrendDirection, TrendResult};

/// The diagnostic looks at the three most recent fiscal years by default.
pub const DEFAULT_TREND_WINDOW: usize = 3;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TrendError {
    #[error("insufficient history: trend analysis needs at least 2 years, found {0}")]
    InsufficientHistory(usize),

    #[error("year-over-year change undefined: first value in the window is zero")]
    ZeroBaseline,
}

/// Compute YoY, CAGR and the regression slope over the trailing `window`
/// years of `(fiscal_year, value)` observations. Input ordering does not
/// matter; observations are sorted by year before the window is taken.
pub fn analyze(observations: &[(i32, f64)], window: usize) -> Result<TrendResult, TrendError> {
    let mut sorted = observations.to_vec();
    sorted.sort_by_key(|&(year, _)| year);

    let start = sorted.len().saturating_sub(window);
    let tail = &sorted[start..];
    if tail.len() < 2 {
        return Err(TrendError::InsufficientHistory(tail.len()));
    }

    let first = tail[0].1;
    let last = tail[tail.len() - 1].1;
    if first == 0.0 {
        return Err(TrendError::ZeroBaseline);
    }

    let yoy_pct = (last - first) / first * 100.0;

    // The compound-growth root is undefined (or complex) the moment any
    // value in the window is zero or negative.
    let cagr_pct = if tail.iter().all(|&(_, v)| v > 0.0) {
        let periods = (tail.len() - 1) as f64;
        Some(((last / first).powf(1.0 / periods) - 1.0) * 100.0)
    } else {
        None
    };

    let slope = ols_slope(tail);

    // Boundary contract: slope of exactly zero reads as Rising.
    let direction = if slope < 0.0 {
        TrendDirection::Falling
    } else {
        TrendDirection::Rising
    };

    Ok(TrendResult {
        years: tail.iter().map(|&(year, _)| year).collect(),
        values: tail.iter().map(|&(_, v)| v).collect(),
        yoy_pct,
        cagr_pct,
        slope,
        direction,
    })
}

/// Closed-form ordinary-least-squares slope of value on fiscal year. The
/// year itself is the regressor, so irregular gaps between observed years
/// are respected.
fn ols_slope(points: &[(i32, f64)]) -> f64 {
    let n = points.len() as f64;

    let (sum_x, sum_y, sum_xy, sum_x2) =
        points
            .iter()
            .fold((0.0, 0.0, 0.0, 0.0), |(sx, sy, sxy, sx2), &(year, v)| {
                let x = year as f64;
                (sx + x, sy + v, sxy + x * v, sx2 + x * x)
            });

    let denom = n * sum_x2 - sum_x * sum_x;
    if denom == 0.0 {
        return 0.0;
    }
    (n * sum_xy - sum_x * sum_y) / denom
}
