use crate::models::{Metric, TrendResult};

/// Build the human-readable trend sentence attached to a classification.
///
/// Direction wording comes from the slope sign (with a "flat" rendering at
/// exactly zero), intensity from the |CAGR| bands: >= 10 pronounced, >= 3
/// moderate, otherwise slight. An undefined CAGR reads as a variable pace.
pub fn trend_sentence(company: &str, sector: &str, metric: Metric, trend: &TrendResult) -> String {
    let unit = metric.unit();
    let slope_unit = if unit.is_empty() {
        "per year".to_string()
    } else {
        format!("{} per year", unit)
    };

    let direction_txt = if trend.slope > 0.0 {
        format!("a rising trend (linear regression = {:.2} {})", trend.slope, slope_unit)
    } else if trend.slope < 0.0 {
        format!("a falling trend (linear regression = {:.2} {})", trend.slope, slope_unit)
    } else {
        format!("a flat trend (linear regression = {:.2} {})", trend.slope, slope_unit)
    };

    let (intensity, cagr_txt) = match trend.cagr_pct {
        Some(cagr) => {
            let intensity = if cagr.abs() >= 10.0 {
                "at a pronounced pace"
            } else if cagr.abs() >= 3.0 {
                "at a moderate pace"
            } else {
                "at a slight pace"
            };
            (intensity, format!("{:.2}%", cagr))
        }
        None => (
            "at a variable pace",
            "n/a (negative or zero values in the window)".to_string(),
        ),
    };

    let first_year = trend.years.first().copied().unwrap_or_default();
    let last_year = trend.years.last().copied().unwrap_or_default();

    format!(
        "At {company}, representing the {sector} sector, {metric} showed {direction} {intensity} over the last {span} years ({first}-{last}). Period CAGR was {cagr}, and the cumulative change (YoY) was {yoy:.2}%.",
        company = company,
        sector = sector.to_uppercase(),
        metric = metric.display_name().to_uppercase(),
        direction = direction_txt,
        intensity = intensity,
        span = trend.years.len(),
        first = first_year,
        last = last_year,
        cagr = cagr_txt,
        yoy = trend.yoy_pct,
    )
}
