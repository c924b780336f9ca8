use crate::models::{Metric, RiskLabel, StatSummary, TrendResult};

/// Sector labels the upstream dataset uses for banks. Banks run a current
/// ratio pinned near 1.0 by balance-sheet regulation, so the liquidity tree
/// exempts them instead of grading them.
const BANKING_SECTORS: [&str; 3] = ["Bancos", "Banking", "Bank"];

/// Run the decision tree for `metric`. Branches are evaluated in order and
/// the first match wins; reordering them changes the semantics.
pub fn classify(
    metric: Metric,
    sector: &str,
    stats: &StatSummary,
    trend: &TrendResult,
) -> (RiskLabel, &'static str) {
    match metric {
        Metric::CurrentLiquidity => classify_liquidity(sector, stats),
        Metric::OperatingCashFlow => classify_cash_flow(stats, trend),
        Metric::NetMargin => classify_margin(stats),
        Metric::Ebitda => classify_ebitda(stats, trend),
    }
}

/// Current liquidity: solvency floor (Q1 > 1) and cushion (median > 2).
fn classify_liquidity(sector: &str, s: &StatSummary) -> (RiskLabel, &'static str) {
    if BANKING_SECTORS.contains(&sector) {
        (
            RiskLabel::SectorException,
            "Indicator carries little meaning for banks: regulatory balance-sheet structure keeps liquidity near 1.0.",
        )
    } else if s.q3 < 1.0 || s.median < 0.95 {
        // Even the best years fail to cover short-term liabilities.
        (
            RiskLabel::ElevatedRisk,
            "Structural inability to cover short-term liabilities (recurring insolvency).",
        )
    } else if s.median >= 2.0 && s.q1 >= 1.0 {
        (
            RiskLabel::Strong,
            "Ample financial slack (liquidity cushion). High resilience to downturns.",
        )
    } else if s.median < 1.20 || s.q1 < 1.0 {
        (
            RiskLabel::ModerateRisk,
            "Narrow safety margin (< 1.20) or past years below 1.0 coverage (Q1 < 1.0).",
        )
    } else {
        (
            RiskLabel::Adequate,
            "Balanced, efficient liquidity management. Obligations met without excess idle cash.",
        )
    }
}

/// Operating cash flow: does the business generate cash, and which way is
/// generation heading. When CAGR is undefined the regression slope stands in
/// for both trend flags.
fn classify_cash_flow(s: &StatSummary, t: &TrendResult) -> (RiskLabel, &'static str) {
    let (sharp_decline, positive_trend) = match t.cagr_pct {
        Some(cagr) => (cagr < -10.0, cagr >= 0.0),
        None => (t.slope < 0.0, t.slope > 0.0),
    };

    if s.median < 0.0 || s.q3 <= 0.0 {
        (
            RiskLabel::ElevatedRisk,
            "Structurally negative cash generation.",
        )
    } else if s.median > 0.0 && s.q1 > 0.0 && positive_trend {
        (
            RiskLabel::Strong,
            "Recurring, sustainable cash generation.",
        )
    } else if s.q1 < 0.0 || sharp_decline {
        (
            RiskLabel::ModerateRisk,
            "History of cash burn or sharply deteriorating trend.",
        )
    } else {
        (
            RiskLabel::Adequate,
            "Positive cash generation, but flat or slightly declining.",
        )
    }
}

/// Net margin: efficiency and profitability cushion. Purely distributional,
/// no trend input; the volatility branch is the only tree that reads the
/// standard deviation.
fn classify_margin(s: &StatSummary) -> (RiskLabel, &'static str) {
    if s.median < 0.0 || s.q3 < 2.0 {
        (
            RiskLabel::ElevatedRisk,
            "Operation runs at a loss or fails to produce consistent profit.",
        )
    } else if s.median >= 15.0 && s.q1 > 5.0 {
        (
            RiskLabel::Strong,
            "High efficiency with a comfortable profitability cushion.",
        )
    } else if (s.median > 0.0 && s.median < 5.0)
        || s.q1 < 0.0
        || (s.median < 8.0 && s.std_dev > 5.0)
    {
        (
            RiskLabel::ModerateRisk,
            "Thin margins, high volatility or occasional losses.",
        )
    } else {
        (
            RiskLabel::Adequate,
            "Stable profitability in line with market averages.",
        )
    }
}

/// EBITDA: operating strength and growth. Note the asymmetry: the Strong
/// branch uses the slope fallback when CAGR is undefined, but the decline
/// branch compares the raw CAGR directly, so an undefined CAGR makes that
/// comparison false rather than falling back to the slope.
fn classify_ebitda(s: &StatSummary, t: &TrendResult) -> (RiskLabel, &'static str) {
    let strong_growth = match t.cagr_pct {
        Some(cagr) => cagr > 5.0,
        None => t.slope > 0.0,
    };

    if s.median < 0.0 || s.q3 <= 0.0 {
        (
            RiskLabel::ElevatedRisk,
            "Core operation runs at a loss (negative EBITDA).",
        )
    } else if s.median > 0.0 && s.q1 > 0.0 && strong_growth {
        (
            RiskLabel::Strong,
            "Profitable core operation in expansion (positive CAGR).",
        )
    } else if t.cagr_pct.is_some_and(|cagr| cagr < -10.0) || s.q1 < 0.0 {
        (
            RiskLabel::ModerateRisk,
            "Rapid operating deterioration or occasional negative EBITDA.",
        )
    } else {
        (
            RiskLabel::Adequate,
            "Stable operating generation (maturity).",
        )
    }
}
