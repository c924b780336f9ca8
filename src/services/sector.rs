use crate::models::{FinancialRecord, Metric, StatSummary};
use crate::services::stats;

/// Summarize one metric across every observation of a sector, all companies
/// mixed, no trend. Returns `None` on an empty slice; the orchestrator's
/// `companies_in_sector > 1` guard means that only happens on a sector label
/// absent from the dataset.
pub fn sector_summary(
    records: &[FinancialRecord],
    sector: &str,
    metric: Metric,
) -> Option<StatSummary> {
    let values: Vec<f64> = records
        .iter()
        .filter(|r| r.sector == sector)
        .map(|r| metric.value(r))
        .filter(|v| v.is_finite())
        .collect();

    if values.is_empty() {
        None
    } else {
        Some(stats::summarize(&values))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(company: &str, year: i32, sector: &str, margin: f64) -> FinancialRecord {
        FinancialRecord {
            company: company.to_string(),
            fiscal_year: year,
            sector: sector.to_string(),
            current_liquidity: 1.0,
            operating_cash_flow: 100.0,
            net_margin_pct: margin,
            ebitda: 50.0,
        }
    }

    #[test]
    fn aggregates_across_all_companies_in_the_sector() {
        let records = vec![
            record("AAPL", 2022, "Technology", 20.0),
            record("AAPL", 2023, "Technology", 24.0),
            record("MSFT", 2022, "Technology", 30.0),
            record("XOM", 2022, "Energy", 8.0),
        ];

        let s = sector_summary(&records, "Technology", Metric::NetMargin).unwrap();
        assert_eq!(s.min, 20.0);
        assert_eq!(s.max, 30.0);
        assert!((s.median - 24.0).abs() < 1e-12);
    }

    #[test]
    fn unknown_sector_yields_none() {
        let records = vec![record("AAPL", 2023, "Technology", 20.0)];
        assert!(sector_summary(&records, "Utilities", Metric::NetMargin).is_none());
    }

    #[test]
    fn non_finite_values_are_dropped() {
        let records = vec![
            record("AAPL", 2022, "Technology", 20.0),
            record("AAPL", 2023, "Technology", f64::NAN),
        ];
        let s = sector_summary(&records, "Technology", Metric::NetMargin).unwrap();
        assert_eq!(s.min, 20.0);
        assert_eq!(s.max, 20.0);
    }
}
