use std::collections::HashSet;

use chrono::Utc;
use tracing::warn;

use crate::errors::AppError;
use crate::models::{
    Classification, DiagnosticReport, FinancialRecord, Metric, MetricBlock, MetricOutcome,
};
use crate::services::{classifier, narrative, sector, stats, trend};

/// Run the full diagnostic for one company against the dataset snapshot.
///
/// Each metric is classified in isolation: a trend failure in one block
/// (say, a single year of history) becomes an error marker there and never
/// aborts the other three. Sector summaries are attached only when more
/// than one company shares the sector; with a lone company the blocks carry
/// no sector field at all.
pub fn diagnose(records: &[FinancialRecord], company: &str) -> Result<DiagnosticReport, AppError> {
    let rows: Vec<&FinancialRecord> = records.iter().filter(|r| r.company == company).collect();
    if rows.is_empty() {
        return Err(AppError::NotFound);
    }

    let sector = rows[0].sector.clone();

    let companies_in_sector = records
        .iter()
        .filter(|r| r.sector == sector)
        .map(|r| r.company.as_str())
        .collect::<HashSet<_>>()
        .len();
    let sector_included = companies_in_sector > 1;

    let metrics = Metric::ALL
        .iter()
        .map(|&metric| MetricBlock {
            indicator: metric.display_name().to_string(),
            company: classify_metric(&rows, company, &sector, metric),
            sector: if sector_included {
                sector::sector_summary(records, &sector, metric)
            } else {
                None
            },
        })
        .collect();

    Ok(DiagnosticReport {
        company: company.to_string(),
        sector,
        metrics,
        sector_included,
        companies_in_sector,
        generated_at: Utc::now(),
    })
}

/// One metric's classification. Summary statistics span the company's whole
/// history; trend indicators only the trailing window.
fn classify_metric(
    rows: &[&FinancialRecord],
    company: &str,
    sector: &str,
    metric: Metric,
) -> MetricOutcome {
    let observations: Vec<(i32, f64)> = rows
        .iter()
        .map(|r| (r.fiscal_year, metric.value(r)))
        .collect();

    let trend = match trend::analyze(&observations, trend::DEFAULT_TREND_WINDOW) {
        Ok(t) => t,
        Err(e) => {
            warn!(
                "Trend analysis failed for {} / {}: {}",
                company,
                metric.display_name(),
                e
            );
            return MetricOutcome::Failed {
                message: e.to_string(),
            };
        }
    };

    let values: Vec<f64> = observations.iter().map(|&(_, v)| v).collect();
    let stats = stats::summarize(&values);
    let (label, justification) = classifier::classify(metric, sector, &stats, &trend);
    let narrative = narrative::trend_sentence(company, sector, metric, &trend);

    MetricOutcome::Classified(Classification {
        indicator: metric.display_name().to_string(),
        label,
        justification: justification.to_string(),
        stats,
        trend,
        narrative,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RiskLabel;

    fn record(
        company: &str,
        year: i32,
        sector: &str,
        liquidity: f64,
        cash_flow: f64,
        margin: f64,
        ebitda: f64,
    ) -> FinancialRecord {
        FinancialRecord {
            company: company.to_string(),
            fiscal_year: year,
            sector: sector.to_string(),
            current_liquidity: liquidity,
            operating_cash_flow: cash_flow,
            net_margin_pct: margin,
            ebitda,
        }
    }

    fn healthy_company(name: &str, sector: &str) -> Vec<FinancialRecord> {
        vec![
            record(name, 2021, sector, 2.1, 100.0, 16.0, 120.0),
            record(name, 2022, sector, 2.4, 115.0, 18.0, 140.0),
            record(name, 2023, sector, 2.2, 130.0, 20.0, 165.0),
        ]
    }

    #[test]
    fn unknown_company_is_not_found() {
        let records = healthy_company("AAPL", "Technology");
        let err = diagnose(&records, "WAT").unwrap_err();
        assert!(matches!(err, AppError::NotFound));
    }

    #[test]
    fn report_carries_four_blocks_in_fixed_order() {
        let records = healthy_company("AAPL", "Technology");
        let report = diagnose(&records, "AAPL").unwrap();

        let indicators: Vec<&str> = report.metrics.iter().map(|b| b.indicator.as_str()).collect();
        assert_eq!(
            indicators,
            vec![
                "Current Liquidity Ratio",
                "Operating Cash Flow",
                "Net Profit Margin",
                "EBITDA"
            ]
        );
        assert_eq!(report.company, "AAPL");
        assert_eq!(report.sector, "Technology");
    }

    #[test]
    fn healthy_company_classifies_strong_across_the_board() {
        let records = healthy_company("AAPL", "Technology");
        let report = diagnose(&records, "AAPL").unwrap();

        for block in &report.metrics {
            match &block.company {
                MetricOutcome::Classified(c) => assert_eq!(c.label, RiskLabel::Strong),
                MetricOutcome::Failed { message } => {
                    panic!("unexpected failure for {}: {}", block.indicator, message)
                }
            }
        }
    }

    #[test]
    fn lone_sector_company_gets_no_sector_blocks() {
        let records = healthy_company("AAPL", "Technology");
        let report = diagnose(&records, "AAPL").unwrap();

        assert!(!report.sector_included);
        assert_eq!(report.companies_in_sector, 1);
        assert!(report.metrics.iter().all(|b| b.sector.is_none()));

        // Absent, not null, once serialized.
        let json = serde_json::to_value(&report).unwrap();
        assert!(json["metrics"][0].get("sector").is_none());
    }

    #[test]
    fn sector_blocks_appear_iff_sector_has_peers() {
        let mut records = healthy_company("AAPL", "Technology");
        records.extend(healthy_company("MSFT", "Technology"));
        records.extend(healthy_company("XOM", "Energy"));

        let report = diagnose(&records, "AAPL").unwrap();
        assert!(report.sector_included);
        assert_eq!(report.companies_in_sector, 2);
        assert!(report.metrics.iter().all(|b| b.sector.is_some()));

        // Sector stats mix both companies' observations.
        let sector_stats = report.metrics[2].sector.as_ref().unwrap();
        assert_eq!(sector_stats.min, 16.0);
        assert_eq!(sector_stats.max, 20.0);
    }

    #[test]
    fn single_year_history_fails_per_metric_not_per_request() {
        let records = vec![record("NEW", 2023, "Technology", 1.5, 50.0, 10.0, 30.0)];
        let report = diagnose(&records, "NEW").unwrap();

        assert_eq!(report.metrics.len(), 4);
        for block in &report.metrics {
            match &block.company {
                MetricOutcome::Failed { message } => {
                    assert!(message.contains("insufficient history"))
                }
                MetricOutcome::Classified(_) => {
                    panic!("one year of history must not produce a classification")
                }
            }
        }
    }

    #[test]
    fn zero_baseline_is_confined_to_its_metric() {
        // Cash flow starts the window at exactly zero; the other three
        // metrics stay classifiable.
        let records = vec![
            record("ZRO", 2021, "Technology", 2.1, 0.0, 16.0, 120.0),
            record("ZRO", 2022, "Technology", 2.4, 115.0, 18.0, 140.0),
            record("ZRO", 2023, "Technology", 2.2, 130.0, 20.0, 165.0),
        ];
        let report = diagnose(&records, "ZRO").unwrap();

        match &report.metrics[1].company {
            MetricOutcome::Failed { message } => assert!(message.contains("zero")),
            MetricOutcome::Classified(_) => panic!("zero baseline must fail the YoY computation"),
        }
        assert!(matches!(
            report.metrics[0].company,
            MetricOutcome::Classified(_)
        ));
        assert!(matches!(
            report.metrics[2].company,
            MetricOutcome::Classified(_)
        ));
        assert!(matches!(
            report.metrics[3].company,
            MetricOutcome::Classified(_)
        ));
    }

    #[test]
    fn banking_company_gets_the_liquidity_exception_only() {
        let records = vec![
            record("ITUB", 2021, "Banking", 1.0, 100.0, 18.0, 120.0),
            record("ITUB", 2022, "Banking", 1.0, 115.0, 20.0, 140.0),
            record("ITUB", 2023, "Banking", 1.0, 130.0, 22.0, 165.0),
        ];
        let report = diagnose(&records, "ITUB").unwrap();

        match &report.metrics[0].company {
            MetricOutcome::Classified(c) => assert_eq!(c.label, RiskLabel::SectorException),
            MetricOutcome::Failed { .. } => panic!("liquidity should classify"),
        }
        match &report.metrics[2].company {
            MetricOutcome::Classified(c) => assert_eq!(c.label, RiskLabel::Strong),
            MetricOutcome::Failed { .. } => panic!("margin should classify"),
        }
    }
}
