use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{StatSummary, TrendResult};

/// Risk tier produced by the per-metric decision trees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLabel {
    Strong,
    Adequate,
    ModerateRisk,
    ElevatedRisk,
    /// Liquidity only: banks carry a regulated balance-sheet structure that
    /// makes the current ratio uninformative.
    SectorException,
}

/// Full classification of one metric for one company.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Classification {
    pub indicator: String,
    pub label: RiskLabel,
    pub justification: String,
    pub stats: StatSummary,
    pub trend: TrendResult,
    /// Human-readable trend sentence for the analysis window.
    pub narrative: String,
}

/// Per-metric outcome. A failure in one metric (e.g. not enough history for
/// the trend window) is confined to its block and never aborts the other
/// three classifications.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MetricOutcome {
    Classified(Classification),
    Failed { message: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricBlock {
    pub indicator: String,
    pub company: MetricOutcome,

    /// Sector-wide summary for the same metric. Omitted (not null) when the
    /// company is alone in its sector.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sector: Option<StatSummary>,
}

/// Top-level diagnostic: the four metric blocks in report order plus the
/// sector membership facts used to decide whether sector blocks appear.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosticReport {
    pub company: String,
    pub sector: String,
    pub metrics: Vec<MetricBlock>,
    pub sector_included: bool,
    pub companies_in_sector: usize,
    pub generated_at: DateTime<Utc>,
}
