use serde::{Deserialize, Serialize};

// Represents one company-year observation from the financial statements dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialRecord {
    pub company: String,
    pub fiscal_year: i32,
    pub sector: String,
    pub current_liquidity: f64,
    pub operating_cash_flow: f64,
    pub net_margin_pct: f64,
    pub ebitda: f64,
}

/// The four metrics the diagnostic covers. The tag selects both the record
/// field and the decision tree applied to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    CurrentLiquidity,
    OperatingCashFlow,
    NetMargin,
    Ebitda,
}

impl Metric {
    /// Report order is fixed: liquidity, cash flow, margin, EBITDA.
    pub const ALL: [Metric; 4] = [
        Metric::CurrentLiquidity,
        Metric::OperatingCashFlow,
        Metric::NetMargin,
        Metric::Ebitda,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            Metric::CurrentLiquidity => "Current Liquidity Ratio",
            Metric::OperatingCashFlow => "Operating Cash Flow",
            Metric::NetMargin => "Net Profit Margin",
            Metric::Ebitda => "EBITDA",
        }
    }

    /// Unit suffix used by the narrative sentence. Empty for pure ratios.
    pub fn unit(self) -> &'static str {
        match self {
            Metric::CurrentLiquidity => "",
            Metric::OperatingCashFlow => "millions USD",
            Metric::NetMargin => "%",
            Metric::Ebitda => "millions USD",
        }
    }

    pub fn value(self, record: &FinancialRecord) -> f64 {
        match self {
            Metric::CurrentLiquidity => record.current_liquidity,
            Metric::OperatingCashFlow => record.operating_cash_flow,
            Metric::NetMargin => record.net_margin_pct,
            Metric::Ebitda => record.ebitda,
        }
    }
}
