mod record;
mod report;
mod stats;
mod trend;

pub use record::{FinancialRecord, Metric};
pub use report::{Classification, DiagnosticReport, MetricBlock, MetricOutcome, RiskLabel};
pub use stats::StatSummary;
pub use trend::{TrendDirection, TrendResult};
