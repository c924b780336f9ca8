use async_trait::async_trait;
use thiserror::Error;

use crate::models::FinancialRecord;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("network error: {0}")]
    Network(String),

    #[error("bad response: {0}")]
    BadResponse(String),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Source of the financial-statements snapshot the diagnostics run against.
/// The core computation only ever sees the resulting in-memory records.
#[async_trait]
pub trait DatasetProvider: Send + Sync {
    async fn load_dataset(&self) -> Result<Vec<FinancialRecord>, DatasetError>;
}
