use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::info;

use crate::errors::AppError;
use crate::external::DatasetProvider;
use crate::models::FinancialRecord;

/// Shared application state: the dataset provider plus a process-wide
/// snapshot cache. The core computation never sees the cache; it receives a
/// plain record slice per request.
#[derive(Clone)]
pub struct AppState {
    provider: Arc<dyn DatasetProvider>,
    cache: Arc<RwLock<Option<Arc<Vec<FinancialRecord>>>>>,
}

impl AppState {
    pub fn new(provider: Arc<dyn DatasetProvider>) -> Self {
        Self {
            provider,
            cache: Arc::new(RwLock::new(None)),
        }
    }

    /// The dataset snapshot, loading it on first use. A failed load is not
    /// cached, so the next request retries the fetch.
    pub async fn dataset(&self) -> Result<Arc<Vec<FinancialRecord>>, AppError> {
        if let Some(snapshot) = self.cache.read().await.as_ref() {
            return Ok(snapshot.clone());
        }

        let snapshot = Arc::new(self.provider.load_dataset().await?);
        info!("Dataset snapshot cached: {} records", snapshot.len());
        *self.cache.write().await = Some(snapshot.clone());
        Ok(snapshot)
    }
}
