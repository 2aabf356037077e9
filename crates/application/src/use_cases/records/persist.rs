use std::sync::Arc;
use std::time::Instant;

use recordbook_domain::DomainError;
use tracing::info;

use crate::ports::RecordStore;

/// Runs store save/load on the blocking pool so file I/O never stalls the
/// runtime workers.
pub struct PersistStoreUseCase {
    store: Arc<dyn RecordStore>,
}

impl PersistStoreUseCase {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    pub async fn save(&self) -> Result<(), DomainError> {
        let start = Instant::now();
        let store = Arc::clone(&self.store);
        let entries = run_blocking(move || {
            store.save()?;
            Ok(store.len())
        })
        .await?;

        info!(
            entries,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Record store saved"
        );
        Ok(())
    }

    pub async fn load(&self) -> Result<(), DomainError> {
        let store = Arc::clone(&self.store);
        let entries = run_blocking(move || {
            store.load()?;
            Ok(store.len())
        })
        .await?;

        info!(entries, "Record store loaded");
        Ok(())
    }
}

async fn run_blocking<T, F>(f: F) -> Result<T, DomainError>
where
    F: FnOnce() -> Result<T, DomainError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| DomainError::PersistenceError(format!("persistence task failed: {}", e)))?
}
