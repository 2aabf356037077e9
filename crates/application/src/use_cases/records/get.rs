use std::sync::Arc;

use recordbook_domain::{DomainError, ResourceRecord};

use super::RecordSetKey;
use crate::ports::RecordStore;

pub struct GetRecordsUseCase {
    store: Arc<dyn RecordStore>,
}

impl GetRecordsUseCase {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    pub fn execute(
        &self,
        name: &str,
        record_type: &str,
    ) -> Result<Arc<Vec<ResourceRecord>>, DomainError> {
        let key = RecordSetKey::parse(name, record_type)?;

        self.store.get(&key.fingerprint()).ok_or_else(|| {
            DomainError::NotFound(format!("{} {}", key.name, key.record_type))
        })
    }
}
