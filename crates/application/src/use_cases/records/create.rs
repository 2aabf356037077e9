use std::sync::Arc;

use recordbook_domain::{DomainError, ResourceRecord};
use tracing::info;

use super::{parse_class, RecordSetKey};
use crate::ports::RecordStore;

/// Appends records to a record set, creating it when absent. The first
/// record written to a new set decides the set's TTL.
pub struct CreateRecordsUseCase {
    store: Arc<dyn RecordStore>,
}

impl CreateRecordsUseCase {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    pub fn execute(
        &self,
        name: &str,
        record_type: &str,
        class: Option<&str>,
        ttl: u32,
        values: &[String],
    ) -> Result<Vec<ResourceRecord>, DomainError> {
        let key = RecordSetKey::parse(name, record_type)?;
        if values.is_empty() {
            return Err(DomainError::InvalidRecordData {
                record_type: key.record_type,
                reason: "at least one value is required".to_string(),
            });
        }
        let class = parse_class(class)?;
        let records = key.records(class, ttl, values)?;
        let fingerprint = key.fingerprint();

        self.store.append(fingerprint, records.clone());

        info!(
            name = %key.name,
            record_type = %key.record_type,
            count = records.len(),
            "Added records"
        );

        Ok(records)
    }
}
