use std::sync::Arc;

use recordbook_domain::{DomainError, ResourceRecord};
use tracing::info;

use super::{parse_class, RecordSetKey};
use crate::ports::RecordStore;

/// Overrides a whole record set. An empty value list leaves the key in
/// place with no records and TTL 0, which never expires.
pub struct ReplaceRecordsUseCase {
    store: Arc<dyn RecordStore>,
}

impl ReplaceRecordsUseCase {
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
        let class = parse_class(class)?;
        let records = key.records(class, ttl, values)?;

        self.store
            .override_records(key.fingerprint(), records.clone());

        info!(
            name = %key.name,
            record_type = %key.record_type,
            count = records.len(),
            "Replaced record set"
        );

        Ok(records)
    }
}
