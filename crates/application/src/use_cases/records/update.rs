use std::sync::Arc;

use recordbook_domain::{DomainError, ResourceRecord};
use tracing::info;

use super::{parse_class, RecordSetKey};
use crate::ports::RecordStore;

/// Swaps one record of a set for another, keeping its position.
///
/// When the set does not exist yet the new record creates it, the same way
/// a plain insert would.
pub struct UpdateRecordUseCase {
    store: Arc<dyn RecordStore>,
}

impl UpdateRecordUseCase {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    pub fn execute(
        &self,
        name: &str,
        record_type: &str,
        class: Option<&str>,
        ttl: u32,
        old_value: &str,
        new_value: &str,
    ) -> Result<ResourceRecord, DomainError> {
        let key = RecordSetKey::parse(name, record_type)?;
        let class = parse_class(class)?;
        let old_record = key.record(class, ttl, old_value)?;
        let new_record = key.record(class, ttl, new_value)?;

        if !self
            .store
            .set(key.fingerprint(), new_record.clone(), Some(&old_record))
        {
            return Err(DomainError::RecordMismatch(format!(
                "{} {} {}",
                key.name, key.record_type, old_record.data
            )));
        }

        info!(
            name = %key.name,
            record_type = %key.record_type,
            old = %old_record.data,
            new = %new_record.data,
            "Updated record"
        );

        Ok(new_record)
    }
}
