use std::sync::Arc;

use recordbook_domain::{DomainError, RecordClass};
use tracing::info;

use super::RecordSetKey;
use crate::ports::RecordStore;

pub struct DeleteRecordsUseCase {
    store: Arc<dyn RecordStore>,
}

impl DeleteRecordsUseCase {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Without a value the whole set goes. With one, only the matching
    /// record is dropped and the set stays, possibly empty.
    pub fn execute(
        &self,
        name: &str,
        record_type: &str,
        value: Option<&str>,
    ) -> Result<(), DomainError> {
        let key = RecordSetKey::parse(name, record_type)?;
        let fingerprint = key.fingerprint();

        let removed = match value {
            None => self.store.remove(&fingerprint, None),
            Some(value) => {
                // class and ttl do not take part in record matching
                let record = key.record(RecordClass::IN, 0, value)?;
                self.store.remove(&fingerprint, Some(&record))
            }
        };

        if !removed {
            return Err(DomainError::NotFound(match value {
                None => format!("{} {}", key.name, key.record_type),
                Some(value) => format!("{} {} {}", key.name, key.record_type, value),
            }));
        }

        info!(
            name = %key.name,
            record_type = %key.record_type,
            value = value.unwrap_or("*"),
            "Removed records"
        );

        Ok(())
    }
}
