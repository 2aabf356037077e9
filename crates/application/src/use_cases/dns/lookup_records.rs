use crate::ports::RecordBook;
use recordbook_domain::{DomainName, Fingerprint, RecordType, ResourceRecord};
use std::sync::Arc;
use tracing::debug;

/// Query-path lookup. A miss is not an error: the caller stays silent.
pub struct LookupRecordsUseCase {
    book: Arc<dyn RecordBook>,
}

impl LookupRecordsUseCase {
    pub fn new(book: Arc<dyn RecordBook>) -> Self {
        Self { book }
    }

    pub fn execute(
        &self,
        name: &DomainName,
        record_type: RecordType,
    ) -> Option<Arc<Vec<ResourceRecord>>> {
        let key = Fingerprint::of(name, record_type);

        match self.book.get(&key) {
            Some(records) => {
                debug!(name = %name, record_type = %record_type, answers = records.len(), "Record lookup hit");
                Some(records)
            }
            None => {
                debug!(name = %name, record_type = %record_type, "Record lookup miss");
                None
            }
        }
    }
}
