#![allow(dead_code)]

use recordbook_application::ports::{RecordBook, RecordStore};
use recordbook_domain::{DomainError, Fingerprint, ResourceRecord};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

/// Store double that only counts persistence calls.
#[derive(Default)]
pub struct CountingRecordStore {
    saves: AtomicUsize,
    fail: AtomicBool,
}

impl CountingRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: AtomicBool::new(true),
            ..Self::default()
        }
    }

    pub fn saves(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

impl RecordBook for CountingRecordStore {
    fn get(&self, _key: &Fingerprint) -> Option<Arc<Vec<ResourceRecord>>> {
        None
    }

    fn set(&self, _key: Fingerprint, _record: ResourceRecord, _old: Option<&ResourceRecord>) -> bool {
        true
    }
}

impl RecordStore for CountingRecordStore {
    fn append(&self, _key: Fingerprint, _records: Vec<ResourceRecord>) {}

    fn override_records(&self, _key: Fingerprint, _records: Vec<ResourceRecord>) {}

    fn remove(&self, _key: &Fingerprint, _record: Option<&ResourceRecord>) -> bool {
        false
    }

    fn save(&self) -> Result<(), DomainError> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        if self.fail.load(Ordering::SeqCst) {
            return Err(DomainError::PersistenceError("read-only filesystem".to_string()));
        }
        Ok(())
    }

    fn load(&self) -> Result<(), DomainError> {
        Ok(())
    }

    fn len(&self) -> usize {
        0
    }
}
