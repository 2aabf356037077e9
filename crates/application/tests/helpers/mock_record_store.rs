#![allow(dead_code)]

use recordbook_application::ports::{RecordBook, RecordStore};
use recordbook_domain::{
    same_record, DomainError, DomainName, Fingerprint, RecordClass, RecordData, ResourceRecord,
};
use std::collections::HashMap;
use std::net::Ipv4Addr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

/// In-memory stand-in with the store's set/override/remove rules but no
/// expiry and no files.
#[derive(Default)]
pub struct MockRecordStore {
    entries: RwLock<HashMap<Fingerprint, Vec<ResourceRecord>>>,
    append_calls: AtomicUsize,
    save_calls: AtomicUsize,
    load_calls: AtomicUsize,
    fail_persistence: bool,
}

impl MockRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail_persistence: true,
            ..Self::default()
        }
    }

    pub fn with_a_records(name: &str, addrs: &[Ipv4Addr]) -> Self {
        let store = Self::new();
        let owner = DomainName::parse(name).unwrap();
        let key = Fingerprint::of(&owner, recordbook_domain::RecordType::A);
        for addr in addrs {
            let record =
                ResourceRecord::new(owner.clone(), RecordClass::IN, 300, RecordData::A(*addr));
            store.set(key.clone(), record, None);
        }
        store
    }

    pub fn records(&self, key: &Fingerprint) -> Option<Vec<ResourceRecord>> {
        self.entries.read().unwrap().get(key).cloned()
    }

    pub fn append_calls(&self) -> usize {
        self.append_calls.load(Ordering::SeqCst)
    }

    pub fn save_calls(&self) -> usize {
        self.save_calls.load(Ordering::SeqCst)
    }

    pub fn load_calls(&self) -> usize {
        self.load_calls.load(Ordering::SeqCst)
    }
}

impl RecordBook for MockRecordStore {
    fn get(&self, key: &Fingerprint) -> Option<Arc<Vec<ResourceRecord>>> {
        self.entries.read().unwrap().get(key).cloned().map(Arc::new)
    }

    fn set(&self, key: Fingerprint, record: ResourceRecord, old: Option<&ResourceRecord>) -> bool {
        let mut entries = self.entries.write().unwrap();
        let Some(records) = entries.get_mut(&key) else {
            entries.insert(key, vec![record]);
            return true;
        };
        match old {
            None => {
                records.push(record);
                true
            }
            Some(old) => match records.iter().position(|r| same_record(r, old)) {
                Some(i) => {
                    records[i] = record;
                    true
                }
                None => false,
            },
        }
    }
}

impl RecordStore for MockRecordStore {
    fn append(&self, key: Fingerprint, records: Vec<ResourceRecord>) {
        self.append_calls.fetch_add(1, Ordering::SeqCst);
        self.entries
            .write()
            .unwrap()
            .entry(key)
            .or_default()
            .extend(records);
    }

    fn override_records(&self, key: Fingerprint, records: Vec<ResourceRecord>) {
        self.entries.write().unwrap().insert(key, records);
    }

    fn remove(&self, key: &Fingerprint, record: Option<&ResourceRecord>) -> bool {
        let mut entries = self.entries.write().unwrap();
        match record {
            None => entries.remove(key).is_some(),
            Some(record) => match entries.get_mut(key) {
                Some(records) => match records.iter().position(|r| same_record(r, record)) {
                    Some(i) => {
                        records.remove(i);
                        true
                    }
                    None => false,
                },
                None => false,
            },
        }
    }

    fn save(&self) -> Result<(), DomainError> {
        self.save_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_persistence {
            return Err(DomainError::PersistenceError("disk full".to_string()));
        }
        Ok(())
    }

    fn load(&self) -> Result<(), DomainError> {
        self.load_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_persistence {
            return Err(DomainError::PersistenceError("store file corrupt".to_string()));
        }
        Ok(())
    }

    fn len(&self) -> usize {
        self.entries.read().unwrap().len()
    }
}
