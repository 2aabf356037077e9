use super::clock::{Clock, SystemClock};
use super::persistence::{Snapshot, StoreFiles};
use recordbook_application::ports::{RecordBook, RecordStore};
use recordbook_domain::{same_record, DomainError, Fingerprint, RecordEntry, ResourceRecord};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

/// The record table: a single reader/writer lock over every entry.
///
/// Record lists are shared behind `Arc`, so readers and snapshots take a
/// cheap clone while writers copy-on-write through `Arc::make_mut`. A reader
/// therefore always sees either the whole old list or the whole new one.
pub struct InMemoryRecordStore {
    entries: RwLock<HashMap<Fingerprint, RecordEntry>>,
    files: StoreFiles,
    clock: Arc<dyn Clock>,
    save_lock: Mutex<()>,
}

impl InMemoryRecordStore {
    pub fn new(files: StoreFiles) -> Self {
        Self::with_clock(files, Arc::new(SystemClock))
    }

    pub fn with_clock(files: StoreFiles, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            files,
            clock,
            save_lock: Mutex::new(()),
        }
    }

    pub fn files(&self) -> &StoreFiles {
        &self.files
    }

    /// Shallow copy of the whole table. Record lists are shared with the
    /// live table, not cloned.
    pub fn snapshot(&self) -> Snapshot {
        self.read().clone()
    }

    /// Raw entry access, expired or not. Does not evict.
    pub fn entry(&self, key: &Fingerprint) -> Option<RecordEntry> {
        self.read().get(key).cloned()
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<Fingerprint, RecordEntry>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<Fingerprint, RecordEntry>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl RecordBook for InMemoryRecordStore {
    fn get(&self, key: &Fingerprint) -> Option<Arc<Vec<ResourceRecord>>> {
        let now = self.clock.now_secs();

        {
            let entries = self.read();
            let entry = entries.get(key)?;
            if !entry.is_expired_at(now) {
                return Some(Arc::clone(&entry.records));
            }
        }

        // A writer may have refreshed the entry between the two locks.
        let mut entries = self.write();
        if entries.get(key).is_some_and(|e| e.is_expired_at(now)) {
            entries.remove(key);
            debug!(key = ?key, "Evicted expired entry");
        }
        None
    }

    fn set(&self, key: Fingerprint, record: ResourceRecord, old: Option<&ResourceRecord>) -> bool {
        let now = self.clock.now_secs();
        let mut entries = self.write();

        match entries.entry(key) {
            Entry::Vacant(slot) => {
                let ttl = record.ttl;
                slot.insert(RecordEntry::new(vec![record], ttl, now));
                true
            }
            Entry::Occupied(mut slot) => {
                let entry = slot.get_mut();
                match old {
                    None => {
                        Arc::make_mut(&mut entry.records).push(record);
                        true
                    }
                    Some(old) => match entry.records.iter().position(|r| same_record(r, old)) {
                        Some(index) => {
                            Arc::make_mut(&mut entry.records)[index] = record;
                            true
                        }
                        None => false,
                    },
                }
            }
        }
    }
}

impl RecordStore for InMemoryRecordStore {
    fn append(&self, key: Fingerprint, records: Vec<ResourceRecord>) {
        let Some(ttl) = records.first().map(|r| r.ttl) else {
            return;
        };
        let now = self.clock.now_secs();

        match self.write().entry(key) {
            Entry::Vacant(slot) => {
                slot.insert(RecordEntry::new(records, ttl, now));
            }
            Entry::Occupied(mut slot) => {
                Arc::make_mut(&mut slot.get_mut().records).extend(records);
            }
        }
    }

    fn override_records(&self, key: Fingerprint, records: Vec<ResourceRecord>) {
        let ttl = records.first().map_or(0, |r| r.ttl);
        let entry = RecordEntry::new(records, ttl, self.clock.now_secs());
        self.write().insert(key, entry);
    }

    fn remove(&self, key: &Fingerprint, record: Option<&ResourceRecord>) -> bool {
        let mut entries = self.write();

        let Some(record) = record else {
            return entries.remove(key).is_some();
        };

        let Some(entry) = entries.get_mut(key) else {
            return false;
        };
        match entry.records.iter().position(|r| same_record(r, record)) {
            Some(index) => {
                Arc::make_mut(&mut entry.records).remove(index);
                true
            }
            None => false,
        }
    }

    fn save(&self) -> Result<(), DomainError> {
        let _guard = self.save_lock.lock().unwrap_or_else(PoisonError::into_inner);

        // encoded outside the table lock
        let snapshot = self.snapshot();
        self.files.write_snapshot(&snapshot)?;

        debug!(
            entries = snapshot.len(),
            path = %self.files.primary().display(),
            "Wrote store snapshot"
        );
        Ok(())
    }

    fn load(&self) -> Result<(), DomainError> {
        let persisted = self.files.read_snapshot()?;
        let count = persisted.len();

        self.write().extend(persisted);

        debug!(
            entries = count,
            path = %self.files.primary().display(),
            "Merged store snapshot"
        );
        Ok(())
    }

    fn len(&self) -> usize {
        self.read().len()
    }
}
