use recordbook_domain::{DomainError, Fingerprint, ResourceRecord};
use std::sync::Arc;

/// Narrow handle given to the query path: lookups plus single-record writes.
pub trait RecordBook: Send + Sync {
    /// Returns the records stored under `key`, or `None` when the key is
    /// absent or its entry has expired (an expired entry is evicted).
    fn get(&self, key: &Fingerprint) -> Option<Arc<Vec<ResourceRecord>>>;

    /// Creates the entry, appends to it (`old == None`) or replaces the
    /// record matching `old` in place. Returns `false` only when `old` is
    /// given for an existing key and nothing in the entry matches it.
    fn set(&self, key: Fingerprint, record: ResourceRecord, old: Option<&ResourceRecord>) -> bool;
}

/// Full administrative surface of the record store.
pub trait RecordStore: RecordBook {
    /// Appends every record in one write, creating the entry when absent
    /// (the first record then decides the entry TTL). Readers see either
    /// none or all of `records`.
    fn append(&self, key: Fingerprint, records: Vec<ResourceRecord>);

    /// Replaces the whole record list; the entry TTL becomes the first
    /// record's TTL, or 0 for an empty list.
    fn override_records(&self, key: Fingerprint, records: Vec<ResourceRecord>);

    /// `None` deletes the key. `Some(record)` deletes the matching record and
    /// keeps the key, even when the list becomes empty.
    fn remove(&self, key: &Fingerprint, record: Option<&ResourceRecord>) -> bool;

    fn save(&self) -> Result<(), DomainError>;

    /// Merges the persisted table into memory: persisted keys win, keys only
    /// present in memory are kept.
    fn load(&self) -> Result<(), DomainError>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
