use crate::dns_record::ResourceRecord;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Per-key aggregate held by the record store.
///
/// `ttl` belongs to the entry, not to the records: it is taken from the
/// first record when the entry is created (or from the first element of an
/// override) and is not touched by later appends, even though each record
/// still carries its own TTL on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordEntry {
    pub records: Arc<Vec<ResourceRecord>>,

    pub ttl: u32,

    /// Unix seconds.
    pub created: i64,
}

impl RecordEntry {
    pub fn new(records: Vec<ResourceRecord>, ttl: u32, created: i64) -> Self {
        Self {
            records: Arc::new(records),
            ttl,
            created,
        }
    }

    /// An entry with `ttl <= 1` never expires.
    pub fn is_expired_at(&self, now_secs: i64) -> bool {
        self.ttl > 1 && self.created.saturating_add(i64::from(self.ttl)) < now_secs
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
