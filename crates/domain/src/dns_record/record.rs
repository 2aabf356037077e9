use super::{DomainName, RecordClass, RecordData, RecordType};
use serde::{Deserialize, Serialize};

/// One answer record: owner name, class, TTL and typed body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRecord {
    pub name: DomainName,

    pub class: RecordClass,

    pub ttl: u32,

    pub data: RecordData,
}

impl ResourceRecord {
    pub fn new(name: DomainName, class: RecordClass, ttl: u32, data: RecordData) -> Self {
        Self {
            name,
            class,
            ttl,
            data,
        }
    }

    pub fn record_type(&self) -> RecordType {
        self.data.record_type()
    }
}
