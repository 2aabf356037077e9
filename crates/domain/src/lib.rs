//! Recordbook domain layer
pub mod config;
pub mod dns_record;
pub mod entry;
pub mod errors;

pub use config::{CliOverrides, Config};
pub use dns_record::{
    record_identity, same_record, DomainName, Fingerprint, RecordClass, RecordData, RecordType,
    ResourceRecord,
};
pub use entry::RecordEntry;
pub use errors::DomainError;
