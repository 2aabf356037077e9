use crate::dns_record::RecordType;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid {record_type} record data: {reason}")]
    InvalidRecordData {
        record_type: RecordType,
        reason: String,
    },

    #[error("Unsupported record type: {0}")]
    UnsupportedRecordType(String),

    #[error("Invalid record class: {0}")]
    InvalidRecordClass(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("No existing record matches: {0}")]
    RecordMismatch(String),

    #[error("Persistence error: {0}")]
    PersistenceError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
