use super::ResourceRecord;
use std::fmt::Write;

/// Equality key used when replacing or removing a record inside an entry.
///
/// Built from the owner name, the type mnemonic and the debug rendering of
/// the body. Class and TTL are ignored. This is not a store key; see
/// [`Fingerprint`](super::Fingerprint) for that.
pub fn record_identity(record: &ResourceRecord) -> String {
    let mut key = String::with_capacity(64);
    let _ = write!(
        key,
        "{}{}{:?}",
        record.name,
        record.record_type().as_str(),
        record.data
    );
    key
}

pub fn same_record(a: &ResourceRecord, b: &ResourceRecord) -> bool {
    record_identity(a) == record_identity(b)
}
