use super::{DomainName, RecordType};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Store key: the owner name's raw wire bytes followed by the big-endian
/// type code.
///
/// Class and body do not take part, so every record sharing a name and type
/// lands in the same entry.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fingerprint(Box<[u8]>);

impl Fingerprint {
    pub fn of(name: &DomainName, record_type: RecordType) -> Self {
        let wire = name.to_wire();
        let mut bytes = Vec::with_capacity(wire.len() + 2);
        bytes.extend_from_slice(wire);
        bytes.extend_from_slice(&record_type.to_u16().to_be_bytes());
        Self(bytes.into_boxed_slice())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Fingerprint(")?;
        for b in self.0.iter() {
            write!(f, "{:02x}", b)?;
        }
        f.write_str(")")
    }
}
