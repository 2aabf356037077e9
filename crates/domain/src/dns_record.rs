mod fingerprint;
mod identity;
mod name;
mod record;
mod record_class;
mod record_data;
mod record_type;

pub use fingerprint::Fingerprint;
pub use identity::{record_identity, same_record};
pub use name::{DomainName, Labels, MAX_LABEL_LEN, MAX_NAME_LEN};
pub use record::ResourceRecord;
pub use record_class::RecordClass;
pub use record_data::RecordData;
pub use record_type::RecordType;
