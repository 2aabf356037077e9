pub mod create;
pub mod delete;
pub mod get;
pub mod persist;
pub mod replace;
pub mod update;

pub use create::CreateRecordsUseCase;
pub use delete::DeleteRecordsUseCase;
pub use get::GetRecordsUseCase;
pub use persist::PersistStoreUseCase;
pub use replace::ReplaceRecordsUseCase;
pub use update::UpdateRecordUseCase;

use recordbook_domain::{
    DomainError, DomainName, Fingerprint, RecordClass, RecordData, RecordType, ResourceRecord,
};

/// Owner name and type of a record set, parsed from user input.
#[derive(Debug, Clone)]
pub struct RecordSetKey {
    pub name: DomainName,
    pub record_type: RecordType,
}

impl RecordSetKey {
    pub fn parse(name: &str, record_type: &str) -> Result<Self, DomainError> {
        let name = DomainName::parse(name)?;
        let record_type = record_type
            .parse::<RecordType>()
            .map_err(DomainError::UnsupportedRecordType)?;
        Ok(Self { name, record_type })
    }

    pub fn fingerprint(&self) -> Fingerprint {
        Fingerprint::of(&self.name, self.record_type)
    }

    pub fn record(
        &self,
        class: RecordClass,
        ttl: u32,
        value: &str,
    ) -> Result<ResourceRecord, DomainError> {
        let data = RecordData::parse(self.record_type, value)?;
        Ok(ResourceRecord::new(self.name.clone(), class, ttl, data))
    }

    pub fn records(
        &self,
        class: RecordClass,
        ttl: u32,
        values: &[String],
    ) -> Result<Vec<ResourceRecord>, DomainError> {
        values
            .iter()
            .map(|value| self.record(class, ttl, value))
            .collect()
    }
}

pub(crate) fn parse_class(class: Option<&str>) -> Result<RecordClass, DomainError> {
    match class {
        None => Ok(RecordClass::IN),
        Some(raw) => raw
            .parse::<RecordClass>()
            .map_err(DomainError::InvalidRecordClass),
    }
}
