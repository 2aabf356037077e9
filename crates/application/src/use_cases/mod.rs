pub mod dns;
pub mod records;

pub use dns::LookupRecordsUseCase;
pub use records::{
    CreateRecordsUseCase, DeleteRecordsUseCase, GetRecordsUseCase, PersistStoreUseCase,
    ReplaceRecordsUseCase, UpdateRecordUseCase,
};
