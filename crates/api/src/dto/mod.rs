pub mod record;

pub use record::{
    CreateRecordsRequest, DeleteRecordQuery, RecordDto, ReplaceRecordsRequest,
    UpdateRecordRequest,
};
