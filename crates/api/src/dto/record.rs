use recordbook_domain::ResourceRecord;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct RecordDto {
    pub name: String,
    pub record_type: String,
    pub class: String,
    pub ttl: u32,
    pub value: String,
}

impl From<&ResourceRecord> for RecordDto {
    fn from(record: &ResourceRecord) -> Self {
        Self {
            name: record.name.to_string(),
            record_type: record.record_type().to_string(),
            class: record.class.to_string(),
            ttl: record.ttl,
            value: record.data.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateRecordsRequest {
    pub name: String,
    pub record_type: String,
    pub class: Option<String>,
    pub ttl: u32,
    pub values: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateRecordRequest {
    pub name: String,
    pub record_type: String,
    pub class: Option<String>,
    pub ttl: u32,
    pub old_value: String,
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct ReplaceRecordsRequest {
    pub ttl: u32,
    pub class: Option<String>,
    #[serde(default)]
    pub values: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct DeleteRecordQuery {
    pub value: Option<String>,
}
