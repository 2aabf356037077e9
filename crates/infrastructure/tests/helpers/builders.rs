#![allow(dead_code)]
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{Name, RecordType as HickoryRecordType};
use recordbook_domain::{
    DomainName, Fingerprint, RecordClass, RecordData, RecordType, ResourceRecord,
};
use std::net::Ipv4Addr;

pub fn key(name: &str, record_type: RecordType) -> Fingerprint {
    Fingerprint::of(&DomainName::parse(name).unwrap(), record_type)
}

pub fn a_record(name: &str, ttl: u32, addr: [u8; 4]) -> ResourceRecord {
    ResourceRecord::new(
        DomainName::parse(name).unwrap(),
        RecordClass::IN,
        ttl,
        RecordData::A(Ipv4Addr::from(addr)),
    )
}

pub fn txt_record(name: &str, ttl: u32, text: &str) -> ResourceRecord {
    ResourceRecord::new(
        DomainName::parse(name).unwrap(),
        RecordClass::IN,
        ttl,
        RecordData::Txt(vec![text.to_string()]),
    )
}

pub fn query_message(id: u16, name: &str, record_type: HickoryRecordType) -> Message {
    let mut message = Message::new();
    message
        .set_id(id)
        .set_message_type(MessageType::Query)
        .set_op_code(OpCode::Query)
        .set_recursion_desired(true);
    message.add_query(Query::query(Name::from_ascii(name).unwrap(), record_type));
    message
}
