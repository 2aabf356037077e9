#![allow(dead_code)]
use recordbook_domain::{DomainName, RecordClass, RecordData, ResourceRecord};
use std::net::Ipv4Addr;

pub struct RecordBuilder {
    name: String,
    class: RecordClass,
    ttl: u32,
    data: RecordData,
}

impl RecordBuilder {
    pub fn new() -> Self {
        Self {
            name: "example.com.".to_string(),
            class: RecordClass::IN,
            ttl: 100,
            data: RecordData::A(Ipv4Addr::new(127, 0, 0, 1)),
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn class(mut self, class: RecordClass) -> Self {
        self.class = class;
        self
    }

    pub fn ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn a(mut self, ip: &str) -> Self {
        self.data = RecordData::A(ip.parse().unwrap());
        self
    }

    pub fn data(mut self, data: RecordData) -> Self {
        self.data = data;
        self
    }

    pub fn build(self) -> ResourceRecord {
        ResourceRecord::new(
            DomainName::parse(&self.name).unwrap(),
            self.class,
            self.ttl,
            self.data,
        )
    }
}
