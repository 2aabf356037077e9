//! Conversions between the domain record model and `hickory_proto`, which
//! owns the DNS wire format.

use hickory_proto::op::Message;
use hickory_proto::rr::rdata::{A, AAAA, CNAME, MX, NS, PTR, TXT};
use hickory_proto::rr::{DNSClass, Name, RData, Record, RecordType as HickoryRecordType};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use hickory_proto::ProtoError;
use recordbook_domain::{
    DomainError, DomainName, RecordClass, RecordData, RecordType, ResourceRecord,
};

/// Bidirectional mapper between domain and hickory record types
pub struct RecordTypeMapper;

impl RecordTypeMapper {
    pub fn to_hickory(record_type: RecordType) -> HickoryRecordType {
        match record_type {
            RecordType::A => HickoryRecordType::A,
            RecordType::NS => HickoryRecordType::NS,
            RecordType::CNAME => HickoryRecordType::CNAME,
            RecordType::PTR => HickoryRecordType::PTR,
            RecordType::MX => HickoryRecordType::MX,
            RecordType::TXT => HickoryRecordType::TXT,
            RecordType::AAAA => HickoryRecordType::AAAA,
        }
    }

    /// Returns `None` for types the store cannot hold.
    pub fn from_hickory(hickory_type: HickoryRecordType) -> Option<RecordType> {
        match hickory_type {
            HickoryRecordType::A => Some(RecordType::A),
            HickoryRecordType::NS => Some(RecordType::NS),
            HickoryRecordType::CNAME => Some(RecordType::CNAME),
            HickoryRecordType::PTR => Some(RecordType::PTR),
            HickoryRecordType::MX => Some(RecordType::MX),
            HickoryRecordType::TXT => Some(RecordType::TXT),
            HickoryRecordType::AAAA => Some(RecordType::AAAA),
            _ => None,
        }
    }
}

pub struct RecordConverter;

impl RecordConverter {
    /// Label bytes are copied as-is, so the store sees the query name with
    /// its original letter case.
    pub fn name_from_hickory(name: &Name) -> Result<DomainName, DomainError> {
        DomainName::from_labels(name.iter())
    }

    pub fn name_to_hickory(name: &DomainName) -> Result<Name, ProtoError> {
        Name::from_labels(name.labels())
    }

    pub fn class_to_hickory(class: RecordClass) -> DNSClass {
        match class {
            RecordClass::IN => DNSClass::IN,
            RecordClass::CH => DNSClass::CH,
            RecordClass::HS => DNSClass::HS,
            RecordClass::Other(code) => DNSClass::Unknown(code),
        }
    }

    pub fn class_from_hickory(class: DNSClass) -> RecordClass {
        RecordClass::from_u16(u16::from(class))
    }

    pub fn to_hickory(record: &ResourceRecord) -> Result<Record, ProtoError> {
        let rdata = match &record.data {
            RecordData::A(addr) => RData::A(A(*addr)),
            RecordData::Aaaa(addr) => RData::AAAA(AAAA(*addr)),
            RecordData::Cname(target) => RData::CNAME(CNAME(Self::name_to_hickory(target)?)),
            RecordData::Ns(target) => RData::NS(NS(Self::name_to_hickory(target)?)),
            RecordData::Ptr(target) => RData::PTR(PTR(Self::name_to_hickory(target)?)),
            RecordData::Mx {
                preference,
                exchange,
            } => RData::MX(MX::new(*preference, Self::name_to_hickory(exchange)?)),
            RecordData::Txt(strings) => RData::TXT(TXT::new(strings.clone())),
        };

        let mut out = Record::from_rdata(Self::name_to_hickory(&record.name)?, record.ttl, rdata);
        out.set_dns_class(Self::class_to_hickory(record.class));
        Ok(out)
    }

    /// Returns `None` for record bodies outside the supported type set.
    pub fn from_hickory(record: &Record) -> Option<ResourceRecord> {
        let data = match record.data() {
            RData::A(a) => RecordData::A(a.0),
            RData::AAAA(aaaa) => RecordData::Aaaa(aaaa.0),
            RData::CNAME(target) => RecordData::Cname(Self::name_from_hickory(&target.0).ok()?),
            RData::NS(target) => RecordData::Ns(Self::name_from_hickory(&target.0).ok()?),
            RData::PTR(target) => RecordData::Ptr(Self::name_from_hickory(&target.0).ok()?),
            RData::MX(mx) => RecordData::Mx {
                preference: mx.preference(),
                exchange: Self::name_from_hickory(mx.exchange()).ok()?,
            },
            RData::TXT(txt) => RecordData::Txt(
                txt.txt_data()
                    .iter()
                    .map(|s| String::from_utf8_lossy(s).into_owned())
                    .collect(),
            ),
            _ => return None,
        };

        Some(ResourceRecord::new(
            Self::name_from_hickory(record.name()).ok()?,
            Self::class_from_hickory(record.dns_class()),
            record.ttl(),
            data,
        ))
    }
}

pub struct MessageCodec;

impl MessageCodec {
    pub fn decode(bytes: &[u8]) -> Result<Message, ProtoError> {
        Message::from_vec(bytes)
    }

    pub fn encode(message: &Message) -> Result<Vec<u8>, ProtoError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);
        message.emit(&mut encoder)?;
        Ok(buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    #[test]
    fn test_roundtrip_all_types() {
        for &rt in RecordType::all() {
            let hickory = RecordTypeMapper::to_hickory(rt);
            assert_eq!(RecordTypeMapper::from_hickory(hickory), Some(rt));
            assert_eq!(u16::from(hickory), rt.to_u16());
        }
    }

    #[test]
    fn test_unsupported_type_maps_to_none() {
        assert_eq!(RecordTypeMapper::from_hickory(HickoryRecordType::SRV), None);
        assert_eq!(RecordTypeMapper::from_hickory(HickoryRecordType::SOA), None);
    }

    #[test]
    fn test_name_keeps_case() {
        let name = Name::from_ascii("WWW.Example.com.").unwrap();
        let converted = RecordConverter::name_from_hickory(&name).unwrap();
        assert_eq!(converted.to_string(), "WWW.Example.com.");
        assert_eq!(RecordConverter::name_to_hickory(&converted).unwrap(), name);
    }

    #[test]
    fn test_record_conversion_keeps_class_and_ttl() {
        let record = ResourceRecord::new(
            DomainName::parse("test").unwrap(),
            RecordClass::CH,
            42,
            RecordData::A(Ipv4Addr::new(127, 0, 0, 1)),
        );

        let hickory = RecordConverter::to_hickory(&record).unwrap();
        assert_eq!(hickory.dns_class(), DNSClass::CH);
        assert_eq!(hickory.ttl(), 42);
        assert_eq!(hickory.record_type(), HickoryRecordType::A);

        assert_eq!(RecordConverter::from_hickory(&hickory), Some(record));
    }

    #[test]
    fn test_mx_and_txt_conversion() {
        let owner = DomainName::parse("example.com").unwrap();
        for data in [
            RecordData::Mx {
                preference: 10,
                exchange: DomainName::parse("mail.example.com").unwrap(),
            },
            RecordData::Txt(vec!["v=spf1 -all".to_string()]),
        ] {
            let record = ResourceRecord::new(owner.clone(), RecordClass::IN, 300, data);
            let hickory = RecordConverter::to_hickory(&record).unwrap();
            assert_eq!(RecordConverter::from_hickory(&hickory), Some(record));
        }
    }
}
