use super::{DomainName, RecordType};
use crate::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};

const MAX_CHARACTER_STRING_LEN: usize = 255;

/// Typed body of a resource record. The set of variants is closed: every
/// type the store can persist or answer with has exactly one variant here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordData {
    A(Ipv4Addr),
    Aaaa(Ipv6Addr),
    Cname(DomainName),
    Ns(DomainName),
    Ptr(DomainName),
    Mx {
        preference: u16,
        exchange: DomainName,
    },
    Txt(Vec<String>),
}

impl RecordData {
    pub fn record_type(&self) -> RecordType {
        match self {
            RecordData::A(_) => RecordType::A,
            RecordData::Aaaa(_) => RecordType::AAAA,
            RecordData::Cname(_) => RecordType::CNAME,
            RecordData::Ns(_) => RecordType::NS,
            RecordData::Ptr(_) => RecordType::PTR,
            RecordData::Mx { .. } => RecordType::MX,
            RecordData::Txt(_) => RecordType::TXT,
        }
    }

    /// Parses the presentation form of a body for the given type.
    ///
    /// MX takes `"<preference> <exchange>"`. TXT takes either a bare string,
    /// kept verbatim as one character-string, or one or more quoted strings
    /// in the form `Display` produces (`\"`, `\\` and `\DDD` escapes).
    pub fn parse(record_type: RecordType, value: &str) -> Result<Self, DomainError> {
        let value = value.trim();
        let invalid = |reason: String| DomainError::InvalidRecordData {
            record_type,
            reason,
        };

        match record_type {
            RecordType::A => value
                .parse::<Ipv4Addr>()
                .map(RecordData::A)
                .map_err(|_| invalid(format!("'{}' is not an IPv4 address", value))),
            RecordType::AAAA => value
                .parse::<Ipv6Addr>()
                .map(RecordData::Aaaa)
                .map_err(|_| invalid(format!("'{}' is not an IPv6 address", value))),
            RecordType::CNAME => DomainName::parse(value).map(RecordData::Cname),
            RecordType::NS => DomainName::parse(value).map(RecordData::Ns),
            RecordType::PTR => DomainName::parse(value).map(RecordData::Ptr),
            RecordType::MX => {
                let (preference, exchange) = value
                    .split_once(char::is_whitespace)
                    .ok_or_else(|| invalid("expected '<preference> <exchange>'".to_string()))?;
                let preference = preference
                    .parse::<u16>()
                    .map_err(|_| invalid(format!("bad MX preference '{}'", preference)))?;
                Ok(RecordData::Mx {
                    preference,
                    exchange: DomainName::parse(exchange)?,
                })
            }
            RecordType::TXT => {
                let strings = if value.starts_with('"') {
                    parse_quoted_strings(value).map_err(invalid)?
                } else {
                    vec![value.to_string()]
                };
                if strings.iter().any(|s| s.len() > MAX_CHARACTER_STRING_LEN) {
                    return Err(invalid(format!(
                        "TXT string longer than {} bytes",
                        MAX_CHARACTER_STRING_LEN
                    )));
                }
                Ok(RecordData::Txt(strings))
            }
        }
    }
}

impl fmt::Display for RecordData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordData::A(addr) => write!(f, "{}", addr),
            RecordData::Aaaa(addr) => write!(f, "{}", addr),
            RecordData::Cname(name) | RecordData::Ns(name) | RecordData::Ptr(name) => {
                write!(f, "{}", name)
            }
            RecordData::Mx {
                preference,
                exchange,
            } => write!(f, "{} {}", preference, exchange),
            RecordData::Txt(strings) => {
                for (i, s) in strings.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write_quoted(f, s)?;
                }
                Ok(())
            }
        }
    }
}

fn write_quoted(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    f.write_str("\"")?;
    for c in s.chars() {
        match c {
            '"' | '\\' => write!(f, "\\{}", c)?,
            c if c.is_ascii_control() => write!(f, "\\{:03}", c as u8)?,
            c => write!(f, "{}", c)?,
        }
    }
    f.write_str("\"")
}

/// Splits `"a" "b\"c"` into its character-strings, undoing the escapes
/// written by `write_quoted`.
fn parse_quoted_strings(input: &str) -> Result<Vec<String>, String> {
    let mut strings = Vec::new();
    let mut bytes = input.bytes().peekable();

    loop {
        while bytes.next_if(u8::is_ascii_whitespace).is_some() {}
        match bytes.next() {
            None => break,
            Some(b'"') => {}
            Some(_) => return Err(format!("expected a quoted string in '{}'", input)),
        }

        let mut current = Vec::new();
        loop {
            match bytes.next() {
                None => return Err(format!("unterminated quoted string in '{}'", input)),
                Some(b'"') => break,
                Some(b'\\') => {
                    let next = bytes
                        .next()
                        .ok_or_else(|| format!("dangling escape in '{}'", input))?;
                    if next.is_ascii_digit() {
                        let d2 = bytes.next().filter(u8::is_ascii_digit);
                        let d3 = bytes.next().filter(u8::is_ascii_digit);
                        let (d2, d3) = d2
                            .zip(d3)
                            .ok_or_else(|| format!("bad decimal escape in '{}'", input))?;
                        let value = u16::from(next - b'0') * 100
                            + u16::from(d2 - b'0') * 10
                            + u16::from(d3 - b'0');
                        let value = u8::try_from(value)
                            .map_err(|_| format!("escape out of range in '{}'", input))?;
                        current.push(value);
                    } else {
                        current.push(next);
                    }
                }
                Some(b) => current.push(b),
            }
        }
        let text = String::from_utf8(current)
            .map_err(|_| format!("escaped bytes are not UTF-8 in '{}'", input))?;
        strings.push(text);
    }

    Ok(strings)
}
