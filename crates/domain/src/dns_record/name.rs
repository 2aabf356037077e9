use crate::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const MAX_LABEL_LEN: usize = 63;
pub const MAX_NAME_LEN: usize = 255;

/// A fully-qualified domain name kept in uncompressed wire form:
/// length-prefixed labels terminated by the zero-length root label.
///
/// Label bytes are stored exactly as received; no case folding happens here,
/// so `Example.com.` and `example.com.` are different names.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DomainName {
    wire: Vec<u8>,
}

impl DomainName {
    pub fn root() -> Self {
        Self { wire: vec![0] }
    }

    /// Parses presentation form (`www.example.com` or `www.example.com.`).
    /// Supports `\.`, `\\` and `\DDD` escapes inside labels.
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(DomainError::InvalidDomainName("empty name".to_string()));
        }
        if input == "." {
            return Ok(Self::root());
        }

        let mut labels: Vec<Vec<u8>> = Vec::new();
        let mut current = Vec::new();
        let mut bytes = input.bytes().peekable();

        while let Some(b) = bytes.next() {
            match b {
                b'.' => {
                    if current.is_empty() {
                        return Err(DomainError::InvalidDomainName(format!(
                            "empty label in '{}'",
                            input
                        )));
                    }
                    labels.push(std::mem::take(&mut current));
                }
                b'\\' => {
                    let next = bytes.next().ok_or_else(|| {
                        DomainError::InvalidDomainName(format!("dangling escape in '{}'", input))
                    })?;
                    if next.is_ascii_digit() {
                        let d2 = bytes.next().filter(u8::is_ascii_digit);
                        let d3 = bytes.next().filter(u8::is_ascii_digit);
                        let (d2, d3) = d2.zip(d3).ok_or_else(|| {
                            DomainError::InvalidDomainName(format!(
                                "bad decimal escape in '{}'",
                                input
                            ))
                        })?;
                        let value = (next - b'0') as u16 * 100
                            + (d2 - b'0') as u16 * 10
                            + (d3 - b'0') as u16;
                        let value = u8::try_from(value).map_err(|_| {
                            DomainError::InvalidDomainName(format!(
                                "escape out of range in '{}'",
                                input
                            ))
                        })?;
                        current.push(value);
                    } else {
                        current.push(next);
                    }
                }
                other => current.push(other),
            }
        }
        if !current.is_empty() {
            labels.push(current);
        }

        Self::from_labels(labels.iter().map(Vec::as_slice))
    }

    pub fn from_labels<'a, I>(labels: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = &'a [u8]>,
    {
        let mut wire = Vec::new();
        for label in labels {
            if label.is_empty() {
                return Err(DomainError::InvalidDomainName(
                    "empty label".to_string(),
                ));
            }
            if label.len() > MAX_LABEL_LEN {
                return Err(DomainError::InvalidDomainName(format!(
                    "label longer than {} bytes",
                    MAX_LABEL_LEN
                )));
            }
            wire.push(label.len() as u8);
            wire.extend_from_slice(label);
        }
        wire.push(0);

        if wire.len() > MAX_NAME_LEN {
            return Err(DomainError::InvalidDomainName(format!(
                "name longer than {} bytes",
                MAX_NAME_LEN
            )));
        }
        Ok(Self { wire })
    }

    /// Uncompressed wire encoding, root label included.
    pub fn to_wire(&self) -> &[u8] {
        &self.wire
    }

    pub fn labels(&self) -> Labels<'_> {
        Labels {
            rest: &self.wire,
        }
    }

    pub fn is_root(&self) -> bool {
        self.wire.len() == 1
    }
}

pub struct Labels<'a> {
    rest: &'a [u8],
}

impl<'a> Iterator for Labels<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        let (&len, tail) = self.rest.split_first()?;
        if len == 0 || tail.len() < len as usize {
            return None;
        }
        let (label, rest) = tail.split_at(len as usize);
        self.rest = rest;
        Some(label)
    }
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            return f.write_str(".");
        }
        for label in self.labels() {
            for &b in label {
                match b {
                    b'.' | b'\\' => write!(f, "\\{}", b as char)?,
                    0x21..=0x7e => write!(f, "{}", b as char)?,
                    _ => write!(f, "\\{:03}", b)?,
                }
            }
            f.write_str(".")?;
        }
        Ok(())
    }
}

impl FromStr for DomainName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
