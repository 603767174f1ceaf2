use crate::errors::DomainError;
use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

/// The record types the local store serves. Everything else is the
/// upstream's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    AAAA,
    PTR,
}

impl RecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::AAAA => "AAAA",
            RecordType::PTR => "PTR",
        }
    }

    pub fn to_u16(&self) -> u16 {
        match self {
            RecordType::A => 1,
            RecordType::PTR => 12,
            RecordType::AAAA => 28,
        }
    }

    pub fn from_u16(code: u16) -> Option<Self> {
        match code {
            1 => Some(RecordType::A),
            12 => Some(RecordType::PTR),
            28 => Some(RecordType::AAAA),
            _ => None,
        }
    }

    /// The forward type an address of this family is served under.
    pub fn from_address(address: &IpAddr) -> Self {
        match address {
            IpAddr::V4(_) => RecordType::A,
            IpAddr::V6(_) => RecordType::AAAA,
        }
    }

    /// A <-> AAAA, used by the NODATA decision. PTR has no sibling.
    pub fn sibling(&self) -> Option<Self> {
        match self {
            RecordType::A => Some(RecordType::AAAA),
            RecordType::AAAA => Some(RecordType::A),
            RecordType::PTR => None,
        }
    }

    pub fn is_address(&self) -> bool {
        matches!(self, RecordType::A | RecordType::AAAA)
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "A" => Ok(RecordType::A),
            "AAAA" => Ok(RecordType::AAAA),
            "PTR" => Ok(RecordType::PTR),
            _ => Err(DomainError::InvalidRecordType(s.to_string())),
        }
    }
}
