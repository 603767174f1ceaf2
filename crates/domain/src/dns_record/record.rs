use super::RecordType;
use std::net::IpAddr;
use std::sync::Arc;

/// One forward record as handed to the store and, on answers, to the
/// listener. The TTL is a fixed configured value; the store itself does
/// not age records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsRecord {
    pub domain: Arc<str>,
    pub record_type: RecordType,
    pub address: IpAddr,
    pub ttl: u32,
}

impl DnsRecord {
    pub fn new(domain: impl Into<Arc<str>>, address: IpAddr, ttl: u32) -> Self {
        Self {
            domain: domain.into(),
            record_type: RecordType::from_address(&address),
            address,
            ttl,
        }
    }
}
