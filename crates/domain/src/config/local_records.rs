use crate::dns_record::DnsRecord;
use crate::errors::DomainError;
use crate::fqdn;
use serde::{Deserialize, Serialize};
use std::net::IpAddr;

/// One operator-authored forward record. The hostname may be bare (the
/// zone comes from `domain` or the configured default) or a full name;
/// wildcard hostnames (`*`, `?`) are accepted and go to the pattern table.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LocalDnsRecord {
    pub hostname: String,

    #[serde(default)]
    pub domain: Option<String>,

    pub ip: String,

    #[serde(default)]
    pub ttl: Option<u32>,
}

impl LocalDnsRecord {
    pub fn fqdn(&self, default_domain: Option<&str>) -> String {
        if let Some(ref domain) = self.domain {
            format!("{}.{}", self.hostname, domain)
        } else if let Some(default) = default_domain {
            format!("{}.{}", self.hostname, default)
        } else {
            self.hostname.clone()
        }
    }

    /// Parses the entry into a store-ready record. An unparseable address
    /// or an empty name is the only way this fails; the loader logs and
    /// drops such entries rather than aborting startup.
    pub fn to_record(
        &self,
        default_domain: Option<&str>,
        default_ttl: u32,
    ) -> Result<DnsRecord, DomainError> {
        let address: IpAddr = self
            .ip
            .parse()
            .map_err(|_| DomainError::InvalidIpAddress(self.ip.clone()))?;
        let name = fqdn::normalize(&self.fqdn(default_domain))?;
        Ok(DnsRecord::new(name, address, self.ttl.unwrap_or(default_ttl)))
    }
}

/// A manually-authored PTR mapping, applied after the forward records so
/// it wins over any synthesized entry for the same address.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PtrOverride {
    pub ip: String,

    pub hostname: String,
}

impl PtrOverride {
    pub fn address(&self) -> Result<IpAddr, DomainError> {
        self.ip
            .parse()
            .map_err(|_| DomainError::InvalidIpAddress(self.ip.clone()))
    }
}
