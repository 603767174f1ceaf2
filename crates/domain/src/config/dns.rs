use super::local_records::{LocalDnsRecord, PtrOverride};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DnsConfig {
    /// Zone appended to bare hostnames in `local_records`.
    #[serde(default)]
    pub local_domain: Option<String>,

    /// TTL stamped on every locally answered record.
    #[serde(default = "default_local_ttl")]
    pub local_ttl: u32,

    #[serde(default)]
    pub local_records: Vec<LocalDnsRecord>,

    #[serde(default)]
    pub ptr_overrides: Vec<PtrOverride>,
}

impl Default for DnsConfig {
    fn default() -> Self {
        Self {
            local_domain: None,
            local_ttl: default_local_ttl(),
            local_records: vec![],
            ptr_overrides: vec![],
        }
    }
}

fn default_local_ttl() -> u32 {
    300
}
