pub mod config;
pub mod dns_query;
pub mod dns_record;
pub mod errors;
pub mod fqdn;
pub mod reverse_name;

pub use config::{Config, ConfigError, DnsConfig, LocalDnsRecord, LoggingConfig, PtrOverride};
pub use dns_query::DnsQuery;
pub use dns_record::{DnsRecord, RecordType};
pub use errors::DomainError;
