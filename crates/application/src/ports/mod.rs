mod record_store;

pub use record_store::RecordStore;

// Re-export for convenience
pub use burrow_dns_domain::DnsQuery;
