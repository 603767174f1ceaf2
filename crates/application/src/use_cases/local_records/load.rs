use crate::ports::RecordStore;
use burrow_dns_domain::DnsConfig;
use std::sync::Arc;
use tracing::{debug, warn};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoadSummary {
    pub loaded: usize,
    pub skipped: usize,
}

/// Seeds the record store from configuration at startup. A malformed
/// entry is logged and dropped; it never aborts the rest of the load.
pub struct LoadLocalRecordsUseCase {
    record_store: Arc<dyn RecordStore>,
}

impl LoadLocalRecordsUseCase {
    pub fn new(record_store: Arc<dyn RecordStore>) -> Self {
        Self { record_store }
    }

    pub fn execute(&self, config: &DnsConfig) -> LoadSummary {
        let mut summary = LoadSummary::default();
        let default_domain = config.local_domain.as_deref();

        for entry in &config.local_records {
            let record = match entry.to_record(default_domain, config.local_ttl) {
                Ok(record) => record,
                Err(e) => {
                    warn!(hostname = %entry.hostname, ip = %entry.ip, error = %e, "Skipping invalid local record");
                    summary.skipped += 1;
                    continue;
                }
            };
            match self.record_store.add_record(&record.domain, record.address) {
                Ok(()) => summary.loaded += 1,
                Err(e) => {
                    warn!(domain = %record.domain, error = %e, "Skipping unstorable local record");
                    summary.skipped += 1;
                }
            }
        }

        // Overrides go in last so they win over synthesized PTR entries.
        for entry in &config.ptr_overrides {
            let address = match entry.address() {
                Ok(address) => address,
                Err(e) => {
                    warn!(ip = %entry.ip, error = %e, "Skipping invalid PTR override");
                    summary.skipped += 1;
                    continue;
                }
            };
            match self.record_store.add_ptr_record(address, &entry.hostname) {
                Ok(()) => summary.loaded += 1,
                Err(e) => {
                    warn!(ip = %entry.ip, error = %e, "Skipping invalid PTR override");
                    summary.skipped += 1;
                }
            }
        }

        debug!(
            loaded = summary.loaded,
            skipped = summary.skipped,
            "Local records loaded"
        );
        summary
    }
}
