use super::RecordType;
use std::sync::Arc;

/// A single parsed question from the listener. The name is carried as
/// received on the wire; normalization happens inside the record store.
#[derive(Debug, Clone)]
pub struct DnsQuery {
    pub domain: Arc<str>,
    pub record_type: RecordType,
}

impl DnsQuery {
    pub fn new(domain: impl Into<Arc<str>>, record_type: RecordType) -> Self {
        Self {
            domain: domain.into(),
            record_type,
        }
    }
}
