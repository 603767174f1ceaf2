use crate::ports::RecordStore;
use burrow_dns_domain::{DnsQuery, RecordType};
use std::net::IpAddr;
use std::sync::Arc;
use tracing::debug;

/// The payload of a locally synthesized answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocalAnswer {
    /// One A or AAAA resource record per address, in store order.
    Addresses(Vec<IpAddr>),
    /// The owning name for a PTR question.
    Pointer(Arc<str>),
}

/// What the listener should do with a question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocalDecision {
    /// Reply authoritatively with these records.
    Answer(LocalAnswer),
    /// Reply authoritatively empty: NOERROR, zero answers, AA set. The
    /// name exists in the store, just not for the queried type.
    NoData,
    /// The store knows nothing about this name; hand it upstream.
    Forward,
}

/// Decides, for each inbound question, whether the proxy answers it from
/// the local record store or forwards it upstream. Stateless; every
/// request handler shares one instance.
pub struct ResolveLocalQueryUseCase {
    record_store: Arc<dyn RecordStore>,
}

impl ResolveLocalQueryUseCase {
    pub fn new(record_store: Arc<dyn RecordStore>) -> Self {
        Self { record_store }
    }

    pub fn execute(&self, query: &DnsQuery) -> LocalDecision {
        match query.record_type {
            RecordType::A | RecordType::AAAA => self.resolve_address(query),
            RecordType::PTR => self.resolve_pointer(query),
        }
    }

    fn resolve_address(&self, query: &DnsQuery) -> LocalDecision {
        let records = self
            .record_store
            .get_records(&query.domain, query.record_type);
        if !records.is_empty() {
            debug!(
                domain = %query.domain,
                record_type = %query.record_type,
                answers = records.len(),
                "Answering from local records"
            );
            return LocalDecision::Answer(LocalAnswer::Addresses(records));
        }

        // A name we hold under the sibling type gets an authoritative
        // empty reply; forwarding it would let the upstream contradict us.
        let Some(sibling) = query.record_type.sibling() else {
            return LocalDecision::Forward;
        };
        if self.record_store.has_record(&query.domain, sibling) {
            debug!(
                domain = %query.domain,
                record_type = %query.record_type,
                "Local name has no records of the queried type (NODATA)"
            );
            return LocalDecision::NoData;
        }

        LocalDecision::Forward
    }

    fn resolve_pointer(&self, query: &DnsQuery) -> LocalDecision {
        match self.record_store.get_ptr_record(&query.domain) {
            Some(name) => {
                debug!(reverse_name = %query.domain, domain = %name, "Answering PTR from local records");
                LocalDecision::Answer(LocalAnswer::Pointer(name))
            }
            None => LocalDecision::Forward,
        }
    }
}
