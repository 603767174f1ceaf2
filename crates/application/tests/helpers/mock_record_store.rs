#![allow(dead_code)]

use burrow_dns_application::ports::RecordStore;
use burrow_dns_domain::{fqdn, DomainError, RecordType};
use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::{Arc, RwLock};

// ============================================================================
// Mock RecordStore
// ============================================================================

/// Canned-response store for exercising use cases without the real trie.
/// Lookups key off the normalized name; mutations are recorded so tests
/// can assert what the use case asked the store to do.
#[derive(Default)]
pub struct MockRecordStore {
    records: RwLock<HashMap<(String, RecordType), Vec<IpAddr>>>,
    ptr: RwLock<HashMap<String, Arc<str>>>,
    pub added: RwLock<Vec<(String, IpAddr)>>,
    pub ptr_added: RwLock<Vec<(IpAddr, String)>>,
    fail_adds: RwLock<bool>,
}

impl MockRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_records(&self, domain: &str, record_type: RecordType, addresses: &[&str]) {
        let key = (fqdn::normalize(domain).unwrap(), record_type);
        let addresses = addresses.iter().map(|a| a.parse().unwrap()).collect();
        self.records.write().unwrap().insert(key, addresses);
    }

    pub fn set_ptr(&self, reverse_name: &str, domain: &str) {
        self.ptr
            .write()
            .unwrap()
            .insert(reverse_name.to_string(), Arc::from(domain));
    }

    pub fn set_fail_adds(&self, fail: bool) {
        *self.fail_adds.write().unwrap() = fail;
    }

    pub fn added_domains(&self) -> Vec<String> {
        self.added
            .read()
            .unwrap()
            .iter()
            .map(|(domain, _)| domain.clone())
            .collect()
    }
}

impl RecordStore for MockRecordStore {
    fn add_record(&self, domain: &str, ip: IpAddr) -> Result<(), DomainError> {
        if *self.fail_adds.read().unwrap() {
            return Err(DomainError::InvalidDomainName(domain.to_string()));
        }
        let name = fqdn::normalize(domain)?;
        self.added.write().unwrap().push((name, ip));
        Ok(())
    }

    fn add_ptr_record(&self, ip: IpAddr, domain: &str) -> Result<(), DomainError> {
        let name = fqdn::normalize(domain)?;
        self.ptr_added.write().unwrap().push((ip, name));
        Ok(())
    }

    fn remove_record(&self, _domain: &str, _ip: Option<IpAddr>) {}

    fn remove_ptr_record(&self, _ip: IpAddr) {}

    fn get_records(&self, domain: &str, record_type: RecordType) -> Vec<IpAddr> {
        let Ok(name) = fqdn::normalize(domain) else {
            return Vec::new();
        };
        self.records
            .read()
            .unwrap()
            .get(&(name, record_type))
            .cloned()
            .unwrap_or_default()
    }

    fn has_record(&self, domain: &str, record_type: RecordType) -> bool {
        !self.get_records(domain, record_type).is_empty()
    }

    fn get_ptr_record(&self, reverse_name: &str) -> Option<Arc<str>> {
        self.ptr.read().unwrap().get(reverse_name).cloned()
    }

    fn has_ptr_record(&self, reverse_name: &str) -> bool {
        self.get_ptr_record(reverse_name).is_some()
    }

    fn clear(&self) {
        self.records.write().unwrap().clear();
        self.ptr.write().unwrap().clear();
    }
}
