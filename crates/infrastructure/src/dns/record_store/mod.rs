//! The in-memory local record database: an exact-name trie, a wildcard
//! pattern table, and the reverse (address -> name) table, kept mutually
//! consistent under one readers-writer lock.

mod name_trie;
mod record_set;
mod wildcard;

use burrow_dns_application::ports::RecordStore;
use burrow_dns_domain::reverse_name::{canonical_ip, reverse_name_to_ip};
use burrow_dns_domain::{fqdn, DomainError, RecordType};
use compact_str::CompactString;
use name_trie::NameTrie;
use record_set::RecordSet;
use rustc_hash::FxBuildHasher;
use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

#[derive(Default)]
struct RecordTables {
    exact: NameTrie,
    wildcards: HashMap<CompactString, RecordSet, FxBuildHasher>,
    ptr: HashMap<IpAddr, Arc<str>, FxBuildHasher>,
}

impl RecordTables {
    /// Deletes the PTR entry for `ip` only while it still points at
    /// `domain`; a later add may have reassigned the address.
    fn remove_ptr_if_owned(&mut self, ip: IpAddr, domain: &str) {
        if self.ptr.get(&ip).is_some_and(|owner| owner.as_ref() == domain) {
            self.ptr.remove(&ip);
        }
    }
}

/// Thread-safe store behind the [`RecordStore`] port. A single lock spans
/// all three tables, so a reader never observes a forward record without
/// its PTR side or vice versa; returned lists are copied out while the
/// guard is held.
#[derive(Default)]
pub struct InMemoryRecordStore {
    tables: RwLock<RecordTables>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, RecordTables> {
        self.tables.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, RecordTables> {
        self.tables.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl RecordStore for InMemoryRecordStore {
    fn add_record(&self, domain: &str, ip: IpAddr) -> Result<(), DomainError> {
        let name = fqdn::normalize(domain)?;
        let ip = canonical_ip(ip);

        let mut tables = self.write();
        if fqdn::is_wildcard(&name) {
            tables
                .wildcards
                .entry(CompactString::new(&name))
                .or_default()
                .push(ip);
        } else {
            tables.exact.entry(&name).push(ip);
            tables.ptr.insert(ip, Arc::from(name.as_str()));
        }
        debug!(domain = %name, ip = %ip, "Local record added");
        Ok(())
    }

    fn add_ptr_record(&self, ip: IpAddr, domain: &str) -> Result<(), DomainError> {
        let name = fqdn::normalize(domain)?;
        let ip = canonical_ip(ip);
        self.write().ptr.insert(ip, Arc::from(name.as_str()));
        debug!(ip = %ip, domain = %name, "PTR record added");
        Ok(())
    }

    fn remove_record(&self, domain: &str, ip: Option<IpAddr>) {
        let Ok(name) = fqdn::normalize(domain) else {
            return;
        };

        let mut guard = self.write();
        let tables = &mut *guard;

        if fqdn::is_wildcard(&name) {
            match ip {
                None => {
                    tables.wildcards.remove(name.as_str());
                }
                Some(ip) => {
                    let ip = canonical_ip(ip);
                    if let Some(set) = tables.wildcards.get_mut(name.as_str()) {
                        set.remove(ip);
                        if set.is_empty() {
                            tables.wildcards.remove(name.as_str());
                        }
                    }
                }
            }
            return;
        }

        match ip {
            None => {
                let Some(set) = tables.exact.take(&name) else {
                    return;
                };
                for addr in set.iter_all() {
                    tables.remove_ptr_if_owned(addr, &name);
                }
            }
            Some(ip) => {
                let ip = canonical_ip(ip);
                let Some(set) = tables.exact.get_mut(&name) else {
                    return;
                };
                set.remove(ip);
                if set.is_empty() {
                    tables.exact.take(&name);
                }
                tables.remove_ptr_if_owned(ip, &name);
            }
        }
        debug!(domain = %name, "Local record removed");
    }

    fn remove_ptr_record(&self, ip: IpAddr) {
        self.write().ptr.remove(&canonical_ip(ip));
    }

    fn get_records(&self, domain: &str, record_type: RecordType) -> Vec<IpAddr> {
        if !record_type.is_address() {
            return Vec::new();
        }
        let Ok(name) = fqdn::normalize(domain) else {
            return Vec::new();
        };

        let tables = self.read();
        if let Some(set) = tables.exact.get(&name) {
            let records = set.addresses(record_type);
            if !records.is_empty() {
                return records;
            }
        }

        // No exact answer for this type: union every matching pattern.
        let mut records = Vec::new();
        for (pattern, set) in &tables.wildcards {
            if wildcard::matches(pattern, &name) {
                records.extend(set.addresses(record_type));
            }
        }
        records
    }

    fn has_record(&self, domain: &str, record_type: RecordType) -> bool {
        if !record_type.is_address() {
            return false;
        }
        let Ok(name) = fqdn::normalize(domain) else {
            return false;
        };

        let tables = self.read();
        if tables.exact.get(&name).is_some_and(|set| set.has(record_type)) {
            return true;
        }
        tables
            .wildcards
            .iter()
            .any(|(pattern, set)| set.has(record_type) && wildcard::matches(pattern, &name))
    }

    fn get_ptr_record(&self, reverse_name: &str) -> Option<Arc<str>> {
        let name = fqdn::normalize(reverse_name).ok()?;
        let ip = reverse_name_to_ip(&name)?;
        self.read().ptr.get(&ip).cloned()
    }

    fn has_ptr_record(&self, reverse_name: &str) -> bool {
        let Ok(name) = fqdn::normalize(reverse_name) else {
            return false;
        };
        let Some(ip) = reverse_name_to_ip(&name) else {
            return false;
        };
        self.read().ptr.contains_key(&ip)
    }

    fn clear(&self) {
        *self.write() = RecordTables::default();
        debug!("Record store cleared");
    }
}
