use burrow_dns_domain::{DomainError, RecordType};
use std::net::IpAddr;
use std::sync::Arc;

/// The local record database the resolver and the loader talk to.
///
/// Every operation normalizes its name argument internally (lower-case,
/// trailing dot) and is safe for concurrent invocation; none of them
/// suspends or touches I/O, so the trait is deliberately synchronous.
pub trait RecordStore: Send + Sync {
    /// Adds a forward record. A name containing `*` or `?` goes to the
    /// wildcard table; an exact name also installs the matching PTR
    /// entry, overwriting whoever held that address before.
    fn add_record(&self, domain: &str, ip: IpAddr) -> Result<(), DomainError>;

    /// Installs a PTR mapping directly, overwriting any existing one.
    fn add_ptr_record(&self, ip: IpAddr, domain: &str) -> Result<(), DomainError>;

    /// Removes `ip` from the record for `domain`, or every address when
    /// `ip` is `None`. Synthesized PTR entries are torn down only while
    /// they still point at the removing domain. Removing what is not
    /// there is a no-op.
    fn remove_record(&self, domain: &str, ip: Option<IpAddr>);

    fn remove_ptr_record(&self, ip: IpAddr);

    /// All addresses for `domain` of the given type: the exact record if
    /// it has any, otherwise the union over matching wildcard patterns.
    /// The returned list is a private copy.
    fn get_records(&self, domain: &str, record_type: RecordType) -> Vec<IpAddr>;

    /// Whether `get_records` would return anything, without building the
    /// list.
    fn has_record(&self, domain: &str, record_type: RecordType) -> bool;

    /// Looks up the owning domain for a reverse-DNS query name
    /// (`...in-addr.arpa.` / `...ip6.arpa.`). A name that does not parse
    /// as a reverse name is simply not found.
    fn get_ptr_record(&self, reverse_name: &str) -> Option<Arc<str>>;

    fn has_ptr_record(&self, reverse_name: &str) -> bool;

    /// Drops every record, pattern, and PTR entry in one atomic step.
    fn clear(&self);
}
