//! FQDN normalization. Every name entering the store (adds, removals,
//! queries) goes through [`normalize`] so that map keys and comparisons
//! never observe case or a missing trailing dot.

use crate::errors::DomainError;

/// Lower-cases `name` and appends the trailing dot if missing. Empty
/// input is rejected; everything else is accepted verbatim (patterns
/// included).
pub fn normalize(name: &str) -> Result<String, DomainError> {
    if name.is_empty() {
        return Err(DomainError::InvalidDomainName(name.to_string()));
    }
    let mut fqdn = name.to_ascii_lowercase();
    if !fqdn.ends_with('.') {
        fqdn.push('.');
    }
    Ok(fqdn)
}

/// A name containing `*` or `?` anywhere is a wildcard pattern; it lives
/// in the pattern table and never in the exact-name trie.
pub fn is_wildcard(name: &str) -> bool {
    name.contains(['*', '?'])
}
