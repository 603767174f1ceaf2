//! Glob matching for wildcard patterns. `?` consumes exactly one byte,
//! `*` zero or more (dots included), anchored at both ends. A pattern
//! beginning `*.` requires the star to consume at least one byte, so
//! `*.autoco.internal.` covers the subtree but never the apex itself.

/// Both `pattern` and `name` must already be normalized FQDNs.
pub(crate) fn matches(pattern: &str, name: &str) -> bool {
    match_bytes(pattern.as_bytes(), name.as_bytes(), 0, 0)
}

fn match_bytes(pattern: &[u8], name: &[u8], pi: usize, ni: usize) -> bool {
    if pi == pattern.len() {
        return ni == name.len();
    }

    match pattern[pi] {
        b'*' => {
            if pi == 0 && pattern.get(1) == Some(&b'.') {
                // Leading "*." star is the one place a star may not match
                // the empty string.
                (ni + 1..=name.len()).any(|end| match_bytes(pattern, name, 1, end))
            } else {
                match_bytes(pattern, name, pi + 1, ni)
                    || (ni < name.len() && match_bytes(pattern, name, pi, ni + 1))
            }
        }
        b'?' => ni < name.len() && match_bytes(pattern, name, pi + 1, ni + 1),
        literal => ni < name.len() && name[ni] == literal && match_bytes(pattern, name, pi + 1, ni + 1),
    }
}
