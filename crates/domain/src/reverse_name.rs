//! Conversion between IP addresses and the reverse-DNS name forms used by
//! PTR queries (`d.c.b.a.in-addr.arpa.` and the 32-nibble `ip6.arpa.`
//! form). These are the on-the-wire PTR owner names, bit for bit.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

const HEX: &[u8; 16] = b"0123456789abcdef";

/// Collapses an IPv4-mapped IPv6 address to its `IpAddr::V4` form. An
/// address whose 4-byte form exists is an IPv4 address no matter how it
/// was written, so the PTR table and the A/AAAA split both key off this.
pub fn canonical_ip(ip: IpAddr) -> IpAddr {
    match ip {
        IpAddr::V6(v6) => match v6.to_ipv4_mapped() {
            Some(v4) => IpAddr::V4(v4),
            None => IpAddr::V6(v6),
        },
        v4 => v4,
    }
}

/// The reverse-DNS owner name for `ip`: octets reversed under
/// `.in-addr.arpa.` for IPv4, 32 nibbles low-order first under
/// `.ip6.arpa.` for IPv6.
pub fn ip_to_reverse_name(ip: IpAddr) -> String {
    match canonical_ip(ip) {
        IpAddr::V4(v4) => {
            let o = v4.octets();
            format!("{}.{}.{}.{}.in-addr.arpa.", o[3], o[2], o[1], o[0])
        }
        IpAddr::V6(v6) => {
            let mut name = String::with_capacity(73);
            for byte in v6.octets().iter().rev() {
                name.push(HEX[(byte & 0x0f) as usize] as char);
                name.push('.');
                name.push(HEX[(byte >> 4) as usize] as char);
                name.push('.');
            }
            name.push_str("ip6.arpa.");
            name
        }
    }
}

/// Parses a normalized reverse-DNS name back into the IP it names.
/// Returns `None` for anything that is not a well-formed reverse name:
/// wrong suffix, wrong label count, or labels that do not parse.
pub fn reverse_name_to_ip(name: &str) -> Option<IpAddr> {
    if let Some(prefix) = name.strip_suffix(".in-addr.arpa.") {
        let octets: Vec<&str> = prefix.split('.').collect();
        if octets.len() != 4 {
            return None;
        }
        let dotted = format!("{}.{}.{}.{}", octets[3], octets[2], octets[1], octets[0]);
        return dotted.parse::<Ipv4Addr>().ok().map(IpAddr::V4);
    }

    if let Some(prefix) = name.strip_suffix(".ip6.arpa.") {
        let nibbles: Vec<&str> = prefix.split('.').collect();
        if nibbles.len() != 32 || nibbles.iter().any(|n| n.len() != 1) {
            return None;
        }
        // The name lists nibbles low-order first; rchunks walks the
        // groups back in address order, each group high nibble first.
        let mut addr = String::with_capacity(39);
        for group in nibbles.rchunks(4) {
            if !addr.is_empty() {
                addr.push(':');
            }
            for nibble in group.iter().rev() {
                addr.push_str(nibble);
            }
        }
        return addr
            .parse::<Ipv6Addr>()
            .ok()
            .map(|v6| canonical_ip(IpAddr::V6(v6)));
    }

    None
}
