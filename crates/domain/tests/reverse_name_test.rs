use burrow_dns_domain::reverse_name::{canonical_ip, ip_to_reverse_name, reverse_name_to_ip};
use std::net::IpAddr;
use std::str::FromStr;

fn ip(s: &str) -> IpAddr {
    IpAddr::from_str(s).unwrap()
}

#[test]
fn test_ipv4_reverse_name() {
    assert_eq!(
        ip_to_reverse_name(ip("192.168.1.1")),
        "1.1.168.192.in-addr.arpa."
    );
    assert_eq!(ip_to_reverse_name(ip("10.0.0.1")), "1.0.0.10.in-addr.arpa.");
}

#[test]
fn test_ipv6_loopback_reverse_name() {
    assert_eq!(
        ip_to_reverse_name(ip("::1")),
        "1.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.ip6.arpa."
    );
}

#[test]
fn test_ipv6_reverse_name_has_32_nibble_labels() {
    let name = ip_to_reverse_name(ip("2001:db8::1"));
    assert!(name.ends_with(".ip6.arpa."));
    let prefix = name.strip_suffix(".ip6.arpa.").unwrap();
    assert_eq!(prefix.split('.').count(), 32);
    assert!(name.starts_with("1.0.0.0."));
}

#[test]
fn test_ipv4_round_trip() {
    for addr in ["192.168.1.100", "10.0.0.1", "255.255.255.255", "0.0.0.0"] {
        let reverse = ip_to_reverse_name(ip(addr));
        assert_eq!(reverse_name_to_ip(&reverse), Some(ip(addr)), "{addr}");
    }
}

#[test]
fn test_ipv6_round_trip() {
    for addr in ["::1", "2001:db8::1", "fe80::a:b:c:d", "2001:db8:85a3::8a2e:370:7334"] {
        let reverse = ip_to_reverse_name(ip(addr));
        assert_eq!(reverse_name_to_ip(&reverse), Some(ip(addr)), "{addr}");
    }
}

#[test]
fn test_reverse_name_wrong_label_count() {
    assert_eq!(reverse_name_to_ip("1.1.168.in-addr.arpa."), None);
    assert_eq!(reverse_name_to_ip("1.2.3.4.5.in-addr.arpa."), None);
    assert_eq!(reverse_name_to_ip("1.0.0.ip6.arpa."), None);
}

#[test]
fn test_reverse_name_bad_labels() {
    assert_eq!(reverse_name_to_ip("1.1.168.999.in-addr.arpa."), None);
    assert_eq!(reverse_name_to_ip("x.1.168.192.in-addr.arpa."), None);
}

#[test]
fn test_reverse_name_wrong_suffix() {
    assert_eq!(reverse_name_to_ip("host.autoco.internal."), None);
    assert_eq!(reverse_name_to_ip("1.1.168.192.in-addr.arpa.extra."), None);
}

#[test]
fn test_ipv6_reverse_name_requires_single_nibbles() {
    // 16 two-character labels instead of 32 single nibbles
    let name = format!("{}ip6.arpa.", "ab.".repeat(16));
    assert_eq!(reverse_name_to_ip(&name), None);
}

#[test]
fn test_canonical_ip_collapses_mapped_v4() {
    let mapped = ip("::ffff:192.168.1.1");
    assert_eq!(canonical_ip(mapped), ip("192.168.1.1"));
    assert_eq!(canonical_ip(ip("2001:db8::1")), ip("2001:db8::1"));
    assert_eq!(canonical_ip(ip("10.0.0.1")), ip("10.0.0.1"));
}

#[test]
fn test_mapped_v4_gets_in_addr_arpa_name() {
    assert_eq!(
        ip_to_reverse_name(ip("::ffff:10.0.0.1")),
        "1.0.0.10.in-addr.arpa."
    );
}
