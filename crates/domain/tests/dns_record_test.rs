use burrow_dns_domain::{DnsRecord, DomainError, RecordType};
use std::net::IpAddr;
use std::str::FromStr;

#[test]
fn test_record_type_as_str() {
    assert_eq!(RecordType::A.as_str(), "A");
    assert_eq!(RecordType::AAAA.as_str(), "AAAA");
    assert_eq!(RecordType::PTR.as_str(), "PTR");
}

#[test]
fn test_record_type_wire_codes() {
    assert_eq!(RecordType::A.to_u16(), 1);
    assert_eq!(RecordType::PTR.to_u16(), 12);
    assert_eq!(RecordType::AAAA.to_u16(), 28);

    assert_eq!(RecordType::from_u16(1), Some(RecordType::A));
    assert_eq!(RecordType::from_u16(12), Some(RecordType::PTR));
    assert_eq!(RecordType::from_u16(28), Some(RecordType::AAAA));
    assert_eq!(RecordType::from_u16(5), None);
}

#[test]
fn test_record_type_from_str() {
    assert_eq!(RecordType::from_str("A").unwrap(), RecordType::A);
    assert_eq!(RecordType::from_str("aaaa").unwrap(), RecordType::AAAA);
    assert_eq!(RecordType::from_str("Ptr").unwrap(), RecordType::PTR);
    assert!(matches!(
        RecordType::from_str("CNAME"),
        Err(DomainError::InvalidRecordType(_))
    ));
}

#[test]
fn test_record_type_display() {
    assert_eq!(format!("{}", RecordType::AAAA), "AAAA");
}

#[test]
fn test_record_type_from_address() {
    let v4: IpAddr = "10.0.0.1".parse().unwrap();
    let v6: IpAddr = "2001:db8::1".parse().unwrap();
    assert_eq!(RecordType::from_address(&v4), RecordType::A);
    assert_eq!(RecordType::from_address(&v6), RecordType::AAAA);
}

#[test]
fn test_record_type_sibling() {
    assert_eq!(RecordType::A.sibling(), Some(RecordType::AAAA));
    assert_eq!(RecordType::AAAA.sibling(), Some(RecordType::A));
    assert_eq!(RecordType::PTR.sibling(), None);
}

#[test]
fn test_dns_record_type_follows_address_family() {
    let record = DnsRecord::new("host.autoco.internal.", "10.0.0.1".parse().unwrap(), 300);
    assert_eq!(record.record_type, RecordType::A);
    assert_eq!(record.ttl, 300);

    let record = DnsRecord::new("host.autoco.internal.", "2001:db8::1".parse().unwrap(), 300);
    assert_eq!(record.record_type, RecordType::AAAA);
}
