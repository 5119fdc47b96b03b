use dnsforge_domain::{ensure_lab_scope, is_lab_address, DomainError};
use std::net::Ipv4Addr;

#[test]
fn test_lab_ranges_are_accepted() {
    for addr in [
        "127.0.0.1",
        "10.20.30.40",
        "172.16.0.1",
        "172.31.255.254",
        "192.168.1.10",
        "169.254.10.10",
        "192.0.2.53",
        "198.51.100.1",
        "203.0.113.9",
        "198.18.0.1",
        "198.19.255.255",
    ] {
        let ip: Ipv4Addr = addr.parse().unwrap();
        assert!(is_lab_address(ip), "{} should be lab scoped", addr);
    }
}

#[test]
fn test_public_addresses_are_rejected() {
    for addr in ["8.8.8.8", "1.1.1.1", "1.2.3.4", "172.32.0.1", "198.20.0.1", "9.9.9.9"] {
        let ip: Ipv4Addr = addr.parse().unwrap();
        assert!(!is_lab_address(ip), "{} should not be lab scoped", addr);
    }
}

#[test]
fn test_ensure_lab_scope_reports_address() {
    let ip = Ipv4Addr::new(8, 8, 8, 8);
    assert_eq!(ensure_lab_scope(ip), Err(DomainError::OutOfLabScope(ip)));
    assert!(ensure_lab_scope(Ipv4Addr::LOCALHOST).is_ok());
}

#[test]
fn test_out_of_scope_is_not_fatal() {
    assert!(!DomainError::OutOfLabScope(Ipv4Addr::new(8, 8, 8, 8)).is_fatal());
    assert!(DomainError::Configuration("empty".to_string()).is_fatal());
}
