//! Address ranges the tool is allowed to put on the wire.
//!
//! Every packet must carry a lab-scoped source address and be addressed to a
//! lab-scoped destination. The ranges are loopback, RFC 1918 private space,
//! link-local, the RFC 5737 documentation networks and the RFC 2544
//! benchmarking block.

use crate::errors::DomainError;
use std::net::Ipv4Addr;

const LAB_RANGES: &[(Ipv4Addr, u8)] = &[
    (Ipv4Addr::new(127, 0, 0, 0), 8),
    (Ipv4Addr::new(10, 0, 0, 0), 8),
    (Ipv4Addr::new(172, 16, 0, 0), 12),
    (Ipv4Addr::new(192, 168, 0, 0), 16),
    (Ipv4Addr::new(169, 254, 0, 0), 16),
    (Ipv4Addr::new(192, 0, 2, 0), 24),
    (Ipv4Addr::new(198, 51, 100, 0), 24),
    (Ipv4Addr::new(203, 0, 113, 0), 24),
    (Ipv4Addr::new(198, 18, 0, 0), 15),
];

fn in_prefix(addr: Ipv4Addr, network: Ipv4Addr, prefix_len: u8) -> bool {
    let mask = if prefix_len == 0 {
        0
    } else {
        u32::MAX << (32 - prefix_len)
    };
    (u32::from(addr) & mask) == (u32::from(network) & mask)
}

pub fn is_lab_address(addr: Ipv4Addr) -> bool {
    LAB_RANGES
        .iter()
        .any(|&(network, prefix_len)| in_prefix(addr, network, prefix_len))
}

pub fn ensure_lab_scope(addr: Ipv4Addr) -> Result<(), DomainError> {
    if is_lab_address(addr) {
        Ok(())
    } else {
        Err(DomainError::OutOfLabScope(addr))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_boundaries() {
        assert!(in_prefix(Ipv4Addr::new(172, 31, 255, 255), Ipv4Addr::new(172, 16, 0, 0), 12));
        assert!(!in_prefix(Ipv4Addr::new(172, 32, 0, 0), Ipv4Addr::new(172, 16, 0, 0), 12));
        assert!(in_prefix(Ipv4Addr::new(198, 19, 0, 1), Ipv4Addr::new(198, 18, 0, 0), 15));
        assert!(!in_prefix(Ipv4Addr::new(198, 20, 0, 1), Ipv4Addr::new(198, 18, 0, 0), 15));
    }
}
