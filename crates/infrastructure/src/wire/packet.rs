//! IPv4 (RFC 791) and UDP (RFC 768) header layout.
//!
//! Headers are serialized field by field at fixed offsets; nothing is ever
//! reinterpreted in place.
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |Version|  IHL  |Type of Service|          Total Length         |
//! |         Identification        |Flags|      Fragment Offset    |
//! |  Time to Live |    Protocol   |         Header Checksum       |
//! |                       Source Address                          |
//! |                    Destination Address                        |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |          Source Port          |       Destination Port        |
//! |            Length             |           Checksum            |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```

use super::checksum::{internet_checksum, ChecksumAccumulator};
use dnsforge_domain::{
    DomainError, Endpoint, WirePacket, IPV4_HEADER_LEN, MAX_DNS_PAYLOAD, MAX_PACKET_LEN,
    UDP_HEADER_LEN,
};
use std::net::Ipv4Addr;

pub const IPPROTO_UDP: u8 = 17;
pub const DEFAULT_TTL: u8 = 255;

const IPV4_VERSION_IHL: u8 = (4 << 4) | 5;
const IPV4_CHECKSUM_OFFSET: usize = 10;
const UDP_CHECKSUM_OFFSET: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ipv4Header {
    pub tos: u8,
    pub total_length: u16,
    pub identification: u16,
    pub flags_fragment: u16,
    pub ttl: u8,
    pub protocol: u8,
    pub checksum: u16,
    pub source: Ipv4Addr,
    pub destination: Ipv4Addr,
}

impl Ipv4Header {
    /// Writes the 20-byte header (no options) into `buf[..20]`.
    pub fn write_to(&self, buf: &mut [u8]) {
        let buf = &mut buf[..IPV4_HEADER_LEN];
        buf[0] = IPV4_VERSION_IHL;
        buf[1] = self.tos;
        buf[2..4].copy_from_slice(&self.total_length.to_be_bytes());
        buf[4..6].copy_from_slice(&self.identification.to_be_bytes());
        buf[6..8].copy_from_slice(&self.flags_fragment.to_be_bytes());
        buf[8] = self.ttl;
        buf[9] = self.protocol;
        buf[10..12].copy_from_slice(&self.checksum.to_be_bytes());
        buf[12..16].copy_from_slice(&self.source.octets());
        buf[16..20].copy_from_slice(&self.destination.octets());
    }

    /// Reads an option-less IPv4 header from the front of `buf`.
    pub fn parse(buf: &[u8]) -> Option<Self> {
        if buf.len() < IPV4_HEADER_LEN || buf[0] != IPV4_VERSION_IHL {
            return None;
        }
        Some(Self {
            tos: buf[1],
            total_length: u16::from_be_bytes([buf[2], buf[3]]),
            identification: u16::from_be_bytes([buf[4], buf[5]]),
            flags_fragment: u16::from_be_bytes([buf[6], buf[7]]),
            ttl: buf[8],
            protocol: buf[9],
            checksum: u16::from_be_bytes([buf[10], buf[11]]),
            source: Ipv4Addr::new(buf[12], buf[13], buf[14], buf[15]),
            destination: Ipv4Addr::new(buf[16], buf[17], buf[18], buf[19]),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UdpHeader {
    pub source_port: u16,
    pub destination_port: u16,
    pub length: u16,
    pub checksum: u16,
}

impl UdpHeader {
    pub fn write_to(&self, buf: &mut [u8]) {
        let buf = &mut buf[..UDP_HEADER_LEN];
        buf[0..2].copy_from_slice(&self.source_port.to_be_bytes());
        buf[2..4].copy_from_slice(&self.destination_port.to_be_bytes());
        buf[4..6].copy_from_slice(&self.length.to_be_bytes());
        buf[6..8].copy_from_slice(&self.checksum.to_be_bytes());
    }

    pub fn parse(buf: &[u8]) -> Option<Self> {
        if buf.len() < UDP_HEADER_LEN {
            return None;
        }
        Some(Self {
            source_port: u16::from_be_bytes([buf[0], buf[1]]),
            destination_port: u16::from_be_bytes([buf[2], buf[3]]),
            length: u16::from_be_bytes([buf[4], buf[5]]),
            checksum: u16::from_be_bytes([buf[6], buf[7]]),
        })
    }
}

/// The 12-byte IPv4 pseudo-header that prefixes the UDP checksum input.
pub fn pseudo_header(source: Ipv4Addr, destination: Ipv4Addr, udp_length: u16) -> [u8; 12] {
    let mut pseudo = [0u8; 12];
    pseudo[0..4].copy_from_slice(&source.octets());
    pseudo[4..8].copy_from_slice(&destination.octets());
    pseudo[8] = 0;
    pseudo[9] = IPPROTO_UDP;
    pseudo[10..12].copy_from_slice(&udp_length.to_be_bytes());
    pseudo
}

/// UDP checksum over pseudo-header + `segment` (UDP header and payload).
///
/// The checksum field inside `segment` must already be zero. A computed
/// value of zero goes on the wire as `0xFFFF`, since zero means "no checksum".
pub fn udp_checksum(source: Ipv4Addr, destination: Ipv4Addr, segment: &[u8]) -> u16 {
    let pseudo = pseudo_header(source, destination, segment.len() as u16);
    match ChecksumAccumulator::new().add(&pseudo).add(segment).finish() {
        0 => 0xFFFF,
        sum => sum,
    }
}

/// Lays out IPv4 header | UDP header | `dns` and fills both checksums.
///
/// The required length is checked before anything is written.
pub fn assemble_packet(
    dns: &[u8],
    source: Endpoint,
    destination: Endpoint,
    identification: u16,
) -> Result<WirePacket, DomainError> {
    if dns.len() > MAX_DNS_PAYLOAD {
        return Err(DomainError::Encoding(format!(
            "DNS payload is {} bytes (max {})",
            dns.len(),
            MAX_DNS_PAYLOAD
        )));
    }
    let udp_len = UDP_HEADER_LEN + dns.len();
    let total_len = IPV4_HEADER_LEN + udp_len;
    if total_len > MAX_PACKET_LEN {
        return Err(DomainError::Encoding(format!(
            "Packet is {} bytes (max {})",
            total_len, MAX_PACKET_LEN
        )));
    }

    let mut buf = vec![0u8; total_len];

    Ipv4Header {
        tos: 0,
        total_length: total_len as u16,
        identification,
        flags_fragment: 0,
        ttl: DEFAULT_TTL,
        protocol: IPPROTO_UDP,
        checksum: 0,
        source: source.addr,
        destination: destination.addr,
    }
    .write_to(&mut buf);

    UdpHeader {
        source_port: source.port,
        destination_port: destination.port,
        length: udp_len as u16,
        checksum: 0,
    }
    .write_to(&mut buf[IPV4_HEADER_LEN..]);

    buf[IPV4_HEADER_LEN + UDP_HEADER_LEN..].copy_from_slice(dns);

    let ip_checksum = internet_checksum(&buf[..IPV4_HEADER_LEN]);
    buf[IPV4_CHECKSUM_OFFSET..IPV4_CHECKSUM_OFFSET + 2]
        .copy_from_slice(&ip_checksum.to_be_bytes());

    let udp_sum = udp_checksum(source.addr, destination.addr, &buf[IPV4_HEADER_LEN..]);
    let offset = IPV4_HEADER_LEN + UDP_CHECKSUM_OFFSET;
    buf[offset..offset + 2].copy_from_slice(&udp_sum.to_be_bytes());

    Ok(WirePacket::new(buf, dns.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ipv4_header_roundtrip() {
        let header = Ipv4Header {
            tos: 0,
            total_length: 61,
            identification: 54321,
            flags_fragment: 0,
            ttl: 255,
            protocol: IPPROTO_UDP,
            checksum: 0xBEEF,
            source: Ipv4Addr::new(1, 2, 3, 4),
            destination: Ipv4Addr::new(8, 8, 8, 8),
        };
        let mut buf = [0u8; 20];
        header.write_to(&mut buf);
        assert_eq!(buf[0], 0x45);
        assert_eq!(Ipv4Header::parse(&buf), Some(header));
    }

    #[test]
    fn test_parse_rejects_short_or_optioned_header() {
        assert!(Ipv4Header::parse(&[0x45; 19]).is_none());
        let mut buf = [0u8; 24];
        buf[0] = 0x46;
        assert!(Ipv4Header::parse(&buf).is_none());
        assert!(UdpHeader::parse(&[0u8; 7]).is_none());
    }

    #[test]
    fn test_pseudo_header_layout() {
        let pseudo = pseudo_header(Ipv4Addr::new(10, 0, 0, 1), Ipv4Addr::new(10, 0, 0, 2), 41);
        assert_eq!(pseudo, [10, 0, 0, 1, 10, 0, 0, 2, 0, 17, 0, 41]);
    }
}
