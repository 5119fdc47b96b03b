pub const IPV4_HEADER_LEN: usize = 20;
pub const UDP_HEADER_LEN: usize = 8;

/// Ceiling for the whole IPv4 datagram.
pub const MAX_PACKET_LEN: usize = 1024;

/// Ceiling for the DNS message carried in the UDP payload.
pub const MAX_DNS_PAYLOAD: usize = 512;

/// A fully assembled IPv4/UDP/DNS datagram.
///
/// The byte vector is exactly the logical length; nothing past it exists to be
/// transmitted by accident.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WirePacket {
    bytes: Vec<u8>,
    dns_len: usize,
}

impl WirePacket {
    /// Wraps assembled bytes. `bytes.len()` must equal header lengths plus `dns_len`.
    pub fn new(bytes: Vec<u8>, dns_len: usize) -> Self {
        debug_assert_eq!(bytes.len(), IPV4_HEADER_LEN + UDP_HEADER_LEN + dns_len);
        Self { bytes, dns_len }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn dns_len(&self) -> usize {
        self.dns_len
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}
