use super::dns_message::encode_query;
use super::packet::assemble_packet;
use dnsforge_application::ports::PacketAssembler;
use dnsforge_domain::{DnsQuery, DomainError, Endpoint, WirePacket};

/// Encodes the DNS message and wraps it in IPv4/UDP headers.
#[derive(Debug, Default, Clone, Copy)]
pub struct Ipv4UdpAssembler;

impl Ipv4UdpAssembler {
    pub fn new() -> Self {
        Self
    }
}

impl PacketAssembler for Ipv4UdpAssembler {
    fn assemble(
        &self,
        query: &DnsQuery,
        source: Endpoint,
        destination: Endpoint,
        ip_identification: u16,
    ) -> Result<WirePacket, DomainError> {
        let dns = encode_query(query)?;
        assemble_packet(&dns, source, destination, ip_identification)
    }
}
