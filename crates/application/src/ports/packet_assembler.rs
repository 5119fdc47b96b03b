use dnsforge_domain::{DnsQuery, DomainError, Endpoint, WirePacket};

/// Turns a query plus addressing into a complete IPv4/UDP/DNS datagram.
pub trait PacketAssembler: Send + Sync {
    fn assemble(
        &self,
        query: &DnsQuery,
        source: Endpoint,
        destination: Endpoint,
        ip_identification: u16,
    ) -> Result<WirePacket, DomainError>;
}
