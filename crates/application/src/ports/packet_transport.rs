use async_trait::async_trait;
use dnsforge_domain::{DomainError, WirePacket};
use std::net::Ipv4Addr;

#[async_trait]
pub trait PacketTransport: Send + Sync {
    /// Sends the packet as-is and returns the number of bytes written.
    async fn send(&self, packet: &WirePacket, destination: Ipv4Addr)
        -> Result<usize, DomainError>;
}
