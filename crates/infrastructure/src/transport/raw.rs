//! Raw IPv4 transport with header inclusion (`IP_HDRINCL`).
//!
//! The kernel transmits the caller's IPv4 header verbatim, so the transport
//! checks both addresses against the lab scope before a socket is opened.
//! Each send opens its own socket and closes it on return.

use async_trait::async_trait;
use dnsforge_application::ports::PacketTransport;
use dnsforge_domain::{ensure_lab_scope, DomainError, WirePacket};
use socket2::{Domain, Protocol, SockAddr, Socket, Type};
use std::net::{Ipv4Addr, SocketAddrV4};
use tracing::debug;

use crate::wire::Ipv4Header;

#[derive(Debug, Default, Clone, Copy)]
pub struct RawSocketTransport;

impl RawSocketTransport {
    pub fn new() -> Self {
        Self
    }

    fn open_socket() -> Result<Socket, DomainError> {
        let socket = Socket::new(
            Domain::IPV4,
            Type::RAW,
            Some(Protocol::from(libc::IPPROTO_RAW)),
        )
        .map_err(|e| {
            DomainError::TransportAcquisition(format!(
                "Failed to create raw socket (requires CAP_NET_RAW): {}",
                e
            ))
        })?;

        socket.set_header_included_v4(true).map_err(|e| {
            DomainError::TransportAcquisition(format!("Failed to set IP_HDRINCL: {}", e))
        })?;

        Ok(socket)
    }

    fn send_blocking(bytes: &[u8], destination: Ipv4Addr) -> Result<usize, DomainError> {
        let socket = Self::open_socket()?;
        let addr = SockAddr::from(SocketAddrV4::new(destination, 0));

        let sent = socket
            .send_to(bytes, &addr)
            .map_err(|e| DomainError::Transmission {
                destination,
                reason: e.to_string(),
            })?;

        if sent != bytes.len() {
            return Err(DomainError::Transmission {
                destination,
                reason: format!("short write: {} of {} bytes", sent, bytes.len()),
            });
        }

        Ok(sent)
    }
}

/// Rejects packets whose header source or `destination` leaves the lab scope.
pub fn check_lab_scope(packet: &WirePacket, destination: Ipv4Addr) -> Result<(), DomainError> {
    let header = Ipv4Header::parse(packet.as_bytes())
        .ok_or_else(|| DomainError::Encoding("Packet has no IPv4 header".to_string()))?;

    ensure_lab_scope(header.source)?;
    ensure_lab_scope(header.destination)?;
    ensure_lab_scope(destination)
}

#[async_trait]
impl PacketTransport for RawSocketTransport {
    async fn send(
        &self,
        packet: &WirePacket,
        destination: Ipv4Addr,
    ) -> Result<usize, DomainError> {
        check_lab_scope(packet, destination)?;

        let bytes = packet.as_bytes().to_vec();
        let sent = tokio::task::spawn_blocking(move || Self::send_blocking(&bytes, destination))
            .await
            .map_err(|e| DomainError::Transmission {
                destination,
                reason: format!("send task failed: {}", e),
            })??;

        debug!(destination = %destination, bytes = sent, "Raw packet sent");
        Ok(sent)
    }
}
