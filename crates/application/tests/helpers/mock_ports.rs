#![allow(dead_code)]

use async_trait::async_trait;
use dnsforge_application::ports::{PacketAssembler, PacketTransport};
use dnsforge_domain::{
    DnsQuery, DomainError, Endpoint, WirePacket, IPV4_HEADER_LEN, UDP_HEADER_LEN,
};
use std::net::Ipv4Addr;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
pub struct AssembledCall {
    pub query: DnsQuery,
    pub source: Endpoint,
    pub destination: Endpoint,
    pub ip_identification: u16,
}

/// Produces a zero-filled packet of the right length and records every call.
#[derive(Clone, Default)]
pub struct MockPacketAssembler {
    calls: Arc<Mutex<Vec<AssembledCall>>>,
    error: Arc<Mutex<Option<DomainError>>>,
}

impl MockPacketAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_error(&self, error: DomainError) {
        *self.error.lock().unwrap() = Some(error);
    }

    pub fn calls(&self) -> Vec<AssembledCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl PacketAssembler for MockPacketAssembler {
    fn assemble(
        &self,
        query: &DnsQuery,
        source: Endpoint,
        destination: Endpoint,
        ip_identification: u16,
    ) -> Result<WirePacket, DomainError> {
        self.calls.lock().unwrap().push(AssembledCall {
            query: query.clone(),
            source,
            destination,
            ip_identification,
        });

        if let Some(error) = self.error.lock().unwrap().clone() {
            return Err(error);
        }

        let dns_len = 12 + query.hostname.len() + 2 + 4;
        Ok(WirePacket::new(
            vec![0u8; IPV4_HEADER_LEN + UDP_HEADER_LEN + dns_len],
            dns_len,
        ))
    }
}

/// Records destinations; fails the sends whose index is listed in `fail_on`.
#[derive(Clone, Default)]
pub struct MockPacketTransport {
    sent: Arc<Mutex<Vec<(Ipv4Addr, usize)>>>,
    calls: Arc<Mutex<usize>>,
    fail_on: Arc<Mutex<Vec<usize>>>,
    fail_all: Arc<Mutex<bool>>,
}

impl MockPacketTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_on(&self, indices: &[usize]) {
        self.fail_on.lock().unwrap().extend_from_slice(indices);
    }

    pub fn set_fail_all(&self, fail_all: bool) {
        *self.fail_all.lock().unwrap() = fail_all;
    }

    pub fn sent(&self) -> Vec<(Ipv4Addr, usize)> {
        self.sent.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl PacketTransport for MockPacketTransport {
    async fn send(
        &self,
        packet: &WirePacket,
        destination: Ipv4Addr,
    ) -> Result<usize, DomainError> {
        let index = {
            let mut calls = self.calls.lock().unwrap();
            let index = *calls;
            *calls += 1;
            index
        };

        if *self.fail_all.lock().unwrap() || self.fail_on.lock().unwrap().contains(&index) {
            return Err(DomainError::Transmission {
                destination,
                reason: "mock send failure".to_string(),
            });
        }

        self.sent.lock().unwrap().push((destination, packet.len()));
        Ok(packet.len())
    }
}
