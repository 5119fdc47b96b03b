use crate::errors::DomainError;
use std::fmt;
use std::net::{Ipv4Addr, SocketAddrV4};
use std::str::FromStr;

/// An IPv4 address and UDP port pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Endpoint {
    pub addr: Ipv4Addr,
    pub port: u16,
}

impl Endpoint {
    pub fn new(addr: Ipv4Addr, port: u16) -> Self {
        Self { addr, port }
    }

    /// Parses `a.b.c.d:port`, or a bare `a.b.c.d` which takes `default_port`.
    pub fn parse(s: &str, default_port: u16) -> Result<Self, DomainError> {
        let s = s.trim();
        if let Ok(addr) = s.parse::<Ipv4Addr>() {
            return Ok(Self::new(addr, default_port));
        }
        s.parse()
    }
}

impl FromStr for Endpoint {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let sock: SocketAddrV4 = s.trim().parse().map_err(|_| DomainError::InputParse {
            field: "endpoint",
            value: s.to_string(),
        })?;
        Ok(Self::from(sock))
    }
}

impl From<SocketAddrV4> for Endpoint {
    fn from(sock: SocketAddrV4) -> Self {
        Self::new(*sock.ip(), sock.port())
    }
}

impl From<Endpoint> for SocketAddrV4 {
    fn from(endpoint: Endpoint) -> Self {
        SocketAddrV4::new(endpoint.addr, endpoint.port)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.addr, self.port)
    }
}
