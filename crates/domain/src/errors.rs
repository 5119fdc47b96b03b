use std::net::Ipv4Addr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid value for {field}: {value}")]
    InputParse { field: &'static str, value: String },

    #[error("Encoding error: {0}")]
    Encoding(String),

    #[error("Failed to acquire raw socket: {0}")]
    TransportAcquisition(String),

    #[error("Failed to transmit packet to {destination}: {reason}")]
    Transmission {
        destination: Ipv4Addr,
        reason: String,
    },

    #[error("Address {0} is outside the lab scope")]
    OutOfLabScope(Ipv4Addr),
}

impl DomainError {
    /// Only configuration errors end a run; everything else is scoped to one attempt.
    pub fn is_fatal(&self) -> bool {
        matches!(self, DomainError::Configuration(_))
    }
}
