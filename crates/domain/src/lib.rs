//! dnsforge domain layer
pub mod config;
pub mod dns_query;
pub mod dns_record;
pub mod endpoint;
pub mod errors;
pub mod lab_scope;
pub mod run_plan;
pub mod wire_packet;

pub use config::{
    CliOverrides, Config, ConfigError, LoggingConfig, RunConfig, MAX_ATTEMPTS, MIN_DELAY_MS,
};
pub use dns_query::DnsQuery;
pub use dns_record::RecordType;
pub use endpoint::Endpoint;
pub use errors::DomainError;
pub use lab_scope::{ensure_lab_scope, is_lab_address};
pub use run_plan::{AttemptOutcome, RunPlan, RunReport};
pub use wire_packet::{WirePacket, IPV4_HEADER_LEN, MAX_DNS_PAYLOAD, MAX_PACKET_LEN, UDP_HEADER_LEN};
