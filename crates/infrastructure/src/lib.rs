//! dnsforge infrastructure: wire codec, raw transport and target loading
pub mod targets;
pub mod transport;
pub mod wire;
