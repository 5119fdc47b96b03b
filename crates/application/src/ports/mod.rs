mod packet_assembler;
mod packet_transport;
mod target_source;

pub use packet_assembler::PacketAssembler;
pub use packet_transport::PacketTransport;
pub use target_source::TargetSource;
