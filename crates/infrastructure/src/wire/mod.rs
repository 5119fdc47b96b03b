pub mod assembler;
pub mod checksum;
pub mod dns_message;
pub mod packet;

pub use assembler::Ipv4UdpAssembler;
pub use checksum::{internet_checksum, ChecksumAccumulator};
pub use dns_message::{encode_query, encoded_len, DNS_HEADER_LEN};
pub use packet::{assemble_packet, pseudo_header, udp_checksum, Ipv4Header, UdpHeader};
