pub mod raw;

pub use raw::RawSocketTransport;
