pub mod address_list;

pub use address_list::{parse_address_list, AddressListLoader};
