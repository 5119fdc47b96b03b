#![allow(dead_code)]

use dnsforge_domain::{DnsQuery, Endpoint, WirePacket};
use dnsforge_infrastructure::wire::{assemble_packet, encode_query, DNS_HEADER_LEN};
use std::net::Ipv4Addr;

/// Reverses the length-prefix encoding of the QNAME starting after the header.
/// Returns the dotted name and the offset just past the terminating zero.
pub fn decode_qname(message: &[u8]) -> (String, usize) {
    let mut offset = DNS_HEADER_LEN;
    let mut labels = Vec::new();
    loop {
        let len = message[offset] as usize;
        offset += 1;
        if len == 0 {
            break;
        }
        labels.push(String::from_utf8(message[offset..offset + len].to_vec()).unwrap());
        offset += len;
    }
    (labels.join("."), offset)
}

pub fn lab_source() -> Endpoint {
    Endpoint::new(Ipv4Addr::new(192, 168, 56, 1), 23837)
}

pub fn lab_destination() -> Endpoint {
    Endpoint::new(Ipv4Addr::new(192, 168, 56, 53), 53)
}

pub fn build(hostname: &str, id: u16, source: Endpoint, destination: Endpoint) -> WirePacket {
    let dns = encode_query(&DnsQuery::new(hostname, id)).unwrap();
    assemble_packet(&dns, source, destination, 54321).unwrap()
}

pub fn random_hostname(rng: &mut fastrand::Rng, labels: usize, max_label: usize) -> String {
    (0..labels)
        .map(|_| {
            let len = rng.usize(1..=max_label);
            (0..len).map(|_| rng.alphanumeric()).collect::<String>()
        })
        .collect::<Vec<_>>()
        .join(".")
}
