//! DNS query encoder (RFC 1035 §4.1)
//!
//! Produces a header plus a single question and no resource records.

use dnsforge_domain::{DnsQuery, DomainError, MAX_DNS_PAYLOAD};

pub const DNS_HEADER_LEN: usize = 12;

const MAX_LABEL_LEN: usize = 63;
const FLAG_RD: u16 = 0x0100;
const CLASS_IN: u16 = 1;

/// Splits `hostname` into labels, rejecting anything that cannot be encoded
/// verbatim. A single trailing dot (the root) is accepted.
fn labels(hostname: &str) -> Result<Vec<&str>, DomainError> {
    let name = hostname.strip_suffix('.').unwrap_or(hostname);
    if name.is_empty() {
        return Err(DomainError::Encoding("Hostname is empty".to_string()));
    }
    if !name.is_ascii() {
        return Err(DomainError::Encoding(format!(
            "Hostname '{}' is not ASCII",
            hostname
        )));
    }

    let labels: Vec<&str> = name.split('.').collect();
    for label in &labels {
        if label.is_empty() {
            return Err(DomainError::Encoding(format!(
                "Hostname '{}' contains an empty label",
                hostname
            )));
        }
        if label.len() > MAX_LABEL_LEN {
            return Err(DomainError::Encoding(format!(
                "Label '{}' is {} bytes (max {})",
                label,
                label.len(),
                MAX_LABEL_LEN
            )));
        }
    }

    Ok(labels)
}

fn qname_len(labels: &[&str]) -> usize {
    labels.iter().map(|l| 1 + l.len()).sum::<usize>() + 1
}

/// Number of bytes [`encode_query`] will produce for `hostname`.
pub fn encoded_len(hostname: &str) -> Result<usize, DomainError> {
    let labels = labels(hostname)?;
    let total = DNS_HEADER_LEN + qname_len(&labels) + 4;
    if total > MAX_DNS_PAYLOAD {
        return Err(DomainError::Encoding(format!(
            "DNS message is {} bytes (max {})",
            total, MAX_DNS_PAYLOAD
        )));
    }
    Ok(total)
}

pub fn encode_query(query: &DnsQuery) -> Result<Vec<u8>, DomainError> {
    let total = encoded_len(&query.hostname)?;
    let labels = labels(&query.hostname)?;

    let flags = if query.recursion_desired { FLAG_RD } else { 0 };

    let mut buf = Vec::with_capacity(total);
    buf.extend_from_slice(&query.id.to_be_bytes());
    buf.extend_from_slice(&flags.to_be_bytes());
    buf.extend_from_slice(&1u16.to_be_bytes()); // QDCOUNT
    buf.extend_from_slice(&0u16.to_be_bytes()); // ANCOUNT
    buf.extend_from_slice(&0u16.to_be_bytes()); // NSCOUNT
    buf.extend_from_slice(&0u16.to_be_bytes()); // ARCOUNT

    for label in labels {
        buf.push(label.len() as u8);
        buf.extend_from_slice(label.as_bytes());
    }
    buf.push(0);

    buf.extend_from_slice(&query.record_type.to_u16().to_be_bytes());
    buf.extend_from_slice(&CLASS_IN.to_be_bytes());

    debug_assert_eq!(buf.len(), total);
    Ok(buf)
}
