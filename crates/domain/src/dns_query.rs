use crate::dns_record::RecordType;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsQuery {
    pub record_type: RecordType,
    pub hostname: Arc<str>,
    pub id: u16,
    pub recursion_desired: bool,
}

impl DnsQuery {
    pub fn new(hostname: impl Into<Arc<str>>, id: u16) -> Self {
        Self {
            record_type: RecordType::A,
            hostname: hostname.into(),
            id,
            recursion_desired: false,
        }
    }

    pub fn with_recursion_desired(mut self, recursion_desired: bool) -> Self {
        self.recursion_desired = recursion_desired;
        self
    }
}
