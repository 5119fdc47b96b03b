use crate::endpoint::Endpoint;
use crate::errors::DomainError;
use std::net::Ipv4Addr;
use std::sync::Arc;
use std::time::Duration;

/// Everything a run needs besides the target pool and the RNG.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunPlan {
    pub source: Endpoint,
    pub destination_port: u16,
    pub attempts: usize,
    pub label_length: usize,
    pub delay: Duration,
    pub base_domain: Arc<str>,
    pub ip_identification: u16,
    pub recursion_desired: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptOutcome {
    Sent {
        attempt: usize,
        destination: Ipv4Addr,
        bytes: usize,
    },
    Failed {
        attempt: usize,
        error: DomainError,
    },
}

impl AttemptOutcome {
    pub fn is_sent(&self) -> bool {
        matches!(self, AttemptOutcome::Sent { .. })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub outcomes: Vec<AttemptOutcome>,
}

impl RunReport {
    pub fn record(&mut self, outcome: AttemptOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn attempts(&self) -> usize {
        self.outcomes.len()
    }

    pub fn sent(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_sent()).count()
    }

    pub fn failed(&self) -> usize {
        self.attempts() - self.sent()
    }
}
