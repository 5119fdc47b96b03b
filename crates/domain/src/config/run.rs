use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;
use std::time::Duration;

use super::errors::ConfigError;
use crate::endpoint::Endpoint;
use crate::lab_scope::is_lab_address;
use crate::run_plan::RunPlan;

/// Upper bound on attempts in a single run
pub const MAX_ATTEMPTS: usize = 1000;

/// Lower bound on the pause between attempts
pub const MIN_DELAY_MS: u64 = 100;

const MAX_LABEL_LEN: usize = 63;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RunConfig {
    /// Source address written into the IPv4 header
    #[serde(default = "default_source_address")]
    pub source_address: String,

    #[serde(default = "default_source_port")]
    pub source_port: u16,

    #[serde(default = "default_destination_port")]
    pub destination_port: u16,

    #[serde(default = "default_attempts")]
    pub attempts: usize,

    /// Length of the random label prepended to `base_domain`
    #[serde(default = "default_label_length")]
    pub label_length: usize,

    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,

    #[serde(default = "default_base_domain")]
    pub base_domain: String,

    /// Newline-delimited list of destination addresses
    #[serde(default = "default_targets_file")]
    pub targets_file: String,

    #[serde(default = "default_ip_identification")]
    pub ip_identification: u16,

    #[serde(default)]
    pub recursion_desired: bool,

    /// Fixed RNG seed for reproducible runs
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            source_address: default_source_address(),
            source_port: default_source_port(),
            destination_port: default_destination_port(),
            attempts: default_attempts(),
            label_length: default_label_length(),
            delay_ms: default_delay_ms(),
            base_domain: default_base_domain(),
            targets_file: default_targets_file(),
            ip_identification: default_ip_identification(),
            recursion_desired: false,
            seed: None,
        }
    }
}

impl RunConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let source = self.source_addr()?;
        if !is_lab_address(source) {
            return Err(ConfigError::Validation(format!(
                "Source address {} is outside the lab scope",
                source
            )));
        }

        if self.destination_port == 0 {
            return Err(ConfigError::Validation(
                "Destination port cannot be 0".to_string(),
            ));
        }

        if self.attempts > MAX_ATTEMPTS {
            return Err(ConfigError::Validation(format!(
                "attempts must be at most {} (got {})",
                MAX_ATTEMPTS, self.attempts
            )));
        }

        if self.delay_ms < MIN_DELAY_MS {
            return Err(ConfigError::Validation(format!(
                "delay_ms must be at least {} (got {})",
                MIN_DELAY_MS, self.delay_ms
            )));
        }

        if self.label_length == 0 || self.label_length > MAX_LABEL_LEN {
            return Err(ConfigError::Validation(format!(
                "label_length must be between 1 and {} (got {})",
                MAX_LABEL_LEN, self.label_length
            )));
        }

        if self.base_domain.trim_matches('.').is_empty() {
            return Err(ConfigError::Validation(
                "base_domain cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    pub fn source_addr(&self) -> Result<Ipv4Addr, ConfigError> {
        self.source_address.trim().parse().map_err(|_| {
            ConfigError::Validation(format!(
                "Invalid source address: {}",
                self.source_address
            ))
        })
    }

    /// Validates and converts into the plan a run executes.
    pub fn to_plan(&self) -> Result<RunPlan, ConfigError> {
        self.validate()?;
        Ok(RunPlan {
            source: Endpoint::new(self.source_addr()?, self.source_port),
            destination_port: self.destination_port,
            attempts: self.attempts,
            label_length: self.label_length,
            delay: Duration::from_millis(self.delay_ms),
            base_domain: self.base_domain.trim_matches('.').into(),
            ip_identification: self.ip_identification,
            recursion_desired: self.recursion_desired,
        })
    }
}

fn default_source_address() -> String {
    "127.0.0.1".to_string()
}

fn default_source_port() -> u16 {
    23837
}

fn default_destination_port() -> u16 {
    53
}

fn default_attempts() -> usize {
    10
}

fn default_label_length() -> usize {
    10
}

fn default_delay_ms() -> u64 {
    500
}

fn default_base_domain() -> String {
    "example.com".to_string()
}

fn default_targets_file() -> String {
    "targets.txt".to_string()
}

fn default_ip_identification() -> u16 {
    54321
}
