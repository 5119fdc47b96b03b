use async_trait::async_trait;
use dnsforge_application::ports::TargetSource;
use dnsforge_domain::{is_lab_address, DomainError};
use std::net::Ipv4Addr;
use tokio::fs;
use tracing::{debug, warn};

/// Reads destination addresses from a newline-delimited file.
pub struct AddressListLoader {
    path: String,
}

impl AddressListLoader {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

/// Parses one IPv4 address per line.
///
/// Blank lines and `#` comments are skipped. Unparsable or out-of-scope lines
/// are skipped with a warning.
pub fn parse_address_list(content: &str) -> Vec<Ipv4Addr> {
    let mut addresses = Vec::new();

    for (line_num, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match line.parse::<Ipv4Addr>() {
            Ok(ip) if is_lab_address(ip) => addresses.push(ip),
            Ok(ip) => {
                warn!(line = line_num + 1, ip = %ip, "Skipping target outside the lab scope");
            }
            Err(e) => {
                warn!(line = line_num + 1, error = %e, value = line, "Invalid IPv4 address in target list");
            }
        }
    }

    addresses
}

#[async_trait]
impl TargetSource for AddressListLoader {
    async fn load_targets(&self) -> Result<Vec<Ipv4Addr>, DomainError> {
        let content = fs::read_to_string(&self.path).await.map_err(|e| {
            DomainError::Configuration(format!("Failed to read target list {}: {}", self.path, e))
        })?;

        let targets = parse_address_list(&content);
        if targets.is_empty() {
            return Err(DomainError::Configuration(format!(
                "No usable targets in {}",
                self.path
            )));
        }

        debug!(path = %self.path, targets = targets.len(), "Target list loaded");
        Ok(targets)
    }
}
