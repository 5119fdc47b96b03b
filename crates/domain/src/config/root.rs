use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::run::RunConfig;

/// Main configuration structure for dnsforge
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Packet and run parameters
    #[serde(default)]
    pub run: RunConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. dnsforge.toml in current directory
    /// 3. /etc/dnsforge/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if let Some(path) = Self::get_config_path() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(source) = overrides.source_address {
            self.run.source_address = source;
        }
        if let Some(port) = overrides.source_port {
            self.run.source_port = port;
        }
        if let Some(attempts) = overrides.attempts {
            self.run.attempts = attempts;
        }
        if let Some(len) = overrides.label_length {
            self.run.label_length = len;
        }
        if let Some(delay) = overrides.delay_ms {
            self.run.delay_ms = delay;
        }
        if let Some(domain) = overrides.base_domain {
            self.run.base_domain = domain;
        }
        if let Some(targets) = overrides.targets_file {
            self.run.targets_file = targets;
        }
        if let Some(seed) = overrides.seed {
            self.run.seed = Some(seed);
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.run.validate()
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        if std::path::Path::new("dnsforge.toml").exists() {
            Some("dnsforge.toml".to_string())
        } else if std::path::Path::new("/etc/dnsforge/config.toml").exists() {
            Some("/etc/dnsforge/config.toml".to_string())
        } else {
            None
        }
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub source_address: Option<String>,
    pub source_port: Option<u16>,
    pub attempts: Option<usize>,
    pub label_length: Option<usize>,
    pub delay_ms: Option<u64>,
    pub base_domain: Option<String>,
    pub targets_file: Option<String>,
    pub seed: Option<u64>,
    pub log_level: Option<String>,
}
