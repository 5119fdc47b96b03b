pub mod errors;
pub mod logging;
pub mod run;
pub mod root;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use run::{RunConfig, MAX_ATTEMPTS, MIN_DELAY_MS};
pub use root::{CliOverrides, Config};
