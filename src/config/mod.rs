//! Configuration for the `teacup` binary.
//!
//! Read from `<config dir>/teacup/config.toml`. Every field has a default,
//! so a missing file or a partial file is fine.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, DemoConfig, LoggingConfig, OutputFormat, LOG_LEVELS};
