use serde::{Deserialize, Serialize};

use crate::samples::SampleKind;

/// Accepted values of `logging.level`.
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub demo: DemoConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter level when `RUST_LOG` is unset.
    #[serde(default = "default_level")]
    pub level: String,
    /// Log every patch at `info` instead of `trace`.
    #[serde(default)]
    pub patches: bool,
}

/// Defaults for `teacup run`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DemoConfig {
    #[serde(default)]
    pub sample: SampleKind,
    #[serde(default)]
    pub format: OutputFormat,
}

/// How `teacup run` prints the widget tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Indented outline with paths.
    #[default]
    Tree,
    /// One JSON snapshot per line.
    Json,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            patches: false,
        }
    }
}
