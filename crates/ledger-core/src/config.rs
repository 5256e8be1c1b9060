//! Logging configuration for the process harness.
//!
//! The harness takes no flags and always starts from the default store. Only
//! its diagnostics are configurable, through the environment:
//!
//! - `RUST_LOG`: `tracing` filter directives (default `warn`).
//! - `SORTED_LEDGER_LOG_FORMAT`: `text` (default) or `json` log lines.
//!
//! Logs always go to stderr. Stdout carries only the result.
//!
//! # Example
//!
//! ```
//! use ledger_core::config::{LogConfig, LogFormat};
//!
//! let config = LogConfig::default();
//! assert_eq!(config.filter, "warn");
//! assert_eq!(config.format, LogFormat::Text);
//! ```

use std::str::FromStr;

pub const LOG_FILTER_ENV: &str = "RUST_LOG";
pub const LOG_FORMAT_ENV: &str = "SORTED_LEDGER_LOG_FORMAT";

pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Shape of emitted log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("unknown log format: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// `EnvFilter` directives
    pub filter: String,
    pub format: LogFormat,
    /// Set when `SORTED_LEDGER_LOG_FORMAT` held an unknown value; reported
    /// once the subscriber is installed
    pub rejected_format: Option<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
            format: LogFormat::Text,
            rejected_format: None,
        }
    }
}

impl LogConfig {
    /// Build a config from the process environment.
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var(LOG_FILTER_ENV).ok(),
            std::env::var(LOG_FORMAT_ENV).ok(),
        )
    }

    /// Build a config from raw variable values. Blank filters fall back to
    /// [`DEFAULT_LOG_FILTER`], unknown formats to [`LogFormat::Text`].
    pub fn from_vars(filter: Option<String>, format: Option<String>) -> Self {
        let filter = filter
            .filter(|f| !f.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        let (format, rejected_format) = match format {
            Some(raw) => match raw.parse() {
                Ok(format) => (format, None),
                Err(_) => (LogFormat::Text, Some(raw)),
            },
            None => (LogFormat::Text, None),
        };

        Self {
            filter,
            format,
            rejected_format,
        }
    }
}
