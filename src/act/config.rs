//! Serializable logger configuration
//!
//! ```json
//! {
//!   "name": "checkout",
//!   "level": "debug",
//!   "render": "plain",
//!   "timestamp": "Clock",
//!   "prefix": true
//! }
//! ```
//!
//! Every field is optional.

use super::{builder::ActLoggerBuilder, ActLogger, DEFAULT_LOGGER_NAME};
use crate::core::{timestamp::TimestampFormat, LogLevel, LoggerError, Result};
use crate::render::RenderMode;
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerConfig {
    pub name: String,
    pub level: Option<LogLevel>,
    pub render: RenderMode,
    pub timestamp: TimestampFormat,
    pub prefix: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_LOGGER_NAME.to_string(),
            level: None,
            render: RenderMode::default(),
            timestamp: TimestampFormat::default(),
            prefix: true,
        }
    }
}

impl LoggerConfig {
    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> Result<Self> {
        let config: LoggerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            LoggerError::io_operation(
                "reading logger config",
                format!("cannot read '{}'", path.display()),
                e,
            )
        })?;
        Self::from_json(&json)
    }

    /// Reject timestamp patterns chrono cannot format
    pub fn validate(&self) -> Result<()> {
        if let TimestampFormat::Custom(pattern) = &self.timestamp {
            if pattern.is_empty() {
                return Err(LoggerError::config("timestamp", "custom format is empty"));
            }
            if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
                return Err(LoggerError::config(
                    "timestamp",
                    format!("invalid strftime pattern '{}'", pattern),
                ));
            }
        }
        Ok(())
    }

    pub fn builder(self) -> ActLoggerBuilder {
        ActLoggerBuilder::from_config(self)
    }

    pub fn build(self) -> ActLogger {
        self.builder().build()
    }
}
