//! Log entry structure

use super::log_level::LogLevel;
use chrono::{DateTime, Local};
use serde::Serialize;

/// One emitted call: the rendered argument list handed to appenders.
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    pub level: LogLevel,
    pub logger_name: Option<String>,
    pub args: Vec<String>,
    pub timestamp: DateTime<Local>,
}

impl LogEntry {
    /// Sanitize log message to prevent log injection attacks
    ///
    /// Replaces newlines, carriage returns, and tabs with escape sequences
    /// so that every call produces exactly one output line.
    fn sanitize_message(message: &str) -> String {
        message
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    pub fn new(level: LogLevel, logger_name: Option<String>, args: Vec<String>) -> Self {
        Self {
            level,
            logger_name,
            args,
            timestamp: Local::now(),
        }
    }

    /// Arguments joined the way a console joins `console.log(a, b, c)`
    pub fn message(&self) -> String {
        self.args.join(" ")
    }

    /// Single-line form of [`message`](Self::message)
    pub fn line(&self) -> String {
        Self::sanitize_message(&self.message())
    }
}
