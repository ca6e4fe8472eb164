//! Console appender implementation

use crate::core::{Appender, LogEntry, LogLevel, Result};
use std::io::Write;

/// Writes one line per entry to the process console.
///
/// Entries at or above `stderr_level` go to stderr, the rest to stdout,
/// the same split a browser or Node console makes for `warn`/`error`.
pub struct ConsoleAppender {
    stderr_level: LogLevel,
}

impl ConsoleAppender {
    pub fn new() -> Self {
        Self {
            stderr_level: LogLevel::Warn,
        }
    }

    /// Route entries at or above `level` to stderr
    ///
    /// # Example
    ///
    /// ```
    /// use act_logger::appenders::ConsoleAppender;
    /// use act_logger::LogLevel;
    ///
    /// // Everything on stdout
    /// let appender = ConsoleAppender::new().with_stderr_level(LogLevel::Silent);
    /// ```
    #[must_use]
    pub fn with_stderr_level(mut self, level: LogLevel) -> Self {
        self.stderr_level = level;
        self
    }

    fn uses_stderr(&self, level: LogLevel) -> bool {
        level >= self.stderr_level
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for ConsoleAppender {
    fn append(&mut self, entry: &LogEntry) -> Result<()> {
        let line = entry.line();
        if self.uses_stderr(entry.level) {
            writeln!(std::io::stderr().lock(), "{}", line)?;
        } else {
            writeln!(std::io::stdout().lock(), "{}", line)?;
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        // Flush both stdout and stderr since we write to both
        std::io::stdout().flush()?;
        std::io::stderr().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
