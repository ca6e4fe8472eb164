//! In-memory appender

use crate::core::{Appender, LogEntry, Result};
use parking_lot::Mutex;
use std::sync::Arc;

/// Keeps every entry in memory.
///
/// Clones share the same buffer, so keep a clone before boxing the appender
/// into a logger and read the captured output from it.
///
/// # Example
///
/// ```
/// use act_logger::prelude::*;
///
/// let memory = MemoryAppender::new();
/// let logger = Logger::new();
/// logger.add_appender(Box::new(memory.clone()));
///
/// logger.info("captured");
/// assert_eq!(memory.lines(), vec!["captured"]);
/// ```
#[derive(Clone, Default)]
pub struct MemoryAppender {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl MemoryAppender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().clone()
    }

    /// Captured entries as single output lines
    pub fn lines(&self) -> Vec<String> {
        self.entries.lock().iter().map(LogEntry::line).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}

impl Appender for MemoryAppender {
    fn append(&mut self, entry: &LogEntry) -> Result<()> {
        self.entries.lock().push(entry.clone());
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
