//! Leveled logger with a pluggable method factory

use super::{
    appender::Appender,
    error::Result,
    log_entry::LogEntry,
    log_level::LogLevel,
    method_factory::{DefaultMethodFactory, LogMethod, MethodFactory},
    metrics::LoggerMetrics,
};
use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Appenders and metrics shared by a root logger and all of its children
struct Sink {
    appenders: RwLock<Vec<Box<dyn Appender>>>,
    metrics: LoggerMetrics,
}

impl Sink {
    fn new() -> Self {
        Self {
            appenders: RwLock::new(Vec::new()),
            metrics: LoggerMetrics::new(),
        }
    }

    /// Deliver an entry to every appender with per-appender panic isolation
    ///
    /// One failing appender does not prevent the others from receiving
    /// the entry.
    fn process_sync(&self, entry: &LogEntry) -> bool {
        let mut appenders = self.appenders.write();
        let mut has_error = false;

        for (idx, appender) in appenders.iter_mut().enumerate() {
            let append_result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                appender.append(entry)
            }));

            match append_result {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    eprintln!("[LOGGER ERROR] Appender #{} ({}) failed: {}", idx, appender.name(), e);
                    has_error = true;
                }
                Err(panic_info) => {
                    eprintln!(
                        "[LOGGER CRITICAL] Appender #{} panicked: {}. \
                         Other appenders continue to function.",
                        idx,
                        panic_message(panic_info.as_ref())
                    );
                    has_error = true;
                }
            }
        }

        if has_error {
            self.metrics.record_failed();
        } else {
            self.metrics.record_logged();
        }

        has_error
    }
}

fn panic_message(panic_info: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = panic_info.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic_info.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

#[derive(Debug, Clone, Copy)]
struct LevelState {
    /// Level set through `set_level`, if any
    explicit: Option<LogLevel>,
    /// Level used while nothing was set explicitly
    default: LogLevel,
}

impl LevelState {
    fn effective(&self) -> LogLevel {
        self.explicit.unwrap_or(self.default)
    }
}

/// A leveled logger.
///
/// Each of the five levels owns a [`LogMethod`]. Levels below the current
/// threshold get a no-op; the others get whatever the installed
/// [`MethodFactory`] builds around the base method that hands entries to the
/// appenders. The table is rebuilt on every level or factory change.
///
/// Named children obtained through [`get_logger`](Self::get_logger) share the
/// root's appenders and metrics, and start from the level and factory their
/// parent had when they were created.
///
/// # Example
///
/// ```
/// use act_logger::prelude::*;
///
/// let logger = Logger::new();
/// logger.add_appender(Box::new(MemoryAppender::new()));
/// logger.set_level(LogLevel::Warn);
///
/// logger.info("filtered");
/// logger.warn("delivered");
///
/// assert_eq!(logger.metrics().filtered_count(), 1);
/// assert_eq!(logger.metrics().total_logged(), 1);
/// ```
pub struct Logger {
    name: Option<String>,
    levels: RwLock<LevelState>,
    factory: RwLock<Arc<dyn MethodFactory>>,
    methods: RwLock<Vec<LogMethod>>,
    sink: Arc<Sink>,
    registry: Arc<Mutex<HashMap<String, Arc<Logger>>>>,
}

impl Logger {
    /// Create a root logger at the default `Info` threshold, without appenders
    #[must_use]
    pub fn new() -> Self {
        let logger = Self {
            name: None,
            levels: RwLock::new(LevelState {
                explicit: None,
                default: LogLevel::default(),
            }),
            factory: RwLock::new(Arc::new(DefaultMethodFactory)),
            methods: RwLock::new(Vec::new()),
            sink: Arc::new(Sink::new()),
            registry: Arc::new(Mutex::new(HashMap::new())),
        };
        logger.rebuild_methods();
        logger
    }

    /// `None` for the root logger
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Get (or create) the named child logger
    ///
    /// The same name always yields the same logger within one family.
    pub fn get_logger(&self, name: &str) -> Arc<Logger> {
        let mut registry = self.registry.lock();
        let child = registry.entry(name.to_string()).or_insert_with(|| {
            let child = Logger {
                name: Some(name.to_string()),
                levels: RwLock::new(LevelState {
                    explicit: None,
                    default: self.get_level(),
                }),
                factory: RwLock::new(Arc::clone(&*self.factory.read())),
                methods: RwLock::new(Vec::new()),
                sink: Arc::clone(&self.sink),
                registry: Arc::clone(&self.registry),
            };
            child.rebuild_methods();
            Arc::new(child)
        });
        Arc::clone(child)
    }

    pub fn add_appender(&self, appender: Box<dyn Appender>) {
        self.sink.appenders.write().push(appender);
    }

    /// Install a method factory and rebuild every leveled method through it
    pub fn set_method_factory(&self, factory: Arc<dyn MethodFactory>) {
        *self.factory.write() = factory;
        self.rebuild_methods();
    }

    pub fn method_factory(&self) -> Arc<dyn MethodFactory> {
        Arc::clone(&*self.factory.read())
    }

    /// Current threshold; calls below it are suppressed
    pub fn get_level(&self) -> LogLevel {
        self.levels.read().effective()
    }

    pub fn set_level(&self, level: LogLevel) {
        self.levels.write().explicit = Some(level);
        self.rebuild_methods();
    }

    /// Set the level used while no explicit level has been set
    pub fn set_default_level(&self, level: LogLevel) {
        self.levels.write().default = level;
        self.rebuild_methods();
    }

    /// Drop the explicit level and fall back to the default one
    pub fn reset_level(&self) {
        self.levels.write().explicit = None;
        self.rebuild_methods();
    }

    pub fn enable_all(&self) {
        self.set_level(LogLevel::Trace);
    }

    pub fn disable_all(&self) {
        self.set_level(LogLevel::Silent);
    }

    fn rebuild_methods(&self) {
        // Held across the rebuild so concurrent level changes cannot install
        // a table built from a stale threshold.
        let mut methods = self.methods.write();
        let threshold = self.get_level();
        let factory = self.method_factory();

        *methods = LogLevel::METHODS
            .iter()
            .map(|&level| {
                if level < threshold {
                    self.noop_method()
                } else {
                    factory.wrap(level, self.name(), self.base_method(level))
                }
            })
            .collect();
    }

    fn base_method(&self, level: LogLevel) -> LogMethod {
        let sink = Arc::clone(&self.sink);
        let name = self.name.clone();
        Arc::new(move |args: Vec<String>| {
            let entry = LogEntry::new(level, name.clone(), args);
            sink.process_sync(&entry);
        })
    }

    fn noop_method(&self) -> LogMethod {
        let sink = Arc::clone(&self.sink);
        Arc::new(move |_args: Vec<String>| {
            sink.metrics.record_filtered();
        })
    }

    /// Invoke the installed method for `level` with the given arguments
    pub fn log_args<I>(&self, level: LogLevel, args: I)
    where
        I: IntoIterator,
        I::Item: fmt::Display,
    {
        let Some(idx) = level.method_index() else {
            return;
        };
        // Clone out of the lock so a method may log or change levels itself
        let method = Arc::clone(&self.methods.read()[idx]);
        method(args.into_iter().map(|arg| arg.to_string()).collect());
    }

    pub fn log(&self, level: LogLevel, message: impl fmt::Display) {
        self.log_args(level, [message]);
    }

    #[inline]
    pub fn trace(&self, message: impl fmt::Display) {
        self.log(LogLevel::Trace, message);
    }

    #[inline]
    pub fn debug(&self, message: impl fmt::Display) {
        self.log(LogLevel::Debug, message);
    }

    #[inline]
    pub fn info(&self, message: impl fmt::Display) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    pub fn warn(&self, message: impl fmt::Display) {
        self.log(LogLevel::Warn, message);
    }

    #[inline]
    pub fn error(&self, message: impl fmt::Display) {
        self.log(LogLevel::Error, message);
    }

    /// Logger metrics, shared across the whole logger family
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.sink.metrics
    }

    pub fn flush(&self) -> Result<()> {
        let mut appenders = self.sink.appenders.write();
        for appender in appenders.iter_mut() {
            appender.flush()?;
        }
        Ok(())
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("level", &self.get_level())
            .finish_non_exhaustive()
    }
}
