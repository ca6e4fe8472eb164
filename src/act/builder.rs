//! Fluent construction of [`ActLogger`]

use super::{config::LoggerConfig, decorator::PrefixDecorator, ActLogger, DEFAULT_LOGGER_NAME};
use crate::appenders::ConsoleAppender;
use crate::core::{
    timestamp::{Clock, SystemClock, TimestampFormat},
    Appender, LogLevel, Logger,
};
use crate::render::{RenderMode, StyleRenderer};
use std::sync::Arc;

/// Builder for [`ActLogger`]
///
/// Without any appender the logger writes to the console.
///
/// # Example
/// ```
/// use act_logger::prelude::*;
///
/// let log = ActLogger::builder()
///     .name("pricing")
///     .level(LogLevel::Debug)
///     .render_mode(RenderMode::Plain)
///     .timestamp_format(TimestampFormat::Iso8601)
///     .build();
///
/// assert_eq!(log.get_level(), LogLevel::Debug);
/// ```
pub struct ActLoggerBuilder {
    name: String,
    level: Option<LogLevel>,
    default_level: LogLevel,
    render_mode: RenderMode,
    renderer: Option<Arc<dyn StyleRenderer>>,
    clock: Arc<dyn Clock>,
    timestamp_format: TimestampFormat,
    appenders: Vec<Box<dyn Appender>>,
    prefix: bool,
}

impl ActLoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            name: DEFAULT_LOGGER_NAME.to_string(),
            level: None,
            default_level: LogLevel::default(),
            render_mode: RenderMode::default(),
            renderer: None,
            clock: Arc::new(SystemClock),
            timestamp_format: TimestampFormat::default(),
            appenders: Vec::new(),
            prefix: true,
        }
    }

    /// Start from a loaded configuration
    pub fn from_config(config: LoggerConfig) -> Self {
        let mut builder = Self::new()
            .name(config.name)
            .render_mode(config.render)
            .timestamp_format(config.timestamp)
            .prefix(config.prefix);
        builder.level = config.level;
        builder
    }

    /// Name shown in prefixes of calls that do not come from a sub-logger
    #[must_use = "builder methods return a new value"]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.level = Some(level);
        self
    }

    /// Level used until one is set explicitly
    #[must_use = "builder methods return a new value"]
    pub fn default_level(mut self, level: LogLevel) -> Self {
        self.default_level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn render_mode(mut self, mode: RenderMode) -> Self {
        self.render_mode = mode;
        self
    }

    /// Use a custom renderer instead of one selected by [`render_mode`](Self::render_mode)
    #[must_use = "builder methods return a new value"]
    pub fn renderer(mut self, renderer: Arc<dyn StyleRenderer>) -> Self {
        self.renderer = Some(renderer);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Add an appender; may be called several times
    #[must_use = "builder methods return a new value"]
    pub fn appender<A: Appender + 'static>(mut self, appender: A) -> Self {
        self.appenders.push(Box::new(appender));
        self
    }

    /// Initial state of the prefix flag (default `true`)
    #[must_use = "builder methods return a new value"]
    pub fn prefix(mut self, enabled: bool) -> Self {
        self.prefix = enabled;
        self
    }

    /// Build the logger
    pub fn build(self) -> ActLogger {
        let logger = Arc::new(Logger::new());

        if self.appenders.is_empty() {
            logger.add_appender(Box::new(ConsoleAppender::new()));
        }
        for appender in self.appenders {
            logger.add_appender(appender);
        }

        logger.set_default_level(self.default_level);
        if let Some(level) = self.level {
            logger.set_level(level);
        }

        let renderer = self
            .renderer
            .unwrap_or_else(|| self.render_mode.renderer());
        let decorator = PrefixDecorator::new(self.name, renderer, self.clock, self.timestamp_format);
        decorator.set_enabled(self.prefix);
        logger.set_method_factory(Arc::new(decorator.clone()));

        ActLogger::from_parts(logger, decorator)
    }
}

impl Default for ActLoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
