//! The branded logger: prefix decoration plus banner helpers on top of
//! a [`Logger`].

pub mod builder;
pub mod config;
pub mod decorator;

pub use builder::ActLoggerBuilder;
pub use config::LoggerConfig;
pub use decorator::PrefixDecorator;

use crate::core::{style::markup, Logger};
use decorator::PrefixSuppression;
use std::ops::Deref;
use std::sync::Arc;

/// Logger name used when none is given
pub const DEFAULT_LOGGER_NAME: &str = "global";

/// Banner text emitted by [`ActLogger::logs_title`]
pub const LOGS_TITLE: &str = "ACT Commodities / frontend logs:";

const BANNER_BACKGROUND: &str = "linear-gradient(90deg, rgba(2,0,36,1) 0%, \
     rgba(9,9,121,1) 33%, rgba(0,212,255,1) 99%)";

/// Font size and padding of a [`corp_info`](ActLogger::corp_info) banner
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorpInfoOptions {
    pub font_size: Option<String>,
    pub padding: Option<String>,
}

impl CorpInfoOptions {
    pub const DEFAULT_FONT_SIZE: &'static str = "14px";
    pub const DEFAULT_PADDING: &'static str = "20px";

    #[must_use]
    pub fn with_font_size(mut self, font_size: impl Into<String>) -> Self {
        self.font_size = Some(font_size.into());
        self
    }

    #[must_use]
    pub fn with_padding(mut self, padding: impl Into<String>) -> Self {
        self.padding = Some(padding.into());
        self
    }

    pub fn font_size(&self) -> &str {
        self.font_size.as_deref().unwrap_or(Self::DEFAULT_FONT_SIZE)
    }

    pub fn padding(&self) -> &str {
        self.padding.as_deref().unwrap_or(Self::DEFAULT_PADDING)
    }

    /// CSS declarations of the banner region
    pub fn css(&self) -> String {
        format!(
            "color: white; font-weight: bold; font-size: {}; background: {}; padding: {};",
            self.font_size(),
            BANNER_BACKGROUND,
            self.padding()
        )
    }
}

/// A [`Logger`] whose leveled methods print a colored
/// `[time] level (name): ` prefix, with branded banner helpers.
///
/// Dereferences to the underlying [`Logger`] for levels, appenders and
/// metrics.
///
/// # Example
///
/// ```
/// use act_logger::prelude::*;
///
/// let memory = MemoryAppender::new();
/// let log = ActLogger::builder()
///     .name("app")
///     .render_mode(RenderMode::Plain)
///     .appender(memory.clone())
///     .build();
///
/// log.info("ready");
/// assert!(memory.lines()[0].ends_with("info (app): ready"));
/// ```
#[derive(Clone)]
pub struct ActLogger {
    logger: Arc<Logger>,
    decorator: PrefixDecorator,
}

impl ActLogger {
    pub fn builder() -> ActLoggerBuilder {
        ActLoggerBuilder::new()
    }

    pub(crate) fn from_parts(logger: Arc<Logger>, decorator: PrefixDecorator) -> Self {
        Self { logger, decorator }
    }

    /// Enable or disable the prefix for this logger and its sub-loggers
    pub fn set_prefix(&self, enabled: bool) {
        self.decorator.set_enabled(enabled);
    }

    pub fn prefix_enabled(&self) -> bool {
        self.decorator.is_enabled()
    }

    /// Named sub-logger sharing this logger's prefix flag and appenders
    pub fn get_logger(&self, name: &str) -> ActLogger {
        Self::from_parts(self.logger.get_logger(name), self.decorator.clone())
    }

    /// Emit `text` as a single info-level banner with the default size and
    /// padding. The banner never carries the prefix.
    pub fn corp_info(&self, text: &str) {
        self.corp_info_with(text, &CorpInfoOptions::default());
    }

    pub fn corp_info_with(&self, text: &str, options: &CorpInfoOptions) {
        let banner = markup(&options.css(), text);
        let _suppressed = PrefixSuppression::enter();
        self.logger.info(banner);
    }

    /// Emit the standard logs title banner; always returns `true`
    pub fn logs_title(&self) -> bool {
        self.corp_info(LOGS_TITLE);
        true
    }

    pub fn logger(&self) -> &Arc<Logger> {
        &self.logger
    }

    pub fn decorator(&self) -> &PrefixDecorator {
        &self.decorator
    }
}

impl Deref for ActLogger {
    type Target = Logger;

    fn deref(&self) -> &Logger {
        &self.logger
    }
}

/// Build a console logger whose calls are labelled with `name` unless a
/// sub-logger supplies its own.
///
/// # Example
///
/// ```
/// let log = act_logger::init_logger("checkout");
/// log.set_prefix(false);
/// log.warn("cart is empty");
/// ```
pub fn init_logger(name: &str) -> ActLogger {
    ActLogger::builder().name(name).build()
}

/// [`init_logger`] with the default name, `"global"`
pub fn init_global_logger() -> ActLogger {
    init_logger(DEFAULT_LOGGER_NAME)
}
