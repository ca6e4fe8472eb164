//! # ACT Logger
//!
//! A leveled logger decorator with timestamped, color-styled console output
//! and branded banners.
//!
//! ## Features
//!
//! - **Prefixed output**: every call reads `[HH:mm:ss:SSS] level (name): message`
//! - **Color markup**: `[c="color: red"]text[c]` regions rendered as ANSI
//!   escapes, plain text or browser-console `%c` arguments
//! - **Pluggable methods**: a [`MethodFactory`] decorates each leveled method
//!   when the logger builds its method table
//! - **Banners**: `corp_info` and `logs_title` for prominent, unprefixed lines
//!
//! ```
//! let log = act_logger::init_logger("app");
//! log.logs_title();
//! log.info("started");
//! ```

pub mod act;
pub mod appenders;
pub mod core;
pub mod macros;
pub mod render;

pub mod prelude {
    pub use crate::act::{
        init_global_logger, init_logger, ActLogger, ActLoggerBuilder, CorpInfoOptions,
        LoggerConfig, PrefixDecorator, DEFAULT_LOGGER_NAME, LOGS_TITLE,
    };
    pub use crate::appenders::{ConsoleAppender, MemoryAppender};
    pub use crate::core::{
        Appender, Clock, FixedClock, LogEntry, LogLevel, LogMethod, Logger, LoggerError,
        LoggerMetrics, MethodFactory, Result, Style, SystemClock, TimestampFormat,
    };
    pub use crate::render::{CssRenderer, PlainRenderer, RenderMode, StyleRenderer};
}

pub use act::{
    init_global_logger, init_logger, ActLogger, ActLoggerBuilder, CorpInfoOptions, LoggerConfig,
    PrefixDecorator, DEFAULT_LOGGER_NAME, LOGS_TITLE,
};
pub use appenders::{ConsoleAppender, MemoryAppender};
pub use core::{
    Appender, Clock, DefaultMethodFactory, FixedClock, LogEntry, LogLevel, LogMethod, Logger,
    LoggerError, LoggerMetrics, MethodFactory, Result, Style, SystemClock, TimestampFormat,
};
#[cfg(feature = "console")]
pub use render::AnsiRenderer;
pub use render::{CssRenderer, PlainRenderer, RenderMode, StyleRenderer};
