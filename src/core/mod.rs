//! Core logger types and traits

pub mod appender;
pub mod error;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod method_factory;
pub mod metrics;
pub mod style;
pub mod timestamp;

pub use appender::Appender;
pub use error::{LoggerError, Result};
pub use log_entry::LogEntry;
pub use log_level::LogLevel;
pub use logger::Logger;
pub use method_factory::{DefaultMethodFactory, LogMethod, MethodFactory};
pub use metrics::LoggerMetrics;
pub use style::Style;
pub use timestamp::{Clock, FixedClock, SystemClock, TimestampFormat};
