//! Method construction hook
//!
//! A [`Logger`](super::Logger) keeps one callable per level. Whenever that
//! table is rebuilt, the logger hands each level's base implementation to its
//! [`MethodFactory`], and installs whatever the factory returns. Decorators
//! intercept every leveled call this way without touching the logger itself.

use super::log_level::LogLevel;
use std::sync::Arc;

/// A leveled method: receives the call's arguments, already stringified
pub type LogMethod = Arc<dyn Fn(Vec<String>) + Send + Sync>;

pub trait MethodFactory: Send + Sync {
    /// Produce the method installed for `level` on the logger named
    /// `logger_name` (`None` for the root logger).
    fn wrap(&self, level: LogLevel, logger_name: Option<&str>, base: LogMethod) -> LogMethod;
}

/// Installs the base methods unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultMethodFactory;

impl MethodFactory for DefaultMethodFactory {
    fn wrap(&self, _level: LogLevel, _logger_name: Option<&str>, base: LogMethod) -> LogMethod {
        base
    }
}
