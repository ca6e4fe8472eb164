//! Logging macros for ergonomic log message formatting.
//!
//! These macros provide a convenient interface for logging with automatic
//! string formatting, similar to `println!` and `format!`. They work on both
//! [`Logger`](crate::Logger) and [`ActLogger`](crate::ActLogger).
//!
//! # Examples
//!
//! ```
//! use act_logger::info;
//!
//! let log = act_logger::init_logger("server");
//!
//! info!(log, "Server started");
//!
//! let port = 8080;
//! info!(log, "Server listening on port {}", port);
//! ```

/// Log a message with automatic formatting.
///
/// # Examples
///
/// ```
/// # use act_logger::prelude::*;
/// # let logger = Logger::new();
/// use act_logger::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, format!($($arg)+))
    };
}

/// Log several arguments as separate values, like `console.log(a, b, c)`.
///
/// With a prefixing logger the prefix stays a distinct leading argument.
///
/// # Examples
///
/// ```
/// # use act_logger::prelude::*;
/// # let logger = Logger::new();
/// use act_logger::log_args;
/// log_args!(logger, LogLevel::Warn; "retrying", 3, "of", 5);
/// ```
#[macro_export]
macro_rules! log_args {
    ($logger:expr, $level:expr; $($arg:expr),+ $(,)?) => {
        $logger.log_args(
            $level,
            [$(::std::string::ToString::to_string(&$arg)),+],
        )
    };
}

/// Log a trace-level message.
///
/// ```
/// # use act_logger::prelude::*;
/// # let logger = Logger::new();
/// # logger.set_level(LogLevel::Trace);
/// use act_logger::trace;
/// trace!(logger, "Entering function: calculate()");
/// trace!(logger, "Variable value: {}", 42);
/// ```
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Trace, $($arg)+)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
///
/// ```
/// # use act_logger::prelude::*;
/// # let logger = Logger::new();
/// use act_logger::error;
/// error!(logger, "Failed to connect to database");
/// error!(logger, "Error code: {}, message: {}", 500, "Internal error");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}
