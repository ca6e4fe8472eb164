//! Level-to-color map used when building prefixes
//!
//! Colors are expressed as color-markup directives (`[c="css"]text[c]`) that
//! a [`StyleRenderer`](crate::render::StyleRenderer) later turns into terminal
//! escapes or browser console styles.

use super::log_level::LogLevel;

/// Opening tag of a styled region
pub const MARKUP_OPEN: &str = "[c=\"";
/// Closing tag of a styled region
pub const MARKUP_CLOSE: &str = "[c]";

/// Wrap `text` in a styled region carrying the given CSS declarations
pub fn markup(css: &str, text: &str) -> String {
    format!("{MARKUP_OPEN}{css}\"]{text}{MARKUP_CLOSE}")
}

/// Color slots of the prefix: one per level plus the neutral `Helper`
/// slot used for the timestamp and logger name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Helper,
}

impl Style {
    pub fn css(&self) -> &'static str {
        match self {
            Style::Trace => "color: magenta",
            Style::Debug => "color: cyan",
            Style::Info => "color: blue",
            Style::Warn => "color: yellow",
            Style::Error => "color: red",
            Style::Helper => "color: grey",
        }
    }

    pub fn colorize(&self, text: &str) -> String {
        markup(self.css(), text)
    }

    /// Look up the style for a method name, case-insensitively.
    ///
    /// `HELPER` resolves to its own slot; anything unrecognised falls back
    /// to `Info`.
    pub fn for_method(name: &str) -> Style {
        match name.to_uppercase().as_str() {
            "TRACE" => Style::Trace,
            "DEBUG" => Style::Debug,
            "INFO" => Style::Info,
            "WARN" => Style::Warn,
            "ERROR" => Style::Error,
            "HELPER" => Style::Helper,
            _ => Style::Info,
        }
    }
}

impl From<LogLevel> for Style {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Style::Trace,
            LogLevel::Debug => Style::Debug,
            LogLevel::Info => Style::Info,
            LogLevel::Warn => Style::Warn,
            LogLevel::Error => Style::Error,
            // No method exists for Silent
            LogLevel::Silent => Style::Info,
        }
    }
}
