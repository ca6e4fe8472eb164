//! Prefix decorator: the method factory that timestamps and colorizes calls

use crate::core::{
    style::Style,
    timestamp::{Clock, TimestampFormat},
    LogLevel, LogMethod, MethodFactory,
};
use crate::render::StyleRenderer;
use std::cell::Cell;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

thread_local! {
    static PREFIX_SUPPRESSED: Cell<bool> = const { Cell::new(false) };
}

/// Scoped suppression of the prefix on the current thread.
///
/// Calls made on this thread while the guard is alive carry no prefix. The
/// shared prefix flag is never touched, so other threads are unaffected,
/// and the previous suppression state comes back when the guard drops,
/// including during unwinding.
pub(crate) struct PrefixSuppression {
    previous: bool,
}

impl PrefixSuppression {
    pub(crate) fn enter() -> Self {
        let previous = PREFIX_SUPPRESSED.with(|flag| flag.replace(true));
        Self { previous }
    }
}

impl Drop for PrefixSuppression {
    fn drop(&mut self) {
        PREFIX_SUPPRESSED.with(|flag| flag.set(self.previous));
    }
}

fn prefix_suppressed() -> bool {
    PREFIX_SUPPRESSED.with(Cell::get)
}

/// Wraps every leveled method so that it prepends
/// `"[<time>] <level> (<name>): "`, renders the color markup and then
/// forwards to the base method.
#[derive(Clone)]
pub struct PrefixDecorator {
    default_name: String,
    enabled: Arc<AtomicBool>,
    renderer: Arc<dyn StyleRenderer>,
    clock: Arc<dyn Clock>,
    timestamp_format: TimestampFormat,
}

impl PrefixDecorator {
    pub fn new(
        default_name: impl Into<String>,
        renderer: Arc<dyn StyleRenderer>,
        clock: Arc<dyn Clock>,
        timestamp_format: TimestampFormat,
    ) -> Self {
        Self {
            default_name: default_name.into(),
            enabled: Arc::new(AtomicBool::new(true)),
            renderer,
            clock,
            timestamp_format,
        }
    }

    pub fn default_name(&self) -> &str {
        &self.default_name
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    /// Prefix for a call to `method` on the logger called `name`, or an empty
    /// string when prefixing is off.
    pub fn prefix(&self, method: &str, name: &str) -> String {
        if !self.is_enabled() || prefix_suppressed() {
            return String::new();
        }
        let time = self.timestamp_format.format(&self.clock.now());
        format!(
            "[{}] {} ({}): ",
            Style::Helper.colorize(&time),
            Style::for_method(method).colorize(method),
            Style::Helper.colorize(name)
        )
    }

    /// Combine the prefix with the call's arguments, before rendering.
    ///
    /// Several arguments keep the prefix as a separate leading argument; a
    /// single argument (or none) is concatenated onto it.
    pub fn decorate(&self, method: &str, name: &str, args: Vec<String>) -> Vec<String> {
        let mut prefix = self.prefix(method, name);
        if args.len() > 1 {
            let mut messages = Vec::with_capacity(args.len() + 1);
            messages.push(prefix);
            messages.extend(args);
            messages
        } else {
            if let Some(only) = args.first() {
                prefix.push_str(only);
            }
            vec![prefix]
        }
    }
}

impl MethodFactory for PrefixDecorator {
    fn wrap(&self, level: LogLevel, logger_name: Option<&str>, base: LogMethod) -> LogMethod {
        let decorator = self.clone();
        let method = level.method_name();
        let name = logger_name.unwrap_or(&self.default_name).to_string();

        Arc::new(move |args: Vec<String>| {
            let messages = decorator.decorate(method, &name, args);
            base(decorator.renderer.render(&messages))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::timestamp::FixedClock;
    use crate::render::PlainRenderer;
    use chrono::{Local, TimeZone};
    use parking_lot::Mutex;

    fn decorator() -> PrefixDecorator {
        let at = Local
            .with_ymd_and_hms(2025, 1, 8, 9, 15, 0)
            .single()
            .expect("valid datetime")
            + chrono::Duration::milliseconds(42);
        PrefixDecorator::new(
            "app",
            Arc::new(PlainRenderer),
            Arc::new(FixedClock::new(at)),
            TimestampFormat::Clock,
        )
    }

    #[test]
    fn test_prefix_markup() {
        let prefix = decorator().prefix("warn", "app");
        assert_eq!(
            prefix,
            "[[c=\"color: grey\"]09:15:00:042[c]] [c=\"color: yellow\"]warn[c] ([c=\"color: grey\"]app[c]): "
        );
    }

    #[test]
    fn test_single_arg_concatenated() {
        let messages = decorator().decorate("info", "app", vec!["hello".into()]);
        assert_eq!(messages.len(), 1);
        assert!(messages[0].ends_with("): hello"));
    }

    #[test]
    fn test_multiple_args_kept_separate() {
        let messages = decorator().decorate("warn", "app", vec!["a".into(), "b".into()]);
        assert_eq!(messages.len(), 3);
        assert!(messages[0].ends_with("): "));
        assert_eq!(messages[1], "a");
        assert_eq!(messages[2], "b");
    }

    #[test]
    fn test_no_args_yields_bare_prefix() {
        let d = decorator();
        d.set_enabled(false);
        assert_eq!(d.decorate("info", "app", Vec::new()), vec![String::new()]);
    }

    #[test]
    fn test_disabled_prefix_is_empty() {
        let d = decorator();
        d.set_enabled(false);
        assert_eq!(d.decorate("info", "app", vec!["x".into()]), vec!["x"]);
        d.set_enabled(true);
        assert!(d.decorate("info", "app", vec!["x".into()])[0].starts_with('['));
    }

    #[test]
    fn test_suppression_guard_restores() {
        let d = decorator();
        {
            let _outer = PrefixSuppression::enter();
            {
                let _inner = PrefixSuppression::enter();
                assert_eq!(d.prefix("info", "app"), "");
            }
            assert_eq!(d.prefix("info", "app"), "");
        }
        assert!(!d.prefix("info", "app").is_empty());
        assert!(d.is_enabled());
    }

    #[test]
    fn test_suppression_is_thread_local() {
        let d = decorator();
        let _guard = PrefixSuppression::enter();
        let other = d.clone();
        let prefix = std::thread::spawn(move || other.prefix("info", "app"))
            .join()
            .expect("thread panicked");
        assert!(!prefix.is_empty());
    }

    #[test]
    fn test_wrap_renders_and_forwards() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_clone = Arc::clone(&seen);
        let base: LogMethod = Arc::new(move |args| seen_clone.lock().push(args));

        let method = decorator().wrap(LogLevel::Error, Some("net"), base);
        method(vec!["down".into()]);

        let calls = seen.lock();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0], vec!["[09:15:00:042] error (net): down"]);
    }
}
