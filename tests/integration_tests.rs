//! Integration tests for the prefixing logger
//!
//! These tests verify:
//! - Prefix layout and the prefix toggle
//! - Banner helpers and prefix restoration
//! - Argument handling before rendering
//! - Sub-loggers, thresholds and rendering modes

use act_logger::prelude::*;
use act_logger::render::markup;
use chrono::{Local, TimeZone};
use parking_lot::Mutex;
use std::sync::Arc;

fn fixed_clock() -> Arc<dyn Clock> {
    let at = Local
        .with_ymd_and_hms(2025, 3, 14, 10, 30, 45)
        .single()
        .expect("valid datetime")
        + chrono::Duration::milliseconds(123);
    Arc::new(FixedClock::new(at))
}

fn plain_logger(name: &str) -> (ActLogger, MemoryAppender) {
    let memory = MemoryAppender::new();
    let log = ActLogger::builder()
        .name(name)
        .level(LogLevel::Trace)
        .render_mode(RenderMode::Plain)
        .clock(fixed_clock())
        .appender(memory.clone())
        .build();
    (log, memory)
}

/// Records what reaches the rendering step, then strips markup
#[derive(Default)]
struct RecordingRenderer {
    calls: Mutex<Vec<Vec<String>>>,
}

impl StyleRenderer for RecordingRenderer {
    fn render(&self, args: &[String]) -> Vec<String> {
        self.calls.lock().push(args.to_vec());
        PlainRenderer.render(args)
    }

    fn name(&self) -> &str {
        "recording"
    }
}

#[test]
fn test_prefix_for_every_level() {
    let (log, memory) = plain_logger("app");

    log.trace("t");
    log.debug("d");
    log.info("i");
    log.warn("w");
    log.error("e");

    assert_eq!(
        memory.lines(),
        vec![
            "[10:30:45:123] trace (app): t",
            "[10:30:45:123] debug (app): d",
            "[10:30:45:123] info (app): i",
            "[10:30:45:123] warn (app): w",
            "[10:30:45:123] error (app): e",
        ]
    );
}

#[test]
fn test_default_name_in_prefix() {
    let (log, memory) = plain_logger("app");
    log.info("hello");

    assert_eq!(memory.len(), 1);
    assert!(memory.lines()[0].contains("(app)"));
}

#[test]
fn test_init_logger_default_name_is_global() {
    let log = init_global_logger();
    assert_eq!(log.decorator().default_name(), "global");

    let prefix = markup::strip(&log.decorator().prefix("info", "global"));
    assert!(prefix.ends_with(" info (global): "));
}

#[test]
fn test_prefix_toggle() {
    let (log, memory) = plain_logger("app");

    log.set_prefix(false);
    log.info("bare");
    assert!(!log.prefix_enabled());

    log.set_prefix(true);
    log.info("decorated");

    assert_eq!(
        memory.lines(),
        vec!["bare", "[10:30:45:123] info (app): decorated"]
    );
}

#[test]
fn test_corp_info_has_no_prefix_and_restores_it() {
    let (log, memory) = plain_logger("app");

    log.corp_info("X");
    log.info("after");

    let entries = memory.entries();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].level, LogLevel::Info);
    assert_eq!(memory.lines()[0], "X");
    assert_eq!(memory.lines()[1], "[10:30:45:123] info (app): after");
    assert!(log.prefix_enabled());
}

#[test]
fn test_corp_info_keeps_disabled_prefix_disabled() {
    let (log, memory) = plain_logger("app");
    log.set_prefix(false);

    log.corp_info("X");
    log.info("after");

    assert!(!log.prefix_enabled());
    assert_eq!(memory.lines(), vec!["X", "after"]);
}

#[test]
fn test_corp_info_options_reach_markup() {
    let renderer = Arc::new(RecordingRenderer::default());
    let log = ActLogger::builder()
        .renderer(renderer.clone())
        .appender(MemoryAppender::new())
        .build();

    log.corp_info("X");
    log.corp_info_with("Y", &CorpInfoOptions::default().with_font_size("20px"));
    log.corp_info_with("Z", &CorpInfoOptions::default().with_padding("4px"));

    let calls = renderer.calls.lock();
    assert_eq!(calls.len(), 3);

    assert!(calls[0][0].contains("font-size: 14px;"));
    assert!(calls[0][0].contains("padding: 20px;"));
    assert!(calls[0][0].ends_with("\"]X[c]"));

    assert!(calls[1][0].contains("font-size: 20px;"));
    assert!(calls[1][0].contains("padding: 20px;"));

    assert!(calls[2][0].contains("font-size: 14px;"));
    assert!(calls[2][0].contains("padding: 4px;"));

    for call in calls.iter() {
        assert!(call[0].starts_with("[c=\"color: white; font-weight: bold;"));
    }
}

#[test]
fn test_logs_title() {
    let (log, memory) = plain_logger("app");

    assert!(log.logs_title());

    assert_eq!(memory.lines(), vec!["ACT Commodities / frontend logs:"]);
    assert_eq!(LOGS_TITLE, "ACT Commodities / frontend logs:");
}

#[test]
fn test_multiple_args_reach_renderer_separately() {
    let renderer = Arc::new(RecordingRenderer::default());
    let memory = MemoryAppender::new();
    let log = ActLogger::builder()
        .name("app")
        .renderer(renderer.clone())
        .clock(fixed_clock())
        .appender(memory.clone())
        .build();

    log.log_args(LogLevel::Warn, ["a", "b"]);
    log.warn("single");

    let calls = renderer.calls.lock();
    assert_eq!(calls[0].len(), 3);
    assert_eq!(
        markup::strip(&calls[0][0]),
        "[10:30:45:123] warn (app): "
    );
    assert_eq!(calls[0][1], "a");
    assert_eq!(calls[0][2], "b");

    assert_eq!(calls[1].len(), 1);
    assert_eq!(markup::strip(&calls[1][0]), "[10:30:45:123] warn (app): single");

    assert_eq!(memory.entries()[0].args.len(), 3);
}

#[test]
fn test_prefix_markup_colors() {
    let renderer = Arc::new(RecordingRenderer::default());
    let log = ActLogger::builder()
        .name("app")
        .level(LogLevel::Trace)
        .renderer(renderer.clone())
        .clock(fixed_clock())
        .appender(MemoryAppender::new())
        .build();

    log.trace("x");
    log.error("x");

    let calls = renderer.calls.lock();
    assert!(calls[0][0].starts_with("[[c=\"color: grey\"]10:30:45:123[c]] [c=\"color: magenta\"]trace[c]"));
    assert!(calls[1][0].contains("[c=\"color: red\"]error[c] ([c=\"color: grey\"]app[c]): "));
}

#[test]
fn test_sub_logger_name_and_shared_prefix() {
    let (log, memory) = plain_logger("app");
    let net = log.get_logger("net");

    net.info("connected");
    log.set_prefix(false);
    net.info("quiet");

    assert_eq!(
        memory.lines(),
        vec!["[10:30:45:123] info (net): connected", "quiet"]
    );
    assert_eq!(memory.entries()[0].logger_name.as_deref(), Some("net"));
}

#[test]
fn test_threshold_applied_by_underlying_logger() {
    let renderer = Arc::new(RecordingRenderer::default());
    let memory = MemoryAppender::new();
    let log = ActLogger::builder()
        .renderer(renderer.clone())
        .level(LogLevel::Warn)
        .appender(memory.clone())
        .build();

    log.debug("hidden");
    log.info("hidden");
    log.error("shown");

    assert_eq!(memory.len(), 1);
    // Filtered calls never reach the decorator
    assert_eq!(renderer.calls.lock().len(), 1);
    assert_eq!(log.metrics().filtered_count(), 2);
}

#[test]
fn test_banner_suppressed_below_info() {
    let (log, memory) = plain_logger("app");
    log.set_level(LogLevel::Error);

    assert!(log.logs_title());
    assert!(memory.is_empty());
}

#[test]
fn test_css_render_mode() {
    let memory = MemoryAppender::new();
    let log = ActLogger::builder()
        .name("app")
        .render_mode(RenderMode::Css)
        .clock(fixed_clock())
        .appender(memory.clone())
        .build();

    log.info("hi");

    let args = &memory.entries()[0].args;
    assert_eq!(args[0], "[%c10:30:45:123%c] %cinfo%c (%capp%c): hi");
    assert_eq!(
        &args[1..],
        &["color: grey", "", "color: blue", "", "color: grey", ""]
    );
}

#[test]
fn test_custom_timestamp_format() {
    let memory = MemoryAppender::new();
    let log = ActLogger::builder()
        .name("app")
        .render_mode(RenderMode::Plain)
        .clock(fixed_clock())
        .timestamp_format(TimestampFormat::Custom("%Y-%m-%d %H:%M".to_string()))
        .appender(memory.clone())
        .build();

    log.info("x");
    assert_eq!(memory.lines(), vec!["[2025-03-14 10:30] info (app): x"]);
}

#[test]
fn test_unrenderable_timestamp_pattern_falls_back_to_clock() {
    let memory = MemoryAppender::new();
    let log = ActLogger::builder()
        .name("app")
        .render_mode(RenderMode::Plain)
        .clock(fixed_clock())
        .timestamp_format(TimestampFormat::Custom("%Q".to_string()))
        .appender(memory.clone())
        .build();

    log.info("x");
    assert_eq!(memory.lines(), vec!["[10:30:45:123] info (app): x"]);
}

#[test]
fn test_config_driven_logger() {
    let memory = MemoryAppender::new();
    let config = LoggerConfig::from_json(r#"{"name":"cfg","level":"warn","render":"plain"}"#)
        .expect("valid config");
    let log = config.builder().clock(fixed_clock()).appender(memory.clone()).build();

    log.info("hidden");
    log.warn("shown");

    assert_eq!(memory.lines(), vec!["[10:30:45:123] warn (cfg): shown"]);
}

#[test]
fn test_macros_on_act_logger() {
    let (log, memory) = plain_logger("app");

    act_logger::info!(log, "{} items", 3);
    act_logger::log_args!(log, LogLevel::Error; "code", 500);

    assert_eq!(
        memory.lines(),
        vec![
            "[10:30:45:123] info (app): 3 items",
            "[10:30:45:123] error (app):  code 500",
        ]
    );
}

#[test]
fn test_multiline_message_stays_one_line() {
    let (log, memory) = plain_logger("app");
    log.info("line one\nline two");

    assert_eq!(memory.lines(), vec!["[10:30:45:123] info (app): line one\\nline two"]);
}

#[cfg(feature = "console")]
fn ansi_logger() -> (ActLogger, MemoryAppender) {
    let memory = MemoryAppender::new();
    let log = ActLogger::builder()
        .name("app")
        .render_mode(RenderMode::Ansi)
        .clock(fixed_clock())
        .appender(memory.clone())
        .build();
    (log, memory)
}

#[cfg(feature = "console")]
#[test]
fn test_ansi_non_ascii_css_is_ignored() {
    let (log, memory) = ansi_logger();
    log.info("[c=\"color: #a\u{e9}\u{20ac}\"]x[c]");
    log.info("[c=\"background: #\u{e9}\u{e9}\u{e9}\"]y[c]");

    let lines = memory.lines();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains('x'));
    assert!(lines[1].contains('y'));
}

#[cfg(feature = "console")]
#[test]
fn test_ansi_huge_banner_padding_is_bounded() {
    let (log, memory) = ansi_logger();
    for padding in ["1e30px", "inf", "1e10px", "NaNpx"] {
        log.corp_info_with("X", &CorpInfoOptions::default().with_padding(padding));
    }

    let lines = memory.lines();
    assert_eq!(lines.len(), 4);
    assert!(lines.iter().all(|line| line.contains('X') && line.len() < 200));
}
