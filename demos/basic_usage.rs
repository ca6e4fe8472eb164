//! Basic logger usage example
//!
//! Demonstrates the prefixed console logger, sub-loggers and banners.
//!
//! Run with: cargo run --example basic_usage

use act_logger::prelude::*;
use act_logger::{info, log_args};

fn main() -> Result<()> {
    let log = init_logger("demo");
    log.enable_all();

    // Banner without prefix
    log.logs_title();

    println!("1. Logging at different levels:");
    log.trace("This is a trace message");
    log.debug("This is a debug message");
    log.info("This is an info message");
    log.warn("This is a warning message");
    log.error("This is an error message");

    println!("\n2. Multiple arguments and formatting:");
    log_args!(log, LogLevel::Info; "user", 42, "signed in");
    info!(log, "Processing {} items", 100);

    println!("\n3. Sub-logger:");
    let pricing = log.get_logger("pricing");
    pricing.info("Quote refreshed");

    println!("\n4. Prefix disabled:");
    log.set_prefix(false);
    log.info("No timestamp on this line");
    log.set_prefix(true);

    println!("\n5. Custom banner:");
    log.corp_info_with(
        "Release 2.3",
        &CorpInfoOptions::default().with_font_size("20px"),
    );

    println!("\n6. Minimum level set to WARN - info won't show:");
    log.set_level(LogLevel::Warn);
    log.info("Info message (hidden)");
    log.warn("Warning message (visible)");

    log.flush()?;
    Ok(())
}
