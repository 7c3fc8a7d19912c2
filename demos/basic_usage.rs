//! Basic logger usage example
//!
//! Demonstrates leveled logging to the console with context pairs.
//!
//! Run with: cargo run --example basic_usage

use logfmt_logger::prelude::*;
use logfmt_logger::{ctx, info, warn};
use std::time::Duration;

fn main() {
    println!("=== logfmt logger - Basic Usage Example ===\n");

    let logger = Logger::builder(ConsoleSink::new())
        .min_level(LogLevel::Debug)
        .app_name("basic-demo")
        .build();

    println!("1. Logging at different levels:");
    logger.debug("This is a debug message", ctx![]);
    logger.info("This is an info message", ctx!["port", 8080]);
    logger.warn("This is a warning message", ctx!["retry", 2, "of", 5]);
    let err = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused");
    logger.error("This is an error message", ctx!["err", err]);

    println!("2. Macros, skipped values and unsupported types:");
    let user: Option<&str> = None;
    info!(logger, "Macro call", "user", user, "ratio", 0.5);
    warn!(logger, "Dangling key", "key_without_value");

    // Lines are written from background tasks in no particular order
    std::thread::sleep(Duration::from_millis(200));
    println!("\n=== Example completed successfully! ===");
}
