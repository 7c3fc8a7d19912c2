//! Fatal hook example
//!
//! Demonstrates replacing process termination on FATAL records with a hook.
//!
//! Run with: cargo run --example fatal_hook

use logfmt_logger::prelude::*;
use logfmt_logger::{ctx, with_app_name, with_fatal_hook};
use std::sync::mpsc;
use std::time::Duration;

fn main() {
    println!("=== logfmt logger - Fatal Hook Example ===\n");

    let (tx, rx) = mpsc::channel();
    let tx = std::sync::Mutex::new(tx);
    let logger = Logger::with_options(
        ConsoleSink::stderr(),
        LogLevel::Info,
        [
            with_app_name("hook-demo"),
            with_fatal_hook(move || {
                if let Ok(tx) = tx.lock() {
                    let _ = tx.send(());
                }
            }),
        ],
    );

    logger.fatal("unrecoverable state", ctx!["component", "scheduler"]);

    match rx.recv_timeout(Duration::from_secs(5)) {
        Ok(()) => println!("Fatal hook ran; shutting down on our own terms."),
        Err(_) => println!("Fatal hook did not run in time."),
    }
}
