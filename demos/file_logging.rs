//! File logging example
//!
//! Demonstrates appending logfmt lines to a file from several threads.
//!
//! Run with: cargo run --example file_logging

use logfmt_logger::ctx;
use logfmt_logger::prelude::*;
use std::time::{Duration, Instant};

fn main() -> Result<()> {
    println!("=== logfmt logger - File Logging Example ===\n");

    let path = std::env::temp_dir().join("logfmt_demo.log");
    let logger = Logger::builder(FileSink::new(&path)?)
        .min_level(LogLevel::Info)
        .app_name("file-demo")
        .timestamp_format(TimestampFormat::Rfc3339Millis)
        .build();

    let workers: Vec<_> = (0..4)
        .map(|worker| {
            let logger = logger.clone();
            std::thread::spawn(move || {
                for job in 0..5 {
                    logger.info("job finished", ctx!["worker", worker, "job", job]);
                }
            })
        })
        .collect();
    for worker in workers {
        let _ = worker.join();
    }

    let deadline = Instant::now() + Duration::from_secs(5);
    while logger.metrics().in_flight() > 0 && Instant::now() < deadline {
        std::thread::sleep(Duration::from_millis(10));
    }

    println!("Wrote {} lines to {}", logger.metrics().written(), path.display());
    println!("\n=== Example completed successfully! ===");

    Ok(())
}
