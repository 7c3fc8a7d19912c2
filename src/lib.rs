//! # logfmt logger
//!
//! A leveled logger that writes one logfmt line per record:
//!
//! ```text
//! datetime=2025-01-08T10:30:45+02:00 level=INFO message="started" appName=api port=8080
//! ```
//!
//! ## Features
//!
//! - **Non-blocking**: each record is encoded and written on its own task
//! - **Loose context pairs**: integers, text and errors mix freely; empty
//!   values drop out of the line
//! - **Fatal policy**: FATAL records run a hook or terminate the process
//! - **Pluggable sinks**: console, file, any `Write`, or memory
//!
//! ## Ordering
//!
//! No ordering is guaranteed between lines, even for calls made one after the
//! other by the same thread.

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        ContextValue, LogLevel, Logger, LoggerBuilder, LoggerConfig, LoggerError,
        LoggerMetrics, Result, Sink, Spawner, TimestampFormat,
    };
    pub use crate::sinks::{ConsoleSink, FileSink, MemorySink, WriterSink};
}

pub use crate::core::{
    encode_pairs, with_app_name, with_fatal_hook, with_timestamp_format, ContextValue,
    FatalHook, FatalPolicy, LogLevel, Logger, LoggerBuilder, LoggerConfig, LoggerError,
    LoggerMetrics, LoggerOption, PairEncoder, Record, Result, Sink, Spawner, TimestampFormat,
    FATAL_EXIT_CODE, UNKNOWN_TYPE,
};
pub use crate::sinks::{ConsoleSink, FileSink, MemorySink, WriterSink};
