//! Logging macros for ergonomic context pairs.
//!
//! Context pairs are a flat list of heterogeneous values. These macros convert
//! each one into a [`ContextValue`](crate::ContextValue) at the call site.
//!
//! # Examples
//!
//! ```
//! use logfmt_logger::prelude::*;
//! use logfmt_logger::{ctx, info};
//!
//! let logger = Logger::new(MemorySink::new(), LogLevel::Info);
//!
//! // Plain message
//! info!(logger, "Server started");
//!
//! // With context pairs
//! info!(logger, "Listening", "port", 8080, "host", "0.0.0.0");
//!
//! // Building the pairs separately
//! let pairs = ctx!["user_id", 42, "action", "login"];
//! logger.info("User action", pairs);
//! ```

/// Build a `Vec<ContextValue>` from heterogeneous values.
///
/// # Examples
///
/// ```
/// use logfmt_logger::{ctx, ContextValue};
///
/// let pairs = ctx!["code", 500, "reason", "timeout"];
/// assert_eq!(pairs[1], ContextValue::Int(500));
/// assert!(ctx![].is_empty());
/// ```
#[macro_export]
macro_rules! ctx {
    () => {
        ::std::vec::Vec::<$crate::ContextValue>::new()
    };
    ($($value:expr),+ $(,)?) => {
        ::std::vec![$($crate::ContextValue::from($value)),+]
    };
}

/// Log a message at an explicit level.
///
/// # Examples
///
/// ```
/// # use logfmt_logger::prelude::*;
/// # let logger = Logger::new(MemorySink::new(), LogLevel::Debug);
/// use logfmt_logger::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Request failed", "code", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $message:expr $(, $value:expr)* $(,)?) => {
        $logger.log($level, $message, $crate::ctx![$($value),*])
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
/// # Examples
///
/// ```
/// # use logfmt_logger::prelude::*;
/// # let logger = Logger::new(MemorySink::new(), LogLevel::Debug);
/// use logfmt_logger::error;
/// let err = std::io::Error::new(std::io::ErrorKind::Other, "connection reset");
/// error!(logger, "Failed to connect to database", "err", err);
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a fatal-level message.
///
/// Without a fatal hook this terminates the process once the line is written.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Fatal, $($arg)+)
    };
}
