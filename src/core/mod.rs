//! Core logger types and traits

pub mod config;
pub mod dispatcher;
pub mod encoder;
pub mod error;
pub mod fatal;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod record;
pub mod sink;
pub mod timestamp;
pub mod value;

pub use config::{with_app_name, with_fatal_hook, with_timestamp_format, LoggerConfig, LoggerOption};
pub use dispatcher::{Job, Spawner};
pub use encoder::{encode_pairs, PairEncoder};
pub use error::{LoggerError, Result};
pub use fatal::{FatalHook, FatalPolicy, FATAL_EXIT_CODE};
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use record::Record;
pub use sink::Sink;
pub use timestamp::TimestampFormat;
pub use value::{ContextValue, UNKNOWN_TYPE};
