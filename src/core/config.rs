//! Logger configuration data and option setters

use super::fatal::FatalHook;
use super::log_level::LogLevel;
use super::timestamp::TimestampFormat;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Plain configuration data, loadable from a host application's config file.
///
/// # Example
///
/// ```
/// use logfmt_logger::{LoggerConfig, LogLevel};
///
/// let config: LoggerConfig =
///     serde_json::from_str(r#"{ "min_level": "warn", "app_name": "billing" }"#).unwrap();
/// assert_eq!(config.min_level, LogLevel::Warn);
/// assert_eq!(config.app_name, "billing");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Verbosity threshold
    pub min_level: LogLevel,
    /// Empty means unset
    pub app_name: String,
    pub timestamp_format: TimestampFormat,
}

/// Settings fixed at construction time and read by every dispatch task.
#[derive(Clone, Default)]
pub(crate) struct Options {
    pub app_name: String,
    pub fatal_hook: Option<FatalHook>,
    pub timestamp_format: TimestampFormat,
}

/// A single configuration setter, applied once before the logger is built.
pub struct LoggerOption(Box<dyn FnOnce(&mut Options)>);

impl LoggerOption {
    pub(crate) fn apply(self, options: &mut Options) {
        (self.0)(options)
    }
}

/// Add `appName=<name>` to every line. An empty name leaves it unset.
pub fn with_app_name(name: impl Into<String>) -> LoggerOption {
    let name = name.into();
    LoggerOption(Box::new(move |options| options.app_name = name))
}

/// Run `hook` on FATAL records instead of terminating the process.
pub fn with_fatal_hook<F>(hook: F) -> LoggerOption
where
    F: Fn() + Send + Sync + 'static,
{
    let hook: FatalHook = Arc::new(hook);
    LoggerOption(Box::new(move |options| options.fatal_hook = Some(hook)))
}

pub fn with_timestamp_format(format: TimestampFormat) -> LoggerOption {
    LoggerOption(Box::new(move |options| options.timestamp_format = format))
}
