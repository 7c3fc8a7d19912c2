//! Main logger implementation

use super::{
    config::{LoggerConfig, LoggerOption, Options},
    dispatcher::{Job, Spawner},
    fatal::{FatalHook, FatalPolicy},
    log_level::LogLevel,
    metrics::LoggerMetrics,
    record::Record,
    sink::Sink,
    timestamp::{self, TimestampFormat},
    value::ContextValue,
};
use std::fmt;
use std::sync::Arc;

/// Leveled logfmt logger.
///
/// Every call at or above the verbosity threshold is encoded and written on
/// its own task; the calling thread never waits for the write. Lines from
/// different calls may reach the sink in any order, including two calls made
/// back to back by the same thread.
///
/// A FATAL record runs the configured fatal hook after its write, or exits
/// the process with status 1 when no hook is set. Exiting may discard other
/// writes still in flight.
///
/// Cloning is cheap and shares the same configuration and sink.
#[derive(Clone)]
pub struct Logger {
    inner: Arc<Inner>,
}

struct Inner {
    sink: Arc<dyn Sink>,
    min_level: LogLevel,
    app_name: String,
    timestamp_format: TimestampFormat,
    fatal_policy: FatalPolicy,
    spawner: Spawner,
    metrics: LoggerMetrics,
}

impl Inner {
    /// Body of one dispatch task.
    fn emit(&self, level: LogLevel, message: &str, context: &[ContextValue]) {
        let line = Record::new(timestamp::now(), level, message, context)
            .with_app_name(Some(self.app_name.as_str()))
            .encode(self.timestamp_format);

        match self.sink.write(line.as_bytes()) {
            Ok(()) => {
                self.metrics.record_written();
            }
            Err(e) => {
                self.metrics.record_write_failure();
                eprintln!(
                    "[LOGGER ERROR] Sink '{}' failed to write {} record: {}",
                    self.sink.name(),
                    level,
                    e
                );
            }
        }

        if level.is_fatal() {
            self.fatal_policy.apply();
        }
    }

    /// A scheduled record that will never run.
    fn abandon(&self, level: LogLevel) {
        self.metrics.record_spawn_failure();
        eprintln!("[LOGGER ERROR] Dispatch task never ran. Dropping {} record.", level);

        // The record is lost, but a fatal call still ends the process.
        if level.is_fatal() {
            self.fatal_policy.apply();
        }
    }
}

/// One record travelling to its dispatch task.
///
/// A spawner may drop the job without running it (a failed thread spawn, a
/// runtime that has shut down). Dropping an unrun record counts it as lost
/// and still applies the fatal policy.
struct PendingRecord {
    inner: Arc<Inner>,
    level: LogLevel,
    message: String,
    context: Vec<ContextValue>,
    delivered: bool,
}

impl PendingRecord {
    fn run(mut self) {
        self.delivered = true;
        self.inner.emit(self.level, &self.message, &self.context);
    }
}

impl Drop for PendingRecord {
    fn drop(&mut self) {
        if !self.delivered {
            self.inner.abandon(self.level);
        }
    }
}

impl Logger {
    /// Logger with default options.
    #[must_use]
    pub fn new<S: Sink + 'static>(sink: S, min_level: LogLevel) -> Self {
        Self::builder(sink).min_level(min_level).build()
    }

    /// Logger configured by a list of option setters.
    ///
    /// # Example
    ///
    /// ```
    /// use logfmt_logger::prelude::*;
    /// use logfmt_logger::{with_app_name, with_fatal_hook};
    ///
    /// let logger = Logger::with_options(
    ///     MemorySink::new(),
    ///     LogLevel::Debug,
    ///     [with_app_name("billing"), with_fatal_hook(|| {})],
    /// );
    /// assert_eq!(logger.app_name(), Some("billing"));
    /// ```
    #[must_use]
    pub fn with_options<S, I>(sink: S, min_level: LogLevel, options: I) -> Self
    where
        S: Sink + 'static,
        I: IntoIterator<Item = LoggerOption>,
    {
        let mut builder = Self::builder(sink).min_level(min_level);
        for option in options {
            builder = builder.option(option);
        }
        builder.build()
    }

    #[must_use]
    pub fn builder<S: Sink + 'static>(sink: S) -> LoggerBuilder {
        LoggerBuilder::new(sink)
    }

    /// Whether a call at `level` would produce a line.
    #[inline]
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level >= self.inner.min_level
    }

    pub fn min_level(&self) -> LogLevel {
        self.inner.min_level
    }

    /// The configured application name, if any.
    pub fn app_name(&self) -> Option<&str> {
        Some(self.inner.app_name.as_str()).filter(|name| !name.is_empty())
    }

    pub fn has_fatal_hook(&self) -> bool {
        self.inner.fatal_policy.has_hook()
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.inner.metrics
    }

    /// Log `message` with flat `key, value, ...` context pairs.
    ///
    /// Below-threshold calls return without scheduling anything. Otherwise
    /// the record is handed to a new task and this returns immediately.
    pub fn log(&self, level: LogLevel, message: impl Into<String>, context: Vec<ContextValue>) {
        if !self.is_enabled(level) {
            return;
        }

        let pending = PendingRecord {
            inner: Arc::clone(&self.inner),
            level,
            message: message.into(),
            context,
            delivered: false,
        };
        let job: Job = Box::new(move || pending.run());

        self.inner.metrics.record_dispatched();
        // A rejected job has already been dropped, which accounted for the record.
        if let Err(e) = self.inner.spawner.spawn(job) {
            eprintln!("[LOGGER ERROR] {}", e);
        }
    }

    /// Additional information that may help in identifying errors
    #[inline]
    pub fn debug(&self, message: impl Into<String>, context: Vec<ContextValue>) {
        self.log(LogLevel::Debug, message, context);
    }

    /// Useful or important information about the operation of the application
    #[inline]
    pub fn info(&self, message: impl Into<String>, context: Vec<ContextValue>) {
        self.log(LogLevel::Info, message, context);
    }

    /// Problems worth attention that do not break the application logic
    #[inline]
    pub fn warn(&self, message: impl Into<String>, context: Vec<ContextValue>) {
        self.log(LogLevel::Warn, message, context);
    }

    /// A failure while running the application
    #[inline]
    pub fn error(&self, message: impl Into<String>, context: Vec<ContextValue>) {
        self.log(LogLevel::Error, message, context);
    }

    /// An error after which continuing makes no sense.
    ///
    /// Terminates the process unless a fatal hook is configured.
    #[inline]
    pub fn fatal(&self, message: impl Into<String>, context: Vec<ContextValue>) {
        self.log(LogLevel::Fatal, message, context);
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("sink", &self.inner.sink.name())
            .field("min_level", &self.inner.min_level)
            .field("app_name", &self.inner.app_name)
            .field("timestamp_format", &self.inner.timestamp_format)
            .field("fatal_policy", &self.inner.fatal_policy)
            .field("spawner", &self.inner.spawner)
            .finish()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use logfmt_logger::prelude::*;
///
/// let logger = Logger::builder(ConsoleSink::new())
///     .min_level(LogLevel::Debug)
///     .app_name("api-gateway")
///     .fatal_hook(|| eprintln!("fatal record logged"))
///     .timestamp_format(TimestampFormat::Rfc3339Millis)
///     .build();
/// assert!(logger.is_enabled(LogLevel::Debug));
/// ```
pub struct LoggerBuilder {
    sink: Arc<dyn Sink>,
    min_level: LogLevel,
    options: Options,
    spawner: Spawner,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new<S: Sink + 'static>(sink: S) -> Self {
        Self {
            sink: Arc::new(sink),
            min_level: LogLevel::default(),
            options: Options::default(),
            spawner: Spawner::default(),
        }
    }

    /// Builder preloaded from configuration data.
    pub fn from_config<S: Sink + 'static>(sink: S, config: LoggerConfig) -> Self {
        Self::new(sink)
            .min_level(config.min_level)
            .app_name(config.app_name)
            .timestamp_format(config.timestamp_format)
    }

    /// Set the verbosity threshold
    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Set the application name; empty leaves it unset
    #[must_use = "builder methods return a new value"]
    pub fn app_name(mut self, name: impl Into<String>) -> Self {
        self.options.app_name = name.into();
        self
    }

    /// Run `hook` on FATAL records instead of exiting
    #[must_use = "builder methods return a new value"]
    pub fn fatal_hook<F>(mut self, hook: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        let hook: FatalHook = Arc::new(hook);
        self.options.fatal_hook = Some(hook);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.options.timestamp_format = format;
        self
    }

    /// Choose how dispatch tasks are started
    #[must_use = "builder methods return a new value"]
    pub fn spawner(mut self, spawner: Spawner) -> Self {
        self.spawner = spawner;
        self
    }

    /// Apply a single option setter
    #[must_use = "builder methods return a new value"]
    pub fn option(mut self, option: LoggerOption) -> Self {
        option.apply(&mut self.options);
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        let Options {
            app_name,
            fatal_hook,
            timestamp_format,
        } = self.options;

        Logger {
            inner: Arc::new(Inner {
                sink: self.sink,
                min_level: self.min_level,
                app_name,
                timestamp_format,
                fatal_policy: FatalPolicy::from_hook(fatal_hook),
                spawner: self.spawner,
                metrics: LoggerMetrics::new(),
            }),
        }
    }
}
