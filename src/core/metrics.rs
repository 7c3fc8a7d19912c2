//! Logger metrics for observability
//!
//! Counters for what happened to each log call. Dispatch is fire-and-forget,
//! so these are the only way to see write failures after the fact.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for logger observability
///
/// # Example
///
/// ```
/// use logfmt_logger::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
///
/// metrics.record_dispatched();
/// metrics.record_written();
///
/// assert_eq!(metrics.dispatched(), 1);
/// assert_eq!(metrics.written(), 1);
/// assert_eq!(metrics.in_flight(), 0);
/// ```
#[derive(Debug, Default)]
pub struct LoggerMetrics {
    /// Calls handed to a dispatch task
    dispatched: AtomicU64,

    /// Lines the sink accepted
    written: AtomicU64,

    /// Lines the sink rejected
    write_failures: AtomicU64,

    /// Calls lost because no task could be started
    spawn_failures: AtomicU64,
}

impl LoggerMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            dispatched: AtomicU64::new(0),
            written: AtomicU64::new(0),
            write_failures: AtomicU64::new(0),
            spawn_failures: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn dispatched(&self) -> u64 {
        self.dispatched.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn written(&self) -> u64 {
        self.written.load(Ordering::Acquire)
    }

    #[inline]
    pub fn write_failures(&self) -> u64 {
        self.write_failures.load(Ordering::Acquire)
    }

    #[inline]
    pub fn spawn_failures(&self) -> u64 {
        self.spawn_failures.load(Ordering::Relaxed)
    }

    /// Dispatched calls whose write has not finished yet.
    pub fn in_flight(&self) -> u64 {
        self.dispatched()
            .saturating_sub(self.written() + self.write_failures() + self.spawn_failures())
    }

    #[inline]
    pub fn record_dispatched(&self) -> u64 {
        self.dispatched.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_written(&self) -> u64 {
        self.written.fetch_add(1, Ordering::Release)
    }

    #[inline]
    pub fn record_write_failure(&self) -> u64 {
        self.write_failures.fetch_add(1, Ordering::Release)
    }

    #[inline]
    pub fn record_spawn_failure(&self) -> u64 {
        self.spawn_failures.fetch_add(1, Ordering::Relaxed)
    }
}
