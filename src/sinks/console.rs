//! Console sink implementation

use crate::core::{LoggerError, Result, Sink};
use std::io::Write;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConsoleTarget {
    #[default]
    Stdout,
    Stderr,
}

/// Writes lines to stdout or stderr.
///
/// Each line is written and flushed while holding the stream lock.
#[derive(Debug, Clone, Default)]
pub struct ConsoleSink {
    target: ConsoleTarget,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stderr() -> Self {
        Self {
            target: ConsoleTarget::Stderr,
        }
    }

    pub fn target(&self) -> ConsoleTarget {
        self.target
    }

    fn write_locked<W: Write>(mut out: W, line: &[u8]) -> Result<()> {
        out.write_all(line)
            .and_then(|_| out.flush())
            .map_err(|e| LoggerError::io_operation("writing to console", "append failed", e))
    }
}

impl Sink for ConsoleSink {
    fn write(&self, line: &[u8]) -> Result<()> {
        match self.target {
            ConsoleTarget::Stdout => Self::write_locked(std::io::stdout().lock(), line),
            ConsoleTarget::Stderr => Self::write_locked(std::io::stderr().lock(), line),
        }
    }

    fn name(&self) -> &str {
        match self.target {
            ConsoleTarget::Stdout => "stdout",
            ConsoleTarget::Stderr => "stderr",
        }
    }
}
