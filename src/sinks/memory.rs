//! In-memory sink

use crate::core::{Result, Sink};
use parking_lot::Mutex;

/// Keeps every written line in memory, in arrival order.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the lines written so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lines.lock().clear();
    }
}

impl Sink for MemorySink {
    fn write(&self, line: &[u8]) -> Result<()> {
        let line = String::from_utf8_lossy(line).into_owned();
        self.lines.lock().push(line);
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
