//! Sink over any `std::io::Write`

use crate::core::{Result, Sink};
use parking_lot::Mutex;
use std::io::Write;

/// Wraps a writer in a mutex so each line is one uninterrupted `write_all`.
///
/// No flushing is done; pass an unbuffered writer if lines must reach their
/// destination immediately.
pub struct WriterSink<W> {
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl<W: Write + Send> Sink for WriterSink<W> {
    fn write(&self, line: &[u8]) -> Result<()> {
        self.writer.lock().write_all(line)?;
        Ok(())
    }

    fn name(&self) -> &str {
        "writer"
    }
}
