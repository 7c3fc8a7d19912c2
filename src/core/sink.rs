//! Sink trait for log output destinations

use super::error::Result;
use std::sync::Arc;

/// Append-only byte destination for encoded lines.
///
/// `write` is called concurrently from many dispatch tasks and must append
/// `line` as one unit. The logger never calls anything else on a sink: no
/// flushing, buffering or rotation happens on its side.
pub trait Sink: Send + Sync {
    fn write(&self, line: &[u8]) -> Result<()>;
    fn name(&self) -> &str;
}

impl<S: Sink + ?Sized> Sink for Arc<S> {
    fn write(&self, line: &[u8]) -> Result<()> {
        (**self).write(line)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn write(&self, line: &[u8]) -> Result<()> {
        (**self).write(line)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
