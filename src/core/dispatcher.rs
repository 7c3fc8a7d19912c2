//! Fire-and-forget task spawning for log calls
//!
//! Each qualifying log call becomes one independent unit of work. There is no
//! queue and no join: the caller returns as soon as the work is scheduled.
//! Two calls from the same thread may therefore reach the sink in either
//! order.

use super::error::{LoggerError, Result};

/// Boxed unit of work run off the calling path.
pub type Job = Box<dyn FnOnce() + Send + 'static>;

const DISPATCH_THREAD_NAME: &str = "logfmt-dispatch";

/// How dispatch tasks are started.
#[derive(Debug, Clone, Default)]
pub enum Spawner {
    /// One detached OS thread per call.
    #[default]
    Thread,
    /// A blocking task on the given tokio runtime.
    #[cfg(feature = "tokio")]
    Tokio(tokio::runtime::Handle),
}

impl Spawner {
    /// Use the current tokio runtime.
    ///
    /// Fails outside of a runtime context.
    #[cfg(feature = "tokio")]
    pub fn tokio_current() -> Result<Self> {
        tokio::runtime::Handle::try_current()
            .map(Spawner::Tokio)
            .map_err(|e| LoggerError::spawn(e.to_string()))
    }

    /// Schedule `job` without waiting for it.
    ///
    /// A job that cannot be started is dropped unrun, sometimes with no error
    /// (tokio discards work handed to a runtime that has shut down).
    pub fn spawn(&self, job: Job) -> Result<()> {
        match self {
            Spawner::Thread => {
                std::thread::Builder::new()
                    .name(DISPATCH_THREAD_NAME.to_string())
                    .spawn(job)
                    .map_err(|e| LoggerError::spawn(e.to_string()))?;
                Ok(())
            }
            #[cfg(feature = "tokio")]
            Spawner::Tokio(handle) => {
                // The sink write blocks, so keep it off the async workers.
                handle.spawn_blocking(job);
                Ok(())
            }
        }
    }
}
