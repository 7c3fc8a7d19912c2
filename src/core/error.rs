//! Error types for the logger system

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Sink write error (generic)
    #[error("Writer error: {0}")]
    WriterError(String),

    /// A dispatch thread could not be started
    #[error("Failed to spawn dispatch task: {0}")]
    SpawnError(String),

    /// Unknown level name
    #[error("Invalid log level: '{0}'")]
    InvalidLevel(String),
}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a writer error (generic)
    pub fn writer<S: Into<String>>(msg: S) -> Self {
        LoggerError::WriterError(msg.into())
    }

    pub fn spawn<S: Into<String>>(msg: S) -> Self {
        LoggerError::SpawnError(msg.into())
    }

    pub fn invalid_level<S: Into<String>>(name: S) -> Self {
        LoggerError::InvalidLevel(name.into())
    }
}
