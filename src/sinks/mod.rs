//! Sink implementations
//!
//! A sink is the single shared resource every dispatch task writes to. Each
//! implementation here makes one `write` call one uninterrupted append, so
//! concurrent lines never interleave.

pub mod console;
pub mod file;
pub mod memory;
pub mod writer;

pub use console::{ConsoleSink, ConsoleTarget};
pub use file::FileSink;
pub use memory::MemorySink;
pub use writer::WriterSink;

// Re-export the trait next to its implementations
pub use crate::core::Sink;
