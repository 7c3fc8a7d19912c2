//! File sink implementation

use crate::core::{LoggerError, Result, Sink};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Appends lines to a file.
///
/// Writes are unbuffered and serialized by a mutex. With the `file` feature
/// each append also holds an exclusive advisory lock, so other processes that
/// lock the same file do not interleave with it.
pub struct FileSink {
    path: PathBuf,
    file: Mutex<File>,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                LoggerError::io_operation(
                    format!("opening '{}'", path.display()),
                    "cannot open log file for append",
                    e,
                )
            })?;

        Ok(Self {
            path,
            file: Mutex::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    #[cfg(feature = "file")]
    fn append(&self, file: &mut File, line: &[u8]) -> std::io::Result<()> {
        use fs2::FileExt;

        FileExt::lock_exclusive(&*file)?;
        let result = file.write_all(line);
        let unlock = FileExt::unlock(&*file);
        result.and(unlock)
    }

    #[cfg(not(feature = "file"))]
    fn append(&self, file: &mut File, line: &[u8]) -> std::io::Result<()> {
        file.write_all(line)
    }
}

impl Sink for FileSink {
    fn write(&self, line: &[u8]) -> Result<()> {
        let mut file = self.file.lock();
        self.append(&mut file, line).map_err(|e| {
            LoggerError::io_operation(
                format!("appending to '{}'", self.path.display()),
                "write failed",
                e,
            )
        })
    }

    fn name(&self) -> &str {
        "file"
    }
}
