//! Append-only log file.

use crate::internal;

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// One open log file. Appends are serialized so lines land in call order.
#[derive(Debug)]
pub struct FileOutput {
    path: PathBuf,
    /// `None` once closed.
    file: Mutex<Option<File>>,
}

impl FileOutput {
    /// Opens (or creates) `path` for appending. Existing content is kept.
    ///
    /// # Errors
    /// I/O errors opening the file.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, crate::Error> {
        let path = path.into();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        internal::debug("FILE", &format!("Opened {}", path.display()));

        Ok(Self {
            path,
            file: Mutex::new(Some(file)),
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends `line` plus a newline in a single write.
    ///
    /// # Errors
    /// `LoggerEnded` after [`FileOutput::close`], otherwise I/O errors from the write.
    pub fn append(&self, line: &str) -> Result<(), crate::Error> {
        let mut guard = self.lock();
        let Some(file) = guard.as_mut() else {
            return Err(crate::Error::LoggerEnded);
        };

        let mut content = String::with_capacity(line.len() + 1);
        content.push_str(line);
        content.push('\n');
        file.write_all(content.as_bytes())?;
        Ok(())
    }

    /// Flushes and releases the file handle. Idempotent.
    ///
    /// # Errors
    /// I/O errors from the final flush.
    pub fn close(&self) -> Result<(), crate::Error> {
        if let Some(mut file) = self.lock().take() {
            file.flush()?;
            internal::debug("FILE", &format!("Closed {}", self.path.display()));
        }
        Ok(())
    }

    /// A panic while holding the lock leaves the handle itself intact.
    fn lock(&self) -> MutexGuard<'_, Option<File>> {
        self.file.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
