//! File appender implementation

use crate::core::{Appender, LoggerError, Result};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Appends lines to a file, unbuffered.
///
/// With the `file` feature each line is written under an advisory exclusive
/// lock so that several processes can share one log file.
pub struct FileAppender {
    file: File,
    path: PathBuf,
    name: String,
}

impl FileAppender {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| LoggerError::file_appender(path.display().to_string(), e.to_string()))?;

        Ok(Self {
            file,
            name: format!("file:{}", path.display()),
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    #[cfg(feature = "file")]
    fn write_line(&mut self, line: &str) -> std::io::Result<()> {
        use fs2::FileExt;

        self.file.lock_exclusive()?;
        let written = self.file.write_all(line.as_bytes());
        let unlocked = FileExt::unlock(&self.file);
        written.and(unlocked)
    }

    #[cfg(not(feature = "file"))]
    fn write_line(&mut self, line: &str) -> std::io::Result<()> {
        self.file.write_all(line.as_bytes())
    }
}

impl Appender for FileAppender {
    fn append(&mut self, line: &str) -> Result<()> {
        self.write_line(line)?;
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
