//! Appenders over arbitrary writers and in-memory buffers

use crate::core::{Appender, Result};
use parking_lot::Mutex;
use std::io::Write;
use std::sync::Arc;

/// Adapts any [`std::io::Write`] into an appender.
///
/// Each line is handed to the writer with a single `write_all` call.
pub struct WriterAppender<W: Write + Send> {
    writer: W,
    name: String,
}

impl<W: Write + Send> WriterAppender<W> {
    pub fn new(writer: W) -> Self {
        Self::named(writer, "writer")
    }

    pub fn named(writer: W, name: impl Into<String>) -> Self {
        Self {
            writer,
            name: name.into(),
        }
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> Appender for WriterAppender<W> {
    fn append(&mut self, line: &str) -> Result<()> {
        self.writer.write_all(line.as_bytes())?;
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Collects lines in a shared buffer.
///
/// Clones share the same buffer, so one clone can be handed to the logger
/// while another is kept to read what was written.
///
/// # Example
///
/// ```
/// use rust_prefix_logger::prelude::*;
///
/// let memory = MemoryAppender::new();
/// let logger = Logger::builder()
///     .level(UrgencyLevel::Info)
///     .destination(memory.clone())
///     .build()
///     .unwrap();
///
/// logger.info("hello");
/// assert_eq!(memory.contents(), "hello\n");
/// ```
#[derive(Clone, Default)]
pub struct MemoryAppender {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl MemoryAppender {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded as UTF-8
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock()).into_owned()
    }

    /// Written lines without their trailing newlines
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(String::from).collect()
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.lock().is_empty()
    }
}

impl Appender for MemoryAppender {
    fn append(&mut self, line: &str) -> Result<()> {
        self.buffer.lock().extend_from_slice(line.as_bytes());
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
