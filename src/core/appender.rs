//! Appender trait for log output destinations

use super::error::Result;

/// A destination for fully composed log lines.
///
/// `line` already carries its trailing newline. Implementations write it as
/// a single unit and do not buffer; the logger owns no flush or close
/// management.
pub trait Appender: Send {
    fn append(&mut self, line: &str) -> Result<()>;
    fn name(&self) -> &str;
}
