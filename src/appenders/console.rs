//! Console appender implementation

use crate::core::{Appender, Result};
use std::io::Write;

/// Which standard stream a [`ConsoleAppender`] writes to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConsoleTarget {
    #[default]
    Stdout,
    Stderr,
}

pub struct ConsoleAppender {
    target: ConsoleTarget,
    #[cfg(feature = "console")]
    color: Option<colored::Color>,
}

impl ConsoleAppender {
    /// Standard output, the default destination of a logger
    pub fn stdout() -> Self {
        Self::with_target(ConsoleTarget::Stdout)
    }

    pub fn stderr() -> Self {
        Self::with_target(ConsoleTarget::Stderr)
    }

    pub fn with_target(target: ConsoleTarget) -> Self {
        Self {
            target,
            #[cfg(feature = "console")]
            color: None,
        }
    }

    /// Paint every line written by this appender in one colour
    ///
    /// # Example
    ///
    /// ```
    /// use rust_prefix_logger::appenders::ConsoleAppender;
    /// use rust_prefix_logger::UrgencyLevel;
    ///
    /// let appender = ConsoleAppender::stderr()
    ///     .with_color(UrgencyLevel::Critical.color_code());
    /// ```
    #[cfg(feature = "console")]
    #[must_use]
    pub fn with_color(mut self, color: colored::Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn target(&self) -> ConsoleTarget {
        self.target
    }

    #[cfg(feature = "console")]
    fn decorate<'a>(&self, line: &'a str) -> std::borrow::Cow<'a, str> {
        use colored::Colorize;

        match self.color {
            Some(color) => {
                let body = line.strip_suffix('\n').unwrap_or(line);
                std::borrow::Cow::Owned(format!("{}\n", body.color(color)))
            }
            None => std::borrow::Cow::Borrowed(line),
        }
    }

    #[cfg(not(feature = "console"))]
    fn decorate<'a>(&self, line: &'a str) -> std::borrow::Cow<'a, str> {
        std::borrow::Cow::Borrowed(line)
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::stdout()
    }
}

impl Appender for ConsoleAppender {
    fn append(&mut self, line: &str) -> Result<()> {
        let output = self.decorate(line);

        // Lock the stream so a line is never interleaved with other output
        match self.target {
            ConsoleTarget::Stdout => std::io::stdout().lock().write_all(output.as_bytes())?,
            ConsoleTarget::Stderr => std::io::stderr().lock().write_all(output.as_bytes())?,
        }
        Ok(())
    }

    fn name(&self) -> &str {
        match self.target {
            ConsoleTarget::Stdout => "stdout",
            ConsoleTarget::Stderr => "stderr",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_stdout() {
        let appender = ConsoleAppender::default();
        assert_eq!(appender.target(), ConsoleTarget::Stdout);
        assert_eq!(appender.name(), "stdout");
        assert_eq!(ConsoleAppender::stderr().name(), "stderr");
    }

    #[test]
    fn test_append_to_console() {
        let mut appender = ConsoleAppender::stderr();
        assert!(appender.append("console appender test\n").is_ok());
    }

    #[cfg(feature = "console")]
    #[test]
    fn test_colored_line_keeps_single_newline() {
        let appender = ConsoleAppender::stdout().with_color(colored::Color::Red);
        let decorated = appender.decorate("boom\n");
        assert!(decorated.ends_with('\n'));
        assert_eq!(decorated.matches('\n').count(), 1);
        assert!(decorated.contains("boom"));
    }
}
