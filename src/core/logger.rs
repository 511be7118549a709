//! Main logger implementation

use super::{
    appender::Appender,
    config::LoggerConfig,
    error::Result,
    handler::{LogHandler, SharedHandler},
    metrics::LoggerMetrics,
    prefix::CompiledPrefix,
    urgency_level::UrgencyLevel,
};
use crate::appenders::ConsoleAppender;
use parking_lot::Mutex;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

/// Everything a [`Logger`] is built from.
///
/// The default writes nothing (level `None`), has no prefix and a single
/// standard output destination.
pub struct LoggerOptions {
    /// Highest urgency level that is still written
    pub level: UrgencyLevel,
    /// Raw prefix, compiled when the logger is built
    pub prefix: String,
    /// Written in this order, once per emitted line
    pub destinations: Vec<Box<dyn Appender>>,
    /// Replaces the whole built-in pipeline when set
    pub handler: Option<SharedHandler>,
}

impl Default for LoggerOptions {
    fn default() -> Self {
        Self {
            level: UrgencyLevel::None,
            prefix: String::new(),
            destinations: vec![Box::new(ConsoleAppender::stdout()) as Box<dyn Appender>],
            handler: None,
        }
    }
}

/// Synchronous logger writing `<prefix><message>\n` lines.
///
/// The level is a ceiling: a message is written iff its level is above
/// `None` and at most the configured level, so `Critical` admits everything
/// and `None` nothing.
///
/// Configuration is fixed at construction. A logger can be shared between
/// threads; each destination is locked only while one line is written to it.
///
/// # Example
///
/// ```
/// use rust_prefix_logger::prelude::*;
///
/// let memory = MemoryAppender::new();
/// let logger = Logger::builder()
///     .level(UrgencyLevel::Info)
///     .prefix("[{{.Q}}] ")
///     .destination(memory.clone())
///     .build()?;
///
/// logger.notice("written");
/// logger.error("above the threshold, not written");
///
/// assert_eq!(memory.contents(), "[notice] written\n");
/// # Ok::<(), LoggerError>(())
/// ```
pub struct Logger {
    level: UrgencyLevel,
    prefix: CompiledPrefix,
    destinations: Vec<Mutex<Box<dyn Appender>>>,
    handler: Option<SharedHandler>,
    metrics: LoggerMetrics,
}

impl Logger {
    /// Build a logger from options, compiling the prefix.
    ///
    /// An empty destination list is accepted and writes nowhere.
    ///
    /// # Errors
    ///
    /// Prefix compilation errors: [`LoggerError::TemplateSyntax`] and
    /// [`LoggerError::UnknownPlaceholder`].
    ///
    /// [`LoggerError::TemplateSyntax`]: crate::LoggerError::TemplateSyntax
    /// [`LoggerError::UnknownPlaceholder`]: crate::LoggerError::UnknownPlaceholder
    pub fn new(options: LoggerOptions) -> Result<Self> {
        let prefix = CompiledPrefix::compile(options.prefix)?;

        Ok(Self {
            level: options.level,
            prefix,
            destinations: options.destinations.into_iter().map(Mutex::new).collect(),
            handler: options.handler,
            metrics: LoggerMetrics::new(),
        })
    }

    /// Build a logger from a deserialized configuration
    pub fn from_config(config: LoggerConfig) -> Result<Self> {
        config.into_builder()?.build()
    }

    pub fn level(&self) -> UrgencyLevel {
        self.level
    }

    pub fn prefix(&self) -> &CompiledPrefix {
        &self.prefix
    }

    pub fn destination_count(&self) -> usize {
        self.destinations.len()
    }

    pub fn has_handler(&self) -> bool {
        self.handler.is_some()
    }

    /// Whether a message of `level` would reach the handler or the
    /// destinations
    #[inline]
    pub fn enabled(&self, level: UrgencyLevel) -> bool {
        self.handler.is_some() || self.level.admits(level)
    }

    /// Get the logger metrics for detailed observability
    ///
    /// # Example
    ///
    /// ```
    /// use rust_prefix_logger::prelude::*;
    ///
    /// let logger = Logger::builder()
    ///     .level(UrgencyLevel::Notice)
    ///     .destination(MemoryAppender::new())
    ///     .build()
    ///     .unwrap();
    ///
    /// logger.notice("kept");
    /// logger.critical("above threshold");
    ///
    /// assert_eq!(logger.metrics().emitted_count(), 1);
    /// assert_eq!(logger.metrics().filtered_count(), 1);
    /// ```
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    pub fn log(&self, level: UrgencyLevel, message: impl AsRef<str>) {
        let message = message.as_ref();

        if let Some(ref handler) = self.handler {
            self.metrics.record_handled();
            handler.handle(level, message);
            return;
        }

        if !self.level.admits(level) {
            self.metrics.record_filtered();
            return;
        }

        let line = self.compose(level, message);
        self.write_line(&line);
    }

    /// Log pre-formatted arguments, see the [`log!`](crate::log) macro.
    ///
    /// Formatting is skipped for messages the logger would drop anyway.
    pub fn log_fmt(&self, level: UrgencyLevel, args: fmt::Arguments<'_>) {
        if !self.enabled(level) {
            self.metrics.record_filtered();
            return;
        }

        match args.as_str() {
            Some(message) => self.log(level, message),
            None => self.log(level, args.to_string()),
        }
    }

    #[inline]
    pub fn notice(&self, message: impl AsRef<str>) {
        self.log(UrgencyLevel::Notice, message);
    }

    #[inline]
    pub fn info(&self, message: impl AsRef<str>) {
        self.log(UrgencyLevel::Info, message);
    }

    #[inline]
    pub fn error(&self, message: impl AsRef<str>) {
        self.log(UrgencyLevel::Error, message);
    }

    #[inline]
    pub fn critical(&self, message: impl AsRef<str>) {
        self.log(UrgencyLevel::Critical, message);
    }

    /// Render the prefix outside of any lock and build the complete line
    fn compose(&self, level: UrgencyLevel, message: &str) -> String {
        let prefix = self.prefix.render(level);

        let mut line = String::with_capacity(prefix.len() + message.len() + 1);
        line.push_str(&prefix);
        line.push_str(message);
        line.push('\n');
        line
    }

    /// Write one line to every destination in order.
    ///
    /// Errors and panics of a destination are counted and otherwise ignored,
    /// so the remaining destinations still receive the line.
    fn write_line(&self, line: &str) {
        self.metrics.record_emitted();

        for destination in &self.destinations {
            let mut appender = destination.lock();
            let result = panic::catch_unwind(AssertUnwindSafe(|| appender.append(line)));

            if !matches!(result, Ok(Ok(()))) {
                self.metrics.record_write_failure();
            }
        }
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let destinations: Vec<String> = self
            .destinations
            .iter()
            .map(|destination| destination.lock().name().to_string())
            .collect();

        f.debug_struct("Logger")
            .field("level", &self.level)
            .field("prefix", &self.prefix.raw())
            .field("destinations", &destinations)
            .field("handler", &self.handler.is_some())
            .finish()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// Destinations default to standard output when none are added.
///
/// # Example
/// ```
/// use rust_prefix_logger::prelude::*;
///
/// let logger = Logger::builder()
///     .level(UrgencyLevel::Critical)
///     .prefix("{{.O}} [{{.Q}}]: ")
///     .destination(ConsoleAppender::stderr())
///     .build()
///     .expect("valid prefix");
/// ```
pub struct LoggerBuilder {
    options: LoggerOptions,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            options: LoggerOptions {
                destinations: Vec::new(),
                ..LoggerOptions::default()
            },
        }
    }

    /// Set the threshold level
    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: UrgencyLevel) -> Self {
        self.options.level = level;
        self
    }

    /// Set the raw prefix; it is compiled by [`build`](Self::build)
    #[must_use = "builder methods return a new value"]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.options.prefix = prefix.into();
        self
    }

    /// Add a destination
    #[must_use = "builder methods return a new value"]
    pub fn destination<A: Appender + 'static>(mut self, appender: A) -> Self {
        self.options.destinations.push(Box::new(appender));
        self
    }

    /// Add an already boxed destination
    #[must_use = "builder methods return a new value"]
    pub fn boxed_destination(mut self, appender: Box<dyn Appender>) -> Self {
        self.options.destinations.push(appender);
        self
    }

    /// Replace the built-in pipeline with a custom handler
    ///
    /// # Example
    ///
    /// ```
    /// use rust_prefix_logger::prelude::*;
    ///
    /// let logger = Logger::builder()
    ///     .handler(|level: UrgencyLevel, message: &str| {
    ///         eprintln!("{}: {}", level, message);
    ///     })
    ///     .build()
    ///     .unwrap();
    ///
    /// logger.info("goes to the handler");
    /// ```
    #[must_use = "builder methods return a new value"]
    pub fn handler<H: LogHandler + 'static>(self, handler: H) -> Self {
        self.shared_handler(Arc::new(handler))
    }

    /// Replace the built-in pipeline with an already shared handler
    #[must_use = "builder methods return a new value"]
    pub fn shared_handler(mut self, handler: SharedHandler) -> Self {
        self.options.handler = Some(handler);
        self
    }

    /// Build the Logger
    pub fn build(mut self) -> Result<Logger> {
        if self.options.destinations.is_empty() {
            self.options
                .destinations
                .push(Box::new(ConsoleAppender::stdout()));
        }
        Logger::new(self.options)
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}
