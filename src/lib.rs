//! # Rust Prefix Logger
//!
//! A small synchronous logger: messages tagged with an urgency level are
//! filtered against a threshold, decorated with a compiled prefix template
//! and written to one or more destinations.
//!
//! ## Features
//!
//! - **Prefix Templates**: `{{.O}} [{{.Q}}]: ` style prefixes with date/time
//!   and urgency placeholders, validated once at construction
//! - **Multiple Destinations**: Console, file, any `io::Write`, in-memory
//! - **Thread Safe**: One logger can be shared by many producer threads
//! - **Never Fails at Runtime**: Write errors are counted, not propagated
//!
//! ## Example
//!
//! ```
//! use rust_prefix_logger::prelude::*;
//!
//! let logger = Logger::builder()
//!     .level(UrgencyLevel::Critical)
//!     .prefix("{{.O}} [{{.Q}}]: ")
//!     .destination(ConsoleAppender::stdout())
//!     .build()?;
//!
//! logger.notice("test notice message");
//! logger.info("test info message");
//! # Ok::<(), LoggerError>(())
//! ```

pub mod appenders;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, FileAppender, MemoryAppender, WriterAppender};
    pub use crate::core::{
        Appender, CompiledPrefix, DestinationConfig, LogHandler, Logger, LoggerBuilder,
        LoggerConfig, LoggerError, LoggerMetrics, LoggerOptions, Placeholder, Result,
        SharedHandler, UrgencyLevel,
    };
}

pub use crate::appenders::{
    ConsoleAppender, ConsoleTarget, FileAppender, MemoryAppender, WriterAppender,
};
pub use crate::core::{
    Appender, CompiledPrefix, DestinationConfig, LogHandler, Logger, LoggerBuilder, LoggerConfig,
    LoggerError, LoggerMetrics, LoggerOptions, Placeholder, Result, SharedHandler, UrgencyLevel,
};
