//! Logging macros for ergonomic log message formatting.
//!
//! These are the formatted counterparts of [`Logger::notice`],
//! [`Logger::info`], [`Logger::error`] and [`Logger::critical`]. Arguments are
//! only formatted when the message will actually be written.
//!
//! # Examples
//!
//! ```
//! use rust_prefix_logger::prelude::*;
//! use rust_prefix_logger::info;
//!
//! let memory = MemoryAppender::new();
//! let logger = Logger::builder()
//!     .level(UrgencyLevel::Info)
//!     .destination(memory.clone())
//!     .build()
//!     .unwrap();
//!
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//!
//! assert_eq!(memory.contents(), "Server listening on port 8080\n");
//! ```
//!
//! [`Logger::notice`]: crate::Logger::notice
//! [`Logger::info`]: crate::Logger::info
//! [`Logger::error`]: crate::Logger::error
//! [`Logger::critical`]: crate::Logger::critical

/// Log a message at an explicit level with automatic formatting.
///
/// # Examples
///
/// ```
/// # use rust_prefix_logger::prelude::*;
/// # let logger = Logger::builder().build().unwrap();
/// use rust_prefix_logger::log;
/// log!(logger, UrgencyLevel::Notice, "Simple message");
/// log!(logger, UrgencyLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log_fmt($level, format_args!($($arg)+))
    };
}

/// Log a notice-level message.
#[macro_export]
macro_rules! notice {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::UrgencyLevel::Notice, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use rust_prefix_logger::prelude::*;
/// # let logger = Logger::builder().build().unwrap();
/// use rust_prefix_logger::info;
/// info!(logger, "Application started");
/// info!(logger, "Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::UrgencyLevel::Info, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::UrgencyLevel::Error, $($arg)+)
    };
}

/// Log a critical-level message.
///
/// # Examples
///
/// ```
/// # use rust_prefix_logger::prelude::*;
/// # let logger = Logger::builder().build().unwrap();
/// use rust_prefix_logger::critical;
/// critical!(logger, "Unable to recover from error: {}", "disk full");
/// ```
#[macro_export]
macro_rules! critical {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::UrgencyLevel::Critical, $($arg)+)
    };
}
