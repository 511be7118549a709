//! Core logger types and traits

pub mod appender;
pub mod config;
pub mod error;
pub mod handler;
pub mod logger;
pub mod metrics;
pub mod prefix;
pub mod urgency_level;

pub use appender::Appender;
pub use config::{DestinationConfig, LoggerConfig};
pub use error::{LoggerError, Result};
pub use handler::{LogHandler, SharedHandler};
pub use logger::{Logger, LoggerBuilder, LoggerOptions};
pub use metrics::LoggerMetrics;
pub use prefix::{CompiledPrefix, Placeholder};
pub use urgency_level::UrgencyLevel;
