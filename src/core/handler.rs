//! Custom handler hook

use super::urgency_level::UrgencyLevel;
use std::sync::Arc;

/// Replaces the built-in filter/render/write pipeline of a logger.
///
/// When a logger carries a handler, every call is forwarded to it with the
/// level and the fully formatted message; the configured threshold, prefix
/// and destinations are ignored.
///
/// Any `Fn(UrgencyLevel, &str) + Send + Sync` is a handler.
pub trait LogHandler: Send + Sync {
    fn handle(&self, level: UrgencyLevel, message: &str);
}

impl<F> LogHandler for F
where
    F: Fn(UrgencyLevel, &str) + Send + Sync,
{
    fn handle(&self, level: UrgencyLevel, message: &str) {
        self(level, message)
    }
}

/// Shared handle to a handler, as stored by the logger
pub type SharedHandler = Arc<dyn LogHandler>;
