//! Urgency level definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::LoggerError;

/// Ordered severity of a log message.
///
/// Used both as the tag of a single message and as the threshold of a
/// [`Logger`](crate::Logger): a threshold admits a message iff
/// `UrgencyLevel::None < message <= threshold`. `None` as a threshold
/// silences the logger completely.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyLevel {
    #[default]
    None = 0,
    Notice = 1,
    Info = 2,
    Error = 3,
    Critical = 4,
}

impl UrgencyLevel {
    /// All levels, lowest first.
    pub const ALL: [UrgencyLevel; 5] = [
        UrgencyLevel::None,
        UrgencyLevel::Notice,
        UrgencyLevel::Info,
        UrgencyLevel::Error,
        UrgencyLevel::Critical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UrgencyLevel::None => "none",
            UrgencyLevel::Notice => "notice",
            UrgencyLevel::Info => "info",
            UrgencyLevel::Error => "error",
            UrgencyLevel::Critical => "critical",
        }
    }

    #[inline]
    pub fn as_u8(&self) -> u8 {
        *self as u8
    }

    /// Whether a message of `level` passes this threshold.
    #[inline]
    pub fn admits(&self, level: UrgencyLevel) -> bool {
        level != UrgencyLevel::None && level <= *self
    }

    #[cfg(feature = "console")]
    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            UrgencyLevel::None => White,
            UrgencyLevel::Notice => Blue,
            UrgencyLevel::Info => Green,
            UrgencyLevel::Error => Red,
            UrgencyLevel::Critical => BrightRed,
        }
    }
}

impl fmt::Display for UrgencyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UrgencyLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" => Ok(UrgencyLevel::None),
            "notice" => Ok(UrgencyLevel::Notice),
            "info" => Ok(UrgencyLevel::Info),
            "error" => Ok(UrgencyLevel::Error),
            "critical" => Ok(UrgencyLevel::Critical),
            _ => Err(LoggerError::InvalidLevel(s.to_string())),
        }
    }
}
