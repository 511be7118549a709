//! Serializable logger configuration
//!
//! Lets a logger be described in a JSON document instead of code:
//!
//! ```json
//! {
//!   "level": "error",
//!   "prefix": "{{.O}} [{{.Q}}]: ",
//!   "destinations": [
//!     { "type": "stderr" },
//!     { "type": "file", "path": "/var/log/app.log" }
//!   ]
//! }
//! ```
//!
//! Every field is optional. Missing destinations mean standard output.

use super::appender::Appender;
use super::error::{LoggerError, Result};
use super::logger::LoggerBuilder;
use super::urgency_level::UrgencyLevel;
use crate::appenders::{ConsoleAppender, FileAppender};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// One configured destination
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DestinationConfig {
    Stdout,
    Stderr,
    File { path: PathBuf },
}

impl DestinationConfig {
    /// Open the appender this entry describes
    pub fn open(&self) -> Result<Box<dyn Appender>> {
        let appender: Box<dyn Appender> = match self {
            DestinationConfig::Stdout => Box::new(ConsoleAppender::stdout()),
            DestinationConfig::Stderr => Box::new(ConsoleAppender::stderr()),
            DestinationConfig::File { path } => Box::new(FileAppender::new(path)?),
        };
        Ok(appender)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerConfig {
    pub level: UrgencyLevel,
    pub prefix: String,
    pub destinations: Vec<DestinationConfig>,
}

impl LoggerConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: LoggerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Checks that do not need to touch the file system
    pub fn validate(&self) -> Result<()> {
        for destination in &self.destinations {
            if let DestinationConfig::File { path } = destination {
                if path.as_os_str().is_empty() {
                    return Err(LoggerError::config(
                        "destinations",
                        "file destination with an empty path",
                    ));
                }
            }
        }
        Ok(())
    }

    /// Open every destination and carry level and prefix over into a builder
    pub fn into_builder(self) -> Result<LoggerBuilder> {
        self.validate()?;

        let mut builder = LoggerBuilder::new().level(self.level).prefix(self.prefix);
        for destination in &self.destinations {
            builder = builder.boxed_destination(destination.open()?);
        }
        Ok(builder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = LoggerConfig::from_json("{}").unwrap();
        assert_eq!(config, LoggerConfig::default());
        assert_eq!(config.level, UrgencyLevel::None);
        assert!(config.prefix.is_empty());
        assert!(config.destinations.is_empty());
    }

    #[test]
    fn test_full_document() {
        let config = LoggerConfig::from_json(
            r#"{
                "level": "error",
                "prefix": "{{.O}} [{{.Q}}]: ",
                "destinations": [
                    { "type": "stderr" },
                    { "type": "file", "path": "/tmp/app.log" }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(config.level, UrgencyLevel::Error);
        assert_eq!(config.prefix, "{{.O}} [{{.Q}}]: ");
        assert_eq!(
            config.destinations,
            vec![
                DestinationConfig::Stderr,
                DestinationConfig::File {
                    path: PathBuf::from("/tmp/app.log")
                },
            ]
        );
    }

    #[test]
    fn test_rejects_unknown_fields_and_levels() {
        assert!(matches!(
            LoggerConfig::from_json(r#"{ "rotation": "daily" }"#),
            Err(LoggerError::JsonError(_))
        ));
        assert!(matches!(
            LoggerConfig::from_json(r#"{ "level": "verbose" }"#),
            Err(LoggerError::JsonError(_))
        ));
    }

    #[test]
    fn test_rejects_empty_file_path() {
        let result = LoggerConfig::from_json(r#"{ "destinations": [{ "type": "file", "path": "" }] }"#);
        assert!(matches!(result, Err(LoggerError::InvalidConfiguration { .. })));
    }

    #[test]
    fn test_from_file_and_into_builder() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let log_path = temp_dir.path().join("configured.log");
        let config_path = temp_dir.path().join("logger.json");

        let config = LoggerConfig {
            level: UrgencyLevel::Info,
            prefix: "[{{.Q}}] ".to_string(),
            destinations: vec![DestinationConfig::File {
                path: log_path.clone(),
            }],
        };
        std::fs::write(&config_path, serde_json::to_string(&config).unwrap()).unwrap();

        let loaded = LoggerConfig::from_file(&config_path).unwrap();
        assert_eq!(loaded, config);

        let logger = loaded.into_builder().unwrap().build().unwrap();
        assert_eq!(logger.destination_count(), 1);
        logger.info("from config");
        logger.error("above the info threshold");

        let content = std::fs::read_to_string(&log_path).unwrap();
        assert_eq!(content, "[info] from config\n");
    }
}
