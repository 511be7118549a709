//! Error types for the logger

pub type Result<T> = std::result::Result<T, LoggerError>;

/// Every error the crate can report.
///
/// All of them surface at construction time; logging calls never fail.
#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Malformed `{{ ... }}` syntax in a prefix template
    #[error("prefix template syntax error at byte {position}: {detail}")]
    TemplateSyntax { position: usize, detail: String },

    /// Well-formed placeholder whose name is not in the recognized set
    #[error("unknown placeholder in prefix: {{{{.{0}}}}}")]
    UnknownPlaceholder(String),

    /// Unparseable urgency level name
    #[error("Invalid urgency level: '{0}'")]
    InvalidLevel(String),

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// File appender error with path
    #[error("File appender error for '{path}': {message}")]
    FileAppenderError { path: String, message: String },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON configuration error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Writer error (generic)
    #[error("Writer error: {0}")]
    WriterError(String),
}

impl LoggerError {
    /// Create a template syntax error at a byte offset of the raw prefix
    pub fn template_syntax(position: usize, detail: impl Into<String>) -> Self {
        LoggerError::TemplateSyntax {
            position,
            detail: detail.into(),
        }
    }

    /// Create an unknown placeholder error
    pub fn unknown_placeholder(name: impl Into<String>) -> Self {
        LoggerError::UnknownPlaceholder(name.into())
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a file appender error
    pub fn file_appender(path: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::FileAppenderError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a writer error (generic)
    pub fn writer<S: Into<String>>(msg: S) -> Self {
        LoggerError::WriterError(msg.into())
    }

    /// True for the two prefix compilation errors
    pub fn is_template_error(&self) -> bool {
        matches!(
            self,
            LoggerError::TemplateSyntax { .. } | LoggerError::UnknownPlaceholder(_)
        )
    }
}
