use thiserror::Error;

/// Unified error type for pypublish operations
#[derive(Error, Debug)]
pub enum PublishError {
    #[error("Error executing command: {command}: {reason}")]
    CommandFailed { command: String, reason: String },

    #[error("Failed to start command: {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Missing argument: {0}")]
    MissingArgument(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in pypublish
pub type Result<T> = std::result::Result<T, PublishError>;

impl PublishError {
    /// Create a command failure for a command that exited unsuccessfully
    pub fn command_failed(command: impl Into<String>, reason: impl Into<String>) -> Self {
        PublishError::CommandFailed {
            command: command.into(),
            reason: reason.into(),
        }
    }

    /// Create a spawn error for a command that could not be started
    pub fn spawn(command: impl Into<String>, source: std::io::Error) -> Self {
        PublishError::Spawn {
            command: command.into(),
            source,
        }
    }

    /// Create a missing argument error with context
    pub fn missing_argument(msg: impl Into<String>) -> Self {
        PublishError::MissingArgument(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        PublishError::Config(msg.into())
    }

    /// The command line this error is attached to, if any
    pub fn command(&self) -> Option<&str> {
        match self {
            PublishError::CommandFailed { command, .. } | PublishError::Spawn { command, .. } => {
                Some(command)
            }
            _ => None,
        }
    }

    /// The underlying cause without the command prefix
    pub fn reason(&self) -> String {
        match self {
            PublishError::CommandFailed { reason, .. } => reason.clone(),
            PublishError::Spawn { source, .. } => source.to_string(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_failed_display() {
        let err = PublishError::command_failed("git tag v1.0.0", "exit status: 128");
        assert_eq!(
            err.to_string(),
            "Error executing command: git tag v1.0.0: exit status: 128"
        );
        assert_eq!(err.command(), Some("git tag v1.0.0"));
        assert_eq!(err.reason(), "exit status: 128");
    }

    #[test]
    fn test_spawn_error_keeps_source() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "sh not found");
        let err = PublishError::spawn("twine upload dist/*", io_err);
        assert_eq!(err.command(), Some("twine upload dist/*"));
        assert_eq!(err.reason(), "sh not found");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: PublishError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
        assert_eq!(err.command(), None);
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (PublishError::config("x"), "Configuration error"),
            (PublishError::missing_argument("x"), "Missing argument"),
            (
                PublishError::command_failed("git push", "x"),
                "Error executing command",
            ),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }

    #[test]
    fn test_reason_falls_back_to_display() {
        let err = PublishError::missing_argument("version is required");
        assert_eq!(err.reason(), "Missing argument: version is required");
    }
}
