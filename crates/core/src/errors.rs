use crate::constants::FAILURE_EXIT_CODE;

/// Result type alias for password change operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for every fatal condition of the password change helper
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Wrong argument count, exhausted or cancelled prompts
    #[error("{message}")]
    Usage { message: String },

    /// Missing or malformed environment configuration
    #[error("{message}")]
    Configuration { message: String },

    /// Rejected credential values
    #[error("{message}")]
    Validation { message: String },

    /// Host platform outside the supported families
    #[error("unsupported platform '{platform}': {message}")]
    Unsupported { platform: String, message: String },

    /// Child process could not be spawned or did not succeed
    #[error("{}", format_command_error(.command, .message, .exit_code))]
    CommandExecution {
        command: String,
        message: String,
        exit_code: Option<i32>,
    },

    /// Terminal interaction failures
    #[error("terminal {operation} failed: {source}")]
    Terminal {
        operation: String,
        #[source]
        source: std::io::Error,
    },
}

// Arguments are deliberately absent: they carry the credentials.
fn format_command_error(command: &str, message: &str, exit_code: &Option<i32>) -> String {
    match exit_code {
        Some(code) => format!("{message} (command '{command}' exited with code {code})"),
        None => format!("{message} (command '{command}' did not exit normally)"),
    }
}

// Helper methods for creating errors with context
impl Error {
    /// Create a usage error
    #[must_use]
    pub fn usage(message: impl Into<String>) -> Self {
        Error::Usage {
            message: message.into(),
        }
    }

    /// Create a configuration error
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }

    /// Create a validation error
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Error::Validation {
            message: message.into(),
        }
    }

    /// Create an unsupported platform error
    #[must_use]
    pub fn unsupported(platform: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Unsupported {
            platform: platform.into(),
            message: message.into(),
        }
    }

    /// Create a command execution error
    #[must_use]
    pub fn command_execution(
        command: impl Into<String>,
        message: impl Into<String>,
        exit_code: Option<i32>,
    ) -> Self {
        Error::CommandExecution {
            command: command.into(),
            message: message.into(),
            exit_code,
        }
    }

    /// Create a terminal I/O error
    #[must_use]
    pub fn terminal(operation: impl Into<String>, source: std::io::Error) -> Self {
        Error::Terminal {
            operation: operation.into(),
            source,
        }
    }

    /// Whether the usage line should accompany this error
    pub fn is_usage(&self) -> bool {
        matches!(self, Error::Usage { .. })
    }

    /// Process exit status for this error
    pub fn exit_code(&self) -> u8 {
        FAILURE_EXIT_CODE
    }
}
