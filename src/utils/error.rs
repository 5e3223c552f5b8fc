use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScorecardError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid command '{input}': {reason}")]
    InvalidCommand { input: String, reason: String },

    #[error("Match session is no longer running")]
    SessionClosed,
}

impl ScorecardError {
    pub fn invalid_command(input: &str, reason: impl Into<String>) -> Self {
        Self::InvalidCommand {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    /// Short message suitable for the operator console.
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::IoError(e) => format!("Could not read input or file: {}", e),
            Self::SerializationError(e) => format!("Could not encode scoreboard: {}", e),
            Self::ConfigError { message } => format!("Configuration problem: {}", message),
            Self::ConfigValidationError { field, message } => {
                format!("Configuration field '{}' is invalid: {}", field, message)
            }
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            Self::InvalidCommand { input, reason } => {
                format!("Unknown command '{}': {}", input, reason)
            }
            Self::SessionClosed => "The match clock has stopped running".to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::IoError(_) => "Check that the file exists and is readable",
            Self::SerializationError(_) => "Retry without --json",
            Self::ConfigError { .. } | Self::ConfigValidationError { .. } => {
                "Check the TOML file syntax and table names"
            }
            Self::InvalidConfigValueError { .. } => "Fix the value in the config file or CLI flag",
            Self::InvalidCommand { .. } => "Type 'help' to list the available commands",
            Self::SessionClosed => "Restart the scorecard",
        }
    }
}

pub type Result<T> = std::result::Result<T, ScorecardError>;
