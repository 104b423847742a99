use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

impl StoreError {
    /// Short message suitable for printing to the operator.
    pub fn user_friendly_message(&self) -> String {
        match self {
            StoreError::IoError(e) => format!("File access failed: {}", e),
            StoreError::TomlError(_) => "The configuration file is not valid TOML".to_string(),
            StoreError::ConfigError { message } => message.clone(),
            StoreError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            StoreError::ValidationError { message } => message.clone(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            StoreError::IoError(_) => "Check that the catalog path exists and is writable",
            StoreError::TomlError(_) => "Fix the syntax of the file passed with --config",
            StoreError::ConfigError { .. } | StoreError::InvalidConfigValueError { .. } => {
                "Review the command-line flags and the [catalog]/[logging] tables"
            }
            StoreError::ValidationError { .. } => "Re-enter the value and try again",
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
