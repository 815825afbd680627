use thiserror::Error;

/// Faults raised inside the guarded block. These are caught by the handler
/// chain and never leave the demo routine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Fault {
    #[error("/ by zero")]
    DivisionByZero,

    #[error("Index {index} out of bounds for length {length}")]
    IndexOutOfRange { index: usize, length: usize },

    #[error("{message}")]
    Generic { message: String },
}

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Cannot read config file '{path}': {source}")]
    ConfigReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    System,
}

impl DemoError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DemoError::IoError(_) => ErrorCategory::System,
            DemoError::ConfigReadError { .. }
            | DemoError::TomlError(_)
            | DemoError::MissingConfigError { .. }
            | DemoError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DemoError::IoError(e) => format!("Could not write output: {}", e),
            DemoError::ConfigReadError { path, source } => {
                format!("Cannot read config file '{}': {}", path, source)
            }
            DemoError::TomlError(e) => format!("Config file is not valid TOML: {}", e),
            DemoError::MissingConfigError { field } => {
                format!("Required setting '{}' is missing", field)
            }
            DemoError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, DemoError>;
