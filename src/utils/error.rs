use thiserror::Error;

#[derive(Error, Debug)]
pub enum FixerError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Data,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl FixerError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FixerError::IoError(_) => ErrorCategory::Io,
            FixerError::CsvError(_) | FixerError::SerializationError(_) => ErrorCategory::Data,
            FixerError::ConfigValidationError { .. }
            | FixerError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Data => ErrorSeverity::Medium,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            FixerError::IoError(e) => format!("Could not read or write a file: {}", e),
            FixerError::CsvError(e) => format!("Could not write CSV output: {}", e),
            FixerError::SerializationError(e) => format!("Could not write JSON output: {}", e),
            FixerError::ConfigValidationError { field, message } => {
                format!("Configuration field '{}' is invalid: {}", field, message)
            }
            FixerError::InvalidConfigValueError { field, value, reason } => {
                format!("'{}' is not a valid value for {}: {}", value, field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            FixerError::IoError(_) => "Check that the input file exists and the output is writable",
            FixerError::CsvError(_) | FixerError::SerializationError(_) => {
                "Try a different output format with --format"
            }
            FixerError::ConfigValidationError { .. } => "Check the TOML configuration file syntax",
            FixerError::InvalidConfigValueError { .. } => {
                "Correct the value in the command-line flags or the config file"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, FixerError>;
