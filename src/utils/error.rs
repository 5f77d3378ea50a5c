use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdapterError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
    Processing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
}

impl AdapterError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AdapterError::IoError(_) => ErrorCategory::Io,
            AdapterError::ConfigValidationError { .. }
            | AdapterError::InvalidConfigValueError { .. }
            | AdapterError::MissingConfigError { .. } => ErrorCategory::Configuration,
            AdapterError::ProcessingError { .. } => ErrorCategory::Processing,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 讀寫失敗通常是暫時性的，可重試
            ErrorCategory::Io => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Processing => ErrorSeverity::High,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            AdapterError::IoError(e) => format!("Could not read or write data: {}", e),
            AdapterError::ConfigValidationError { field, message } => {
                format!("Configuration field '{}' is invalid: {}", field, message)
            }
            AdapterError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
            AdapterError::MissingConfigError { field } => {
                format!("Configuration field '{}' is required", field)
            }
            AdapterError::ProcessingError { message } => {
                format!("Input could not be processed: {}", message)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Io => "Check that the input exists and the output location is writable",
            ErrorCategory::Configuration => "Review the command line flags or the TOML config file",
            ErrorCategory::Processing => "Make sure the input is valid UTF-8 text",
        }
    }
}

pub type Result<T> = std::result::Result<T, AdapterError>;
