use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatternError {
    #[error("Model '{model}' has no '{method}' capability")]
    MissingCapability { model: String, method: String },

    #[error("Observer '{observer}' is not registered")]
    ObserverNotFound { observer: String },

    #[error("Observer '{observer}' failed: {message}")]
    ObserverFailed { observer: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

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

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Capability,
    Registry,
    Observer,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl PatternError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PatternError::MissingCapability { .. } => ErrorCategory::Capability,
            PatternError::ObserverNotFound { .. } => ErrorCategory::Registry,
            PatternError::ObserverFailed { .. } => ErrorCategory::Observer,
            PatternError::ConfigValidationError { .. }
            | PatternError::InvalidConfigValueError { .. }
            | PatternError::MissingConfigError { .. } => ErrorCategory::Configuration,
            PatternError::IoError(_) | PatternError::SerializationError(_) => {
                ErrorCategory::System
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Registry => ErrorSeverity::Low,
            ErrorCategory::Observer => ErrorSeverity::Medium,
            ErrorCategory::Capability | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            PatternError::MissingCapability { method, .. } => format!(
                "Adapt the model with a method it exposes instead of '{}' (openai models expose 'query', huggingface models expose 'generate')",
                method
            ),
            PatternError::ObserverNotFound { .. } => {
                "Only remove observers that were previously added to the notifier".to_string()
            }
            PatternError::ObserverFailed { observer, .. } => format!(
                "Check the '{}' observer; observers registered after it did not receive the output",
                observer
            ),
            PatternError::ConfigValidationError { .. }
            | PatternError::InvalidConfigValueError { .. }
            | PatternError::MissingConfigError { .. } => {
                "Fix the demo configuration file or run without --config to use the built-in samples"
                    .to_string()
            }
            PatternError::IoError(_) => "Check that the file exists and is readable".to_string(),
            PatternError::SerializationError(_) => {
                "Report output could not be encoded; rerun without --json".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Capability => format!("Adapter error: {}", self),
            ErrorCategory::Registry | ErrorCategory::Observer => {
                format!("Notifier error: {}", self)
            }
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, PatternError>;
