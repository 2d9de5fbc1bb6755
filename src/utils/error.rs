use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecError {
    #[error("Catalog request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },

    #[error("No acceptable results after {attempts} attempts")]
    ResultsExhausted { attempts: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Configuration,
    Selection,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl RecError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RecError::ApiError(_) => ErrorCategory::Network,
            RecError::SerializationError(_) => ErrorCategory::Data,
            RecError::IoError(_) => ErrorCategory::System,
            RecError::MissingConfigError { .. } | RecError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            RecError::ProcessingError { .. } => ErrorCategory::Data,
            RecError::ResultsExhausted { .. } => ErrorCategory::Selection,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // Running out of acceptable books is an empty state, not a fault.
            RecError::ResultsExhausted { .. } => ErrorSeverity::Low,
            RecError::ApiError(_) => ErrorSeverity::Medium,
            RecError::SerializationError(_)
            | RecError::MissingConfigError { .. }
            | RecError::InvalidConfigValueError { .. }
            | RecError::ProcessingError { .. } => ErrorSeverity::High,
            RecError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            RecError::ApiError(_) => {
                "Could not reach the book catalog. Check your network connection.".to_string()
            }
            RecError::SerializationError(_) => {
                "The book catalog returned a response that could not be understood.".to_string()
            }
            RecError::IoError(_) => "Failed to write the recommendation output.".to_string(),
            RecError::MissingConfigError { field } => {
                format!("A required setting is missing: {}", field)
            }
            RecError::InvalidConfigValueError { field, reason, .. } => {
                format!("The setting '{}' is invalid: {}", field, reason)
            }
            RecError::ProcessingError { message } => {
                format!("Something went wrong while curating books: {}", message)
            }
            RecError::ResultsExhausted { attempts } => format!(
                "No acceptable book recommendations were found after {} tries.",
                attempts
            ),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            RecError::ApiError(_) => "Verify network access and the --api-endpoint value",
            RecError::SerializationError(_) => {
                "Confirm the endpoint points at the volumes search API"
            }
            RecError::IoError(_) => "Check that the output stream is writable",
            RecError::MissingConfigError { .. } | RecError::InvalidConfigValueError { .. } => {
                "Run with --help to see valid configuration values"
            }
            RecError::ProcessingError { .. } => "Re-run with --verbose and inspect the logs",
            RecError::ResultsExhausted { .. } => {
                "Try again later or raise --max-attempts; the catalog may be light on matches right now"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, RecError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_results_exhausted_is_low_severity() {
        let err = RecError::ResultsExhausted { attempts: 5 };
        assert_eq!(err.severity(), ErrorSeverity::Low);
        assert_eq!(err.category(), ErrorCategory::Selection);
        assert!(err.user_friendly_message().contains("5 tries"));
    }

    #[test]
    fn test_config_errors_share_category() {
        let missing = RecError::MissingConfigError {
            field: "api_endpoint".to_string(),
        };
        let invalid = RecError::InvalidConfigValueError {
            field: "max_results".to_string(),
            value: "0".to_string(),
            reason: "must be at least 1".to_string(),
        };
        assert_eq!(missing.category(), ErrorCategory::Configuration);
        assert_eq!(invalid.category(), ErrorCategory::Configuration);
        assert_eq!(invalid.severity(), ErrorSeverity::High);
    }
}
