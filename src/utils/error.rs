use thiserror::Error;

#[derive(Error, Debug)]
pub enum CountError {
    #[error("API request failed with status {status}: {body}")]
    HttpStatusError { status: u16, body: String },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration value: {field}")]
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
    Network,
    Storage,
    Data,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl CountError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CountError::HttpStatusError { .. } | CountError::ApiError(_) => ErrorCategory::Network,
            CountError::CsvError(_) | CountError::IoError(_) => ErrorCategory::Storage,
            CountError::SerializationError(_) => ErrorCategory::Data,
            CountError::ConfigError { .. }
            | CountError::MissingConfigError { .. }
            | CountError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 429 / 5xx 通常稍後重跑即可
            CountError::HttpStatusError { status, .. } if *status == 429 || *status >= 500 => {
                ErrorSeverity::Medium
            }
            CountError::ApiError(_) => ErrorSeverity::Medium,
            CountError::HttpStatusError { .. } | CountError::SerializationError(_) => {
                ErrorSeverity::High
            }
            CountError::ConfigError { .. }
            | CountError::MissingConfigError { .. }
            | CountError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            CountError::CsvError(_) | CountError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CountError::HttpStatusError { status, .. } => {
                format!("The search API rejected the request (HTTP {})", status)
            }
            CountError::ApiError(_) => "Could not reach the search API".to_string(),
            CountError::CsvError(_) | CountError::IoError(_) => {
                "Could not write to the output file".to_string()
            }
            CountError::SerializationError(_) => {
                "The search API returned an unexpected response".to_string()
            }
            CountError::ConfigError { message } => format!("Invalid configuration: {}", message),
            CountError::MissingConfigError { field } => {
                format!("Missing required setting: {}", field)
            }
            CountError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting {}: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CountError::HttpStatusError { status: 401, .. }
            | CountError::HttpStatusError { status: 403, .. } => {
                "Check that the API key is valid and has access to the search endpoint"
            }
            CountError::HttpStatusError { status: 429, .. } => {
                "Rate limit hit; increase the request delay and rerun"
            }
            CountError::HttpStatusError { .. } | CountError::ApiError(_) => {
                "Check the endpoint URL and network connectivity, then rerun"
            }
            CountError::CsvError(_) | CountError::IoError(_) => {
                "Check that the output path is writable"
            }
            CountError::SerializationError(_) => {
                "Verify the endpoint returns article search JSON with response.meta.hits"
            }
            CountError::ConfigError { .. }
            | CountError::MissingConfigError { .. }
            | CountError::InvalidConfigValueError { .. } => {
                "Fix the configuration value and try again"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CountError>;
