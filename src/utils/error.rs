use thiserror::Error;

#[derive(Error, Debug)]
pub enum MapError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("HTTP error! Status: {status}")]
    HttpStatus { status: u16 },

    #[error("API response is empty")]
    EmptyResponse,

    #[error("Malformed JSON body: {0}")]
    MalformedJson(#[from] serde_json::Error),

    #[error("Failed to fetch dataset after {attempts} attempt(s): {message}")]
    FetchError { attempts: u32, message: String },

    #[error("Invalid API response format")]
    InvalidResponseFormat,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Upstream,
    Configuration,
    Io,
}

impl MapError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            MapError::ApiError(_) | MapError::FetchError { .. } => ErrorCategory::Network,
            MapError::HttpStatus { .. }
            | MapError::EmptyResponse
            | MapError::MalformedJson(_)
            | MapError::InvalidResponseFormat => ErrorCategory::Upstream,
            MapError::IoError(_) => ErrorCategory::Io,
            MapError::ConfigError { .. }
            | MapError::InvalidConfigValueError { .. }
            | MapError::ConfigValidationError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => {
                "Check network connectivity to the upstream dataset, or raise --max-attempts"
            }
            ErrorCategory::Upstream => {
                "The upstream dataset returned an unexpected payload; retry the request later"
            }
            ErrorCategory::Configuration => "Fix the configuration value and restart",
            ErrorCategory::Io => "Check that the listen address is free and the config file is readable",
        }
    }
}

pub type Result<T> = std::result::Result<T, MapError>;
