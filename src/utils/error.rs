use thiserror::Error;

#[derive(Error, Debug)]
pub enum NewsError {
    #[error("Invalid URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected HTTP status {code}")]
    HttpStatus { code: u16 },

    #[error("Malformed search response: {message}")]
    MalformedJson { message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV output error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing configuration: {field}")]
    MissingConfig { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Config,
    Network,
    Parse,
    Io,
}

impl NewsError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            NewsError::InvalidUrl { .. }
            | NewsError::InvalidConfigValue { .. }
            | NewsError::MissingConfig { .. } => ErrorCategory::Config,
            NewsError::Transport(_) | NewsError::HttpStatus { .. } => ErrorCategory::Network,
            NewsError::MalformedJson { .. } | NewsError::Serialization(_) => ErrorCategory::Parse,
            NewsError::Csv(_) | NewsError::Io(_) => ErrorCategory::Io,
        }
    }

    /// Message shown to the user on stderr, as opposed to the log line.
    pub fn user_friendly_message(&self) -> String {
        match self {
            NewsError::InvalidUrl { url, .. } => {
                format!("The search endpoint '{}' is not a valid URL", url)
            }
            NewsError::Transport(_) => {
                "Could not reach the news service. Check your network connection.".to_string()
            }
            NewsError::HttpStatus { code } => {
                format!("The news service answered with HTTP {}", code)
            }
            NewsError::MalformedJson { .. } => {
                "The news service sent a response this version cannot read".to_string()
            }
            NewsError::MissingConfig { field } => {
                format!("Required setting '{}' was not provided", field)
            }
            NewsError::InvalidConfigValue { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, NewsError>;
