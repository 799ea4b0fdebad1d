use crate::constants::NO_ROWS_CODE;
use thiserror::Error;

/// Failures reported by any backend implementation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BackendError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTTP {status}: {message}")]
    Status {
        status: u16,
        code: Option<String>,
        message: String,
    },
    #[error("JSON parsing error: {0}")]
    Decode(String),
    #[error("Storage error: {0}")]
    Storage(String),
}

impl BackendError {
    /// True when a single-row read matched nothing.
    #[must_use]
    pub fn is_no_rows(&self) -> bool {
        matches!(self, Self::Status { code: Some(code), .. } if code == NO_ROWS_CODE)
    }

    /// The detail text without the variant prefix, for showing to users.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Network(message) | Self::Decode(message) | Self::Storage(message) => message,
            Self::Status { message, .. } => message,
        }
    }

    #[must_use]
    pub fn no_rows() -> Self {
        Self::Status {
            status: 406,
            code: Some(NO_ROWS_CODE.to_string()),
            message: "JSON object requested, multiple (or no) rows returned".to_string(),
        }
    }
}

impl From<serde_json::Error> for BackendError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
