use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("feed {location} unreachable: {reason}")]
    Unreachable { location: String, reason: String },
    #[error("feed {location} returned HTTP {status}")]
    Status { location: String, status: u16 },
    #[error("malformed feed: {0}")]
    Malformed(String),
}

impl LoadError {
    pub fn unreachable(location: impl Into<String>, reason: impl ToString) -> Self {
        Self::Unreachable {
            location: location.into(),
            reason: reason.to_string(),
        }
    }

    pub fn malformed(reason: impl ToString) -> Self {
        Self::Malformed(reason.to_string())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Unreachable { .. } => ErrorCode::Unreachable,
            Self::Status { .. } => ErrorCode::Status,
            Self::Malformed(_) => ErrorCode::Malformed,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    Unreachable,
    Status,
    Malformed,
}

/// Serializable form of a load failure, emitted in place of page content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    pub code: ErrorCode,
    pub message: String,
}

impl From<&LoadError> for ErrorReport {
    fn from(value: &LoadError) -> Self {
        Self {
            code: value.code(),
            message: value.to_string(),
        }
    }
}
