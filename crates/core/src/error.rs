use serde::Serialize;
use thiserror::Error;

/// Errors surfaced to API callers.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> u16 {
        match self {
            Self::NotFound(_) => 404,
            Self::Internal(_) => 500,
        }
    }
}

/// JSON error body: `{ "detail": "…" }`
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub detail: String,
}

impl From<&ApiError> for ErrorEnvelope {
    fn from(e: &ApiError) -> Self {
        Self {
            detail: e.to_string(),
        }
    }
}
