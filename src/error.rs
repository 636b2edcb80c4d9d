// src/error.rs
//! Application error types with structured error handling.
//!
//! Each variant tells what went wrong and where. Nothing in the sourcing
//! flow recovers locally: every error surfaces at the entry point.

use crate::algebras::HostError;
use std::fmt;
use thiserror::Error;

/// hacoCMS API failure classes, derived from the HTTP status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HacoCmsErrorCode {
    /// Request parameters were rejected (e.g. `limit` above 100)
    BadRequest,
    /// Access token is missing, invalid or expired
    Unauthorized,
    /// Token lacks permission for this endpoint (e.g. draft content)
    Forbidden,
    /// The endpoint or record does not exist
    NotFound,
    /// API rate limit exceeded
    RateLimited,
    /// hacoCMS internal failure or temporary unavailability
    ServerError(u16),
    /// Any other non-success status
    HttpStatus(u16),
}

impl HacoCmsErrorCode {
    /// Classify a non-success HTTP status code.
    pub fn from_http_status(status: u16) -> Self {
        match status {
            400 => Self::BadRequest,
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            429 => Self::RateLimited,
            500..=599 => Self::ServerError(status),
            other => Self::HttpStatus(other),
        }
    }

    /// Whether this error means the resource simply doesn't exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

impl fmt::Display for HacoCmsErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadRequest => write!(f, "bad_request"),
            Self::Unauthorized => write!(f, "unauthorized"),
            Self::Forbidden => write!(f, "forbidden"),
            Self::NotFound => write!(f, "not_found"),
            Self::RateLimited => write!(f, "rate_limited"),
            Self::ServerError(code) => write!(f, "server_error_{}", code),
            Self::HttpStatus(code) => write!(f, "http_{}", code),
        }
    }
}

/// Main application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing configuration: {0}")]
    MissingConfiguration(String),

    #[error("Network failure: {0}")]
    NetworkFailure(#[from] reqwest::Error),

    #[error("hacoCMS API returned an error ({code}): {message}")]
    HacoCmsService {
        code: HacoCmsErrorCode,
        message: String,
        status: reqwest::StatusCode,
    },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Host rejected operation: {0}")]
    Host(#[from] HostError),

    #[error("Filesystem IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    ValidationError(#[from] crate::types::ValidationError),
}

impl AppError {
    /// The API failure class, if this error came from a hacoCMS response.
    pub fn service_code(&self) -> Option<&HacoCmsErrorCode> {
        match self {
            Self::HacoCmsService { code, .. } => Some(code),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::MalformedResponse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_http_statuses() {
        assert_eq!(
            HacoCmsErrorCode::from_http_status(401),
            HacoCmsErrorCode::Unauthorized
        );
        assert_eq!(
            HacoCmsErrorCode::from_http_status(404),
            HacoCmsErrorCode::NotFound
        );
        assert_eq!(
            HacoCmsErrorCode::from_http_status(503),
            HacoCmsErrorCode::ServerError(503)
        );
        assert_eq!(
            HacoCmsErrorCode::from_http_status(418),
            HacoCmsErrorCode::HttpStatus(418)
        );
    }

    #[test]
    fn not_found_classification() {
        assert!(HacoCmsErrorCode::NotFound.is_not_found());
        assert!(!HacoCmsErrorCode::Forbidden.is_not_found());
    }

    #[test]
    fn serde_errors_become_malformed_response() {
        let err: AppError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, AppError::MalformedResponse(_)));
    }

    #[test]
    fn host_errors_keep_their_message() {
        let err: AppError = HostError::DigestFailed {
            reason: "boom".to_string(),
        }
        .into();
        assert!(err.to_string().contains("boom"));
        assert!(err.service_code().is_none());
    }
}
