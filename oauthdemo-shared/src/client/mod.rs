//! # Backend client
//!
//! The three backend calls the front-ends make, behind the [`Backend`] trait so
//! the view controller can be driven by a test double. [`HttpBackend`] is the
//! reqwest implementation.

mod http;

pub use http::HttpBackend;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::models::UserResponse;

/// Result alias for backend calls.
pub type BackendResult<T> = Result<T, BackendError>;

/// Failure of a single backend call.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BackendError {
    /// The backend answered with a non-2xx status.
    #[error("request failed with status code {0}")]
    Status(u16),

    /// The request never produced a response (DNS, refused connection, CORS).
    #[error("network error: {0}")]
    Transport(String),

    /// The response body was not the expected JSON.
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl BackendError {
    /// The HTTP status code, when the failure carries one.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status(code) => Some(*code),
            Self::Transport(_) | Self::Decode(_) => None,
        }
    }

    /// Status code if present, otherwise the failure description.
    ///
    /// This is the suffix of the `"<operation> failed: ..."` message shown to users.
    #[must_use]
    pub fn detail(&self) -> String {
        match self.status() {
            Some(code) => code.to_string(),
            None => self.to_string(),
        }
    }
}

impl From<reqwest::Error> for BackendError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            Self::Status(status.as_u16())
        } else if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

/// The backend operations the view controller depends on.
///
/// Every implementation attaches the visitor's session cookie to each call.
/// None of them retry, cache, or impose their own timeout.
#[cfg_attr(test, mockall::automock)]
#[async_trait(?Send)]
pub trait Backend {
    /// `GET /api/user`. Anonymous visitors get `authenticated: false`, not an error.
    async fn fetch_session(&self) -> BackendResult<UserResponse>;

    /// `GET /api/hello`.
    async fn fetch_greeting(&self) -> BackendResult<Value>;

    /// `POST /api/hello` with `{"message": message}`.
    async fn submit_greeting(&self, message: &str) -> BackendResult<Value>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_prefers_status_code() {
        assert_eq!(BackendError::Status(500).detail(), "500");
        assert_eq!(BackendError::Status(401).status(), Some(401));
    }

    #[test]
    fn detail_falls_back_to_message() {
        let err = BackendError::Transport("connection refused".into());
        assert_eq!(err.status(), None);
        assert_eq!(err.detail(), "network error: connection refused");

        let err = BackendError::Decode("expected value".into());
        assert_eq!(err.detail(), "invalid response body: expected value");
    }
}
