//! Request/response shapes for the remote authentication API.
//!
//! The backend is an external collaborator; only the fields the flows read
//! or write are modeled here.

#[cfg(test)]
#[path = "wire_test.rs"]
mod wire_test;

use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
pub const LOGIN_PATH: &str = "/api/login";
pub const SIGNUP_PATH: &str = "/api/signup";

/// Join a base URL and an API path without doubling slashes.
#[must_use]
pub fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}{path}", base_url.trim_end_matches('/'))
}

/// JSON body of `POST /api/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful `POST /api/login` body. Extra fields are ignored.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Why a submission failed. Runtimes log the detail; flows collapse every
/// variant into one user-facing message.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// The request never produced an HTTP response.
    #[error("request failed: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("server responded with status {0}")]
    Status(u16),
    /// A 2xx response body could not be decoded.
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl SubmitError {
    /// Classify an HTTP status, returning `Ok(())` for 2xx.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::Status`] for any status outside `200..=299`.
    pub fn check_status(status: u16) -> Result<(), Self> {
        if (200..300).contains(&status) {
            Ok(())
        } else {
            Err(Self::Status(status))
        }
    }
}

/// Decode a successful login body.
///
/// # Errors
///
/// Returns [`SubmitError::Decode`] when the body is not JSON or lacks a
/// string `token`.
pub fn parse_login_response(body: &str) -> Result<LoginResponse, SubmitError> {
    serde_json::from_str(body).map_err(|e| SubmitError::Decode(e.to_string()))
}
