/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Error types for the GBDX client
//!
//! Transport failures are passed through untouched as [`AppError::Network`].
//! Any response with a non-2xx status becomes [`AppError::Api`], whose payload
//! is the normalized `{response, code}` document.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Normalized payload of a non-2xx response
///
/// `response` holds the parsed JSON body when the body was valid JSON, or the
/// HTTP status text as a JSON string otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiFailure {
    /// Parsed error body, or the status text when the body is not JSON
    pub response: Value,
    /// HTTP status code
    pub code: u16,
}

impl fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}: {}", self.code, self.response)
    }
}

/// Main error type returned by every client operation
#[derive(Debug)]
pub enum AppError {
    /// The transport failed before a response was received
    Network(reqwest::Error),
    /// The API answered with a non-2xx status
    Api(ApiFailure),
    /// A request body could not be serialized
    Json(serde_json::Error),
    /// A successful payload did not match the expected model
    Deserialization(String),
}

impl AppError {
    /// Returns the HTTP status code when the error comes from an API response
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            AppError::Api(failure) => Some(failure.code),
            _ => None,
        }
    }

    /// Returns the normalized `{response, code}` payload for API errors
    #[must_use]
    pub fn api_failure(&self) -> Option<&ApiFailure> {
        match self {
            AppError::Api(failure) => Some(failure),
            _ => None,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Api(failure) => write!(f, "api error: {failure}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Deserialization(msg) => write!(f, "deserialization error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Network(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}

impl From<ApiFailure> for AppError {
    fn from(failure: ApiFailure) -> Self {
        AppError::Api(failure)
    }
}
