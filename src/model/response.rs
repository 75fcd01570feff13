/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Response normalization
//!
//! Every call made by the resource clients ends in [`normalize_response`]:
//!
//! - `204` resolves with the text body, JSON parsing is never attempted
//! - other 2xx with a JSON content type resolve with the parsed JSON
//! - other 2xx resolve with the raw text
//! - a body that cannot be read or parsed on success resolves with
//!   [`ResponseBody::Unreadable`] instead of failing
//! - any non-2xx status fails with [`AppError::Api`], carrying the parsed JSON
//!   body, or the status text when the body is not JSON, plus the status code

use crate::error::{ApiFailure, AppError};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use tracing::{debug, error};

/// Payload of a successful response
///
/// Serializes as the bare payload: the JSON document, the text as a JSON
/// string, or `null` for [`ResponseBody::Unreadable`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResponseBody {
    /// Parsed JSON document
    Json(Value),
    /// Raw text body, possibly empty
    Text(String),
    /// The body could not be read or parsed
    Unreadable,
}

impl ResponseBody {
    /// Returns the JSON document, if any
    #[must_use]
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            ResponseBody::Json(v) => Some(v),
            _ => None,
        }
    }

    /// Consumes the body and returns the JSON document, if any
    #[must_use]
    pub fn into_json(self) -> Option<Value> {
        match self {
            ResponseBody::Json(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the text body, if any
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ResponseBody::Text(t) => Some(t),
            _ => None,
        }
    }

    /// Whether the body was swallowed because it could not be parsed
    #[must_use]
    pub fn is_unreadable(&self) -> bool {
        matches!(self, ResponseBody::Unreadable)
    }

    /// Decodes a JSON body into `T`
    ///
    /// # Errors
    /// Returns [`AppError::Deserialization`] when the body is not JSON or does
    /// not match `T`.
    pub fn decode<T: DeserializeOwned>(self) -> Result<T, AppError> {
        match self {
            ResponseBody::Json(v) => {
                serde_json::from_value(v).map_err(|e| AppError::Deserialization(e.to_string()))
            }
            ResponseBody::Text(t) => Err(AppError::Deserialization(format!(
                "expected a JSON body, got text: {t}"
            ))),
            ResponseBody::Unreadable => Err(AppError::Deserialization(
                "response body could not be read".to_string(),
            )),
        }
    }
}

impl fmt::Display for ResponseBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseBody::Json(v) => write!(f, "{v}"),
            ResponseBody::Text(t) => write!(f, "{t}"),
            ResponseBody::Unreadable => write!(f, "<unreadable>"),
        }
    }
}

/// Response captured from the transport, before normalization
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// Final URL of the response
    pub url: String,
    /// HTTP status
    pub status: StatusCode,
    /// `Content-Type` header, if present and valid UTF-8
    pub content_type: Option<String>,
    /// Body text, `None` when reading the body failed
    pub body: Option<String>,
}

impl RawResponse {
    /// Drains a `reqwest` response into a `RawResponse`
    pub async fn read(response: Response) -> Self {
        let url = response.url().to_string();
        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.text().await.ok();

        Self {
            url,
            status,
            content_type,
            body,
        }
    }

    /// Reason phrase of the status, empty when the status has none
    #[must_use]
    pub fn status_text(&self) -> &str {
        self.status.canonical_reason().unwrap_or_default()
    }

    fn is_json(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|ct| ct.contains("application/json"))
    }
}

/// Normalizes a raw response into a success payload or an [`AppError::Api`]
///
/// `log_traffic` turns on `debug!`/`error!` output of the result; when it is
/// false nothing is logged.
///
/// # Errors
/// Returns [`AppError::Api`] for every non-2xx status.
pub fn normalize_response(raw: RawResponse, log_traffic: bool) -> Result<ResponseBody, AppError> {
    if raw.status.is_success() {
        let body = success_body(&raw);
        if log_traffic {
            if body.is_unreadable() {
                error!("Fetch error: {} could not parse response body", raw.url);
            } else {
                debug!("Fetch response: {} {}", raw.url, body);
            }
        }
        return Ok(body);
    }

    let failure = ApiFailure {
        response: raw
            .body
            .as_deref()
            .and_then(|b| serde_json::from_str::<Value>(b).ok())
            .unwrap_or_else(|| Value::String(raw.status_text().to_string())),
        code: raw.status.as_u16(),
    };
    if log_traffic {
        error!("Fetch error: {} {}", raw.url, failure);
    }
    Err(AppError::Api(failure))
}

fn success_body(raw: &RawResponse) -> ResponseBody {
    let Some(text) = raw.body.as_ref() else {
        return ResponseBody::Unreadable;
    };

    if raw.status == StatusCode::NO_CONTENT || !raw.is_json() {
        return ResponseBody::Text(text.clone());
    }

    match serde_json::from_str::<Value>(text) {
        Ok(v) => ResponseBody::Json(v),
        Err(_) => ResponseBody::Unreadable,
    }
}
