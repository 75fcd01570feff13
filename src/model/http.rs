/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::error::AppError;
use crate::model::response::{RawResponse, ResponseBody, normalize_response};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde::Serialize;
use tracing::debug;

/// Body of an outgoing request
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// JSON document, already serialized
    Json(String),
    /// `application/x-www-form-urlencoded` fields
    Form(Vec<(String, String)>),
}

/// An HTTP request described as plain data
///
/// Built by [`build_request`] or [`build_form_request`] and executed by
/// [`fetch_parse`].
#[derive(Debug, Clone)]
pub struct ApiRequest {
    /// HTTP method
    pub method: Method,
    /// Full target URL
    pub url: String,
    /// Headers, in the order they are sent
    pub headers: Vec<(String, String)>,
    /// Optional body
    pub body: Option<RequestBody>,
}

impl ApiRequest {
    /// Returns the value of header `name`, compared case-insensitively
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Builds an authenticated request against `base_url`
///
/// The target URL is `base_url` followed by `path` verbatim. The
/// `Authorization: Bearer <token>` header is always set; when `body` is given
/// it is serialized to JSON and `Content-Type: application/json` is added.
/// A body that serializes to `null` is treated as absent.
///
/// # Errors
/// Returns [`AppError::Json`] if `body` cannot be serialized.
pub fn build_request<B: Serialize + ?Sized>(
    method: Method,
    base_url: &str,
    path: Option<&str>,
    token: &str,
    body: Option<&B>,
) -> Result<ApiRequest, AppError> {
    let mut headers = vec![(AUTHORIZATION.to_string(), format!("Bearer {token}"))];

    let json = body.map(serde_json::to_string).transpose()?;
    let body = match json {
        Some(json) if json != "null" => {
            headers.push((CONTENT_TYPE.to_string(), "application/json".to_string()));
            Some(RequestBody::Json(json))
        }
        _ => None,
    };

    Ok(ApiRequest {
        method,
        url: format!("{base_url}{}", path.unwrap_or_default()),
        headers,
        body,
    })
}

/// Builds an unauthenticated form-encoded POST to `url`
#[must_use]
pub fn build_form_request(url: String, fields: Vec<(String, String)>) -> ApiRequest {
    ApiRequest {
        method: Method::POST,
        url,
        headers: Vec::new(),
        body: Some(RequestBody::Form(fields)),
    }
}

/// Sends `request` and normalizes the response
///
/// Transport failures are returned as [`AppError::Network`] without
/// inspection; every response, whatever its status, goes through
/// [`normalize_response`]. Nothing is retried.
///
/// # Errors
/// [`AppError::Network`] when the request could not be sent, and
/// [`AppError::Api`] for non-2xx responses.
pub async fn fetch_parse(
    client: &Client,
    request: ApiRequest,
    log_traffic: bool,
) -> Result<ResponseBody, AppError> {
    if log_traffic {
        match &request.body {
            Some(RequestBody::Json(json)) => {
                debug!("Fetch request: {} {} {}", request.method, request.url, json);
            }
            _ => debug!("Fetch request: {} {}", request.method, request.url),
        }
    }

    let mut builder = client.request(request.method, &request.url);

    for (name, value) in &request.headers {
        builder = builder.header(name.as_str(), value.as_str());
    }

    builder = match request.body {
        Some(RequestBody::Json(json)) => builder.body(json),
        Some(RequestBody::Form(fields)) => builder.form(&fields),
        None => builder,
    };

    let response = builder.send().await?;
    let raw = RawResponse::read(response).await;

    normalize_response(raw, log_traffic)
}
