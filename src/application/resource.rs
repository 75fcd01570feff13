/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::application::config::Config;
use crate::application::credential::Credential;
use crate::error::AppError;
use crate::model::http::{ApiRequest, build_request, fetch_parse};
use crate::model::response::ResponseBody;
use reqwest::{Client, Method};
use serde::Serialize;

/// Request plumbing shared by every resource service
///
/// Holds the base URL of one resource family, the bearer credential and the
/// HTTP connection pool. Services compose it and only describe their paths.
#[derive(Debug, Clone)]
pub struct ResourceClient {
    http: Client,
    base_url: String,
    credential: Credential,
    log_traffic: bool,
}

impl ResourceClient {
    /// Creates a client for the resource mounted at `segment` under the configured API root
    pub fn new(http: Client, config: &Config, segment: &str, credential: Credential) -> Self {
        Self {
            http,
            base_url: config.resource_url(segment),
            credential,
            log_traffic: config.should_log_traffic(),
        }
    }

    /// Base URL of the resource
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Credential used for the `Authorization` header
    #[must_use]
    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    /// Replaces the bearer token; every client sharing the credential sees it
    pub async fn update_token(&self, token: &str) {
        self.credential.replace(token).await;
    }

    /// Builds the request for `method` on `path`, reading the token once
    ///
    /// # Errors
    /// Returns [`AppError::Json`] if `body` cannot be serialized.
    pub async fn prepare<B: Serialize + ?Sized + Sync>(
        &self,
        method: Method,
        path: Option<&str>,
        body: Option<&B>,
    ) -> Result<ApiRequest, AppError> {
        let token = self.credential.token().await;
        build_request(method, &self.base_url, path, &token, body)
    }

    /// Sends an authenticated request and normalizes the response
    ///
    /// # Errors
    /// See [`fetch_parse`].
    pub async fn fetch<B: Serialize + ?Sized + Sync>(
        &self,
        method: Method,
        path: Option<&str>,
        body: Option<&B>,
    ) -> Result<ResponseBody, AppError> {
        let request = self.prepare(method, path, body).await?;
        self.send(request).await
    }

    /// Sends a prepared request and normalizes the response
    ///
    /// # Errors
    /// See [`fetch_parse`].
    pub async fn send(&self, request: ApiRequest) -> Result<ResponseBody, AppError> {
        fetch_parse(&self.http, request, self.log_traffic).await
    }
}
