use crate::application::config::Config;
use crate::application::credential::Credential;
use crate::application::interfaces::user::UserService;
use crate::application::resource::ResourceClient;
use crate::constants::USERS_SEGMENT;
use crate::error::AppError;
use crate::model::response::ResponseBody;
use crate::model::search::{PageSizeParam, SearchFilters, build_search_string};
use async_trait::async_trait;
use reqwest::{Client, Method};
use serde_json::Value;

/// Client for `/users/v1/users`
#[derive(Debug, Clone)]
pub struct UserServiceImpl {
    resource: ResourceClient,
}

impl UserServiceImpl {
    /// Creates the users client
    pub fn new(http: Client, config: &Config, credential: Credential) -> Self {
        Self {
            resource: ResourceClient::new(http, config, USERS_SEGMENT, credential),
        }
    }

    /// Underlying request plumbing
    #[must_use]
    pub fn resource(&self) -> &ResourceClient {
        &self.resource
    }
}

#[async_trait]
impl UserService for UserServiceImpl {
    async fn create(&self, params: &Value) -> Result<ResponseBody, AppError> {
        self.resource.fetch(Method::POST, None, Some(params)).await
    }

    async fn me(&self) -> Result<ResponseBody, AppError> {
        self.resource
            .fetch::<Value>(Method::GET, Some("/me"), None)
            .await
    }

    async fn search_with_limit(
        &self,
        filters: &SearchFilters,
        limit: u32,
        page: u32,
    ) -> Result<ResponseBody, AppError> {
        let query = build_search_string(PageSizeParam::PerPage, filters, limit, page);
        self.resource
            .fetch::<Value>(Method::GET, Some(&query), None)
            .await
    }

    async fn update(&self, id: &str, params: &Value) -> Result<ResponseBody, AppError> {
        self.resource
            .fetch(Method::PATCH, Some(&format!("/{id}")), Some(params))
            .await
    }

    async fn delete(&self, id: &str) -> Result<ResponseBody, AppError> {
        self.resource
            .fetch::<Value>(Method::DELETE, Some(&format!("/{id}")), None)
            .await
    }

    async fn resend_invite(&self, id: &str) -> Result<ResponseBody, AppError> {
        self.resource
            .fetch::<Value>(Method::GET, Some(&format!("/{id}/emails/welcome")), None)
            .await
    }

    async fn update_token(&self, token: &str) {
        self.resource.update_token(token).await;
    }
}
