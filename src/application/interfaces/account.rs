use crate::constants::DEFAULT_SEARCH_LIMIT;
use crate::error::AppError;
use crate::model::response::ResponseBody;
use crate::model::search::SearchFilters;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the accounts resource
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Creates an account
    async fn create(&self, params: &Value) -> Result<ResponseBody, AppError>;

    /// Gets the account `id`
    async fn get(&self, id: &str) -> Result<ResponseBody, AppError>;

    /// Searches accounts, 100 per page
    ///
    /// # Arguments
    /// * `filters` - Fields appended to the query string in insertion order
    /// * `page` - Page number, starting at 1
    async fn search(&self, filters: &SearchFilters, page: u32) -> Result<ResponseBody, AppError> {
        self.search_with_limit(filters, DEFAULT_SEARCH_LIMIT, page)
            .await
    }

    /// Searches accounts with an explicit page size, sent as `limit`
    async fn search_with_limit(
        &self,
        filters: &SearchFilters,
        limit: u32,
        page: u32,
    ) -> Result<ResponseBody, AppError>;

    /// Updates the account `id`
    async fn update(&self, id: &str, params: &Value) -> Result<ResponseBody, AppError>;

    /// Deletes the account `id`
    async fn delete(&self, id: &str) -> Result<ResponseBody, AppError>;

    /// Replaces the bearer token
    async fn update_token(&self, token: &str);
}
