use crate::constants::DEFAULT_SEARCH_LIMIT;
use crate::error::AppError;
use crate::model::response::ResponseBody;
use crate::model::search::SearchFilters;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the users resource
#[async_trait]
pub trait UserService: Send + Sync {
    /// Creates a user
    async fn create(&self, params: &Value) -> Result<ResponseBody, AppError>;

    /// Gets the user owning the current token
    async fn me(&self) -> Result<ResponseBody, AppError>;

    /// Searches users, 100 per page
    ///
    /// # Arguments
    /// * `filters` - Fields appended to the query string in insertion order
    /// * `page` - Page number, starting at 1
    async fn search(&self, filters: &SearchFilters, page: u32) -> Result<ResponseBody, AppError> {
        self.search_with_limit(filters, DEFAULT_SEARCH_LIMIT, page)
            .await
    }

    /// Searches users with an explicit page size, sent as `per_page`
    async fn search_with_limit(
        &self,
        filters: &SearchFilters,
        limit: u32,
        page: u32,
    ) -> Result<ResponseBody, AppError>;

    /// Updates the user `id`
    async fn update(&self, id: &str, params: &Value) -> Result<ResponseBody, AppError>;

    /// Deletes the user `id`
    async fn delete(&self, id: &str) -> Result<ResponseBody, AppError>;

    /// Sends the welcome email to user `id` again
    async fn resend_invite(&self, id: &str) -> Result<ResponseBody, AppError>;

    /// Replaces the bearer token
    async fn update_token(&self, token: &str);
}
