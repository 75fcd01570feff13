use crate::error::AppError;
use crate::model::response::ResponseBody;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the billing resource
///
/// Every `account_id` is a platform account id, not a billing customer id.
#[async_trait]
pub trait BillingService: Send + Sync {
    /// Gets the billing customer attached to an account
    async fn fetch_customer(&self, account_id: &str) -> Result<ResponseBody, AppError>;

    /// Checks whether a coupon code exists and is redeemable
    async fn validate_coupon_code(&self, code: &str) -> Result<ResponseBody, AppError>;

    /// Subscribes an account to a plan
    async fn create_subscription(
        &self,
        account_id: &str,
        params: &Value,
    ) -> Result<ResponseBody, AppError>;

    /// Cancels one subscription of an account
    async fn cancel_subscription(
        &self,
        account_id: &str,
        subscription_id: &str,
    ) -> Result<ResponseBody, AppError>;

    /// Lists the available plans
    async fn fetch_plans(&self) -> Result<ResponseBody, AppError>;

    /// Replaces the default payment source of an account
    async fn update_default_payment_source(
        &self,
        account_id: &str,
        params: &Value,
    ) -> Result<ResponseBody, AppError>;

    /// Lists the invoices of an account
    async fn fetch_history(&self, account_id: &str) -> Result<ResponseBody, AppError>;

    /// Replaces the bearer token
    async fn update_token(&self, token: &str);
}
