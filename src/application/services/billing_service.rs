use crate::application::config::Config;
use crate::application::credential::Credential;
use crate::application::interfaces::billing::BillingService;
use crate::application::resource::ResourceClient;
use crate::constants::BILLING_SEGMENT;
use crate::error::AppError;
use crate::model::response::ResponseBody;
use async_trait::async_trait;
use reqwest::{Client, Method};
use serde_json::Value;

/// Client for `/billing/v1`
#[derive(Debug, Clone)]
pub struct BillingServiceImpl {
    resource: ResourceClient,
}

impl BillingServiceImpl {
    /// Creates the billing client
    pub fn new(http: Client, config: &Config, credential: Credential) -> Self {
        Self {
            resource: ResourceClient::new(http, config, BILLING_SEGMENT, credential),
        }
    }

    /// Underlying request plumbing
    #[must_use]
    pub fn resource(&self) -> &ResourceClient {
        &self.resource
    }

    async fn get(&self, path: &str) -> Result<ResponseBody, AppError> {
        self.resource
            .fetch::<Value>(Method::GET, Some(path), None)
            .await
    }
}

#[async_trait]
impl BillingService for BillingServiceImpl {
    async fn fetch_customer(&self, account_id: &str) -> Result<ResponseBody, AppError> {
        self.get(&format!("/accounts/{account_id}")).await
    }

    async fn validate_coupon_code(&self, code: &str) -> Result<ResponseBody, AppError> {
        self.get(&format!("/coupons/{code}")).await
    }

    async fn create_subscription(
        &self,
        account_id: &str,
        params: &Value,
    ) -> Result<ResponseBody, AppError> {
        self.resource
            .fetch(
                Method::POST,
                Some(&format!("/accounts/{account_id}/subscriptions")),
                Some(params),
            )
            .await
    }

    async fn cancel_subscription(
        &self,
        account_id: &str,
        subscription_id: &str,
    ) -> Result<ResponseBody, AppError> {
        self.resource
            .fetch::<Value>(
                Method::DELETE,
                Some(&format!(
                    "/accounts/{account_id}/subscriptions/{subscription_id}"
                )),
                None,
            )
            .await
    }

    async fn fetch_plans(&self) -> Result<ResponseBody, AppError> {
        self.get("/plans").await
    }

    async fn update_default_payment_source(
        &self,
        account_id: &str,
        params: &Value,
    ) -> Result<ResponseBody, AppError> {
        self.resource
            .fetch(
                Method::POST,
                Some(&format!("/accounts/{account_id}/default_payment_source")),
                Some(params),
            )
            .await
    }

    async fn fetch_history(&self, account_id: &str) -> Result<ResponseBody, AppError> {
        self.get(&format!("/accounts/{account_id}/invoices")).await
    }

    async fn update_token(&self, token: &str) {
        self.resource.update_token(token).await;
    }
}
