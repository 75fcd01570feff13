/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Client facade for the GBDX REST API
//!
//! [`GbdxClient`] bundles the four resource clients built from one token:
//! - `auth`: OAuth password grant
//! - `users`, `accounts`, `billing`: share a single [`Credential`], so
//!   [`GbdxClient::update_token`] rotates the token for all three at once
//!
//! # Example
//! ```ignore
//! use gbdx_client::prelude::*;
//!
//! let client = GbdxClient::new("my-token")?;
//! let plans = client.billing.fetch_plans().await?;
//! ```

use crate::application::config::Config;
use crate::application::credential::Credential;
use crate::application::interfaces::auth::AuthService;
use crate::application::services::{
    AccountServiceImpl, AuthServiceImpl, BillingServiceImpl, UserServiceImpl,
};
use crate::constants::USER_AGENT;
use crate::error::AppError;
use crate::model::auth::TokenResponse;
use reqwest::Client as HttpClient;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Set of resource clients sharing one configuration and connection pool
#[derive(Debug, Clone)]
pub struct GbdxClient {
    /// Authentication resource
    pub auth: AuthServiceImpl,
    /// Users resource
    pub users: UserServiceImpl,
    /// Accounts resource
    pub accounts: AccountServiceImpl,
    /// Billing resource
    pub billing: BillingServiceImpl,
    credential: Credential,
    config: Arc<Config>,
}

impl GbdxClient {
    /// Creates the client set from the environment configuration
    ///
    /// # Errors
    /// Returns [`AppError::Network`] if the HTTP client cannot be built.
    pub fn new(token: &str) -> Result<Self, AppError> {
        Self::with_config(Config::new(), token)
    }

    /// Creates the client set from an explicit configuration
    ///
    /// # Errors
    /// Returns [`AppError::Network`] if the HTTP client cannot be built.
    pub fn with_config(config: Config, token: &str) -> Result<Self, AppError> {
        let mut builder = HttpClient::builder().user_agent(USER_AGENT);
        if config.api.timeout > 0 {
            builder = builder.timeout(Duration::from_secs(config.api.timeout));
        }
        let http = builder.build()?;

        let credential = Credential::new(token);

        Ok(Self {
            auth: AuthServiceImpl::new(http.clone(), &config, token),
            users: UserServiceImpl::new(http.clone(), &config, credential.clone()),
            accounts: AccountServiceImpl::new(http.clone(), &config, credential.clone()),
            billing: BillingServiceImpl::new(http, &config, credential.clone()),
            credential,
            config: Arc::new(config),
        })
    }

    /// Replaces the token used by users, accounts and billing
    ///
    /// Requests already built keep the token they were built with.
    pub async fn update_token(&self, token: &str) {
        self.credential.replace(token).await;
        info!("Bearer token updated");
    }

    /// Returns the token currently used by users, accounts and billing
    pub async fn token(&self) -> String {
        self.credential.token().await
    }

    /// Exchanges a username and password for a token and installs it
    ///
    /// # Errors
    /// - [`AppError::Api`] if the platform rejects the credentials
    /// - [`AppError::Deserialization`] if the reply is not a token document
    pub async fn login(&self, username: &str, password: &str) -> Result<TokenResponse, AppError> {
        let body = self.auth.validate_password(username, password).await?;
        let token: TokenResponse = body.decode()?;

        self.update_token(&token.access_token).await;
        info!("Password grant accepted, bearer token installed");
        Ok(token)
    }

    /// Gets the configuration the clients were built from
    #[must_use]
    pub fn config(&self) -> Arc<Config> {
        self.config.clone()
    }
}
