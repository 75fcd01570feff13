/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! # GBDX Client
//!
//! Async client for the GBDX platform REST API. It covers the four resource
//! families exposed by the platform:
//!
//! - **Authentication**: exchange a username and password for an OAuth token
//! - **Users**: create, search, update and delete users, resend invitations
//! - **Accounts**: create, fetch, search, update and delete accounts
//! - **Billing**: customers, coupons, subscriptions, plans and invoices
//!
//! Every call goes through a single fetch-and-normalize routine: successful
//! responses come back as a [`model::response::ResponseBody`], and any non-2xx
//! status is turned into an [`error::AppError::Api`] carrying the normalized
//! `{response, code}` payload.
//!
//! ## Example
//!
//! ```ignore
//! use gbdx_client::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let client = GbdxClient::new("my-token")?;
//!     let me = client.users.me().await?;
//!     println!("{me}");
//!
//!     // Rotate the credential used by users, accounts and billing at once
//!     client.update_token("new-token").await;
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration
//!
//! [`application::config::Config::new`] reads the following environment
//! variables (a `.env` file is loaded first when present):
//!
//! | Variable            | Default                 | Meaning                               |
//! |---------------------|-------------------------|---------------------------------------|
//! | `GBDX_API_URL`      | `https://geobigdata.io` | API root shared by all resources      |
//! | `GBDX_API_TIMEOUT`  | `0`                     | Request timeout in seconds, 0 = none  |
//! | `GBDX_ENV`          | `production`            | `development` or `production`         |
//! | `GBDX_LOG_TRAFFIC`  | `false`                 | Log requests and responses in dev mode|
//!
//! Query strings built by the `search` operations are sent exactly as given:
//! filter values are not URL-encoded.

/// Application layer: configuration, credential, facade and resource services
pub mod application;

/// Library constants: default API root, resource segments and paging defaults
pub mod constants;

/// Error types returned by every operation
pub mod error;

/// Request, response and search models
pub mod model;

/// Convenience re-exports
pub mod prelude;

/// Environment and logging helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
