/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

/// Default API root used when `GBDX_API_URL` is not set
pub const DEFAULT_API_ROOT: &str = "https://geobigdata.io";
/// Path segment of the OAuth authentication resource
pub const AUTH_SEGMENT: &str = "/auth/v1/oauth";
/// Path segment of the users resource
pub const USERS_SEGMENT: &str = "/users/v1/users";
/// Path segment of the accounts resource
pub const ACCOUNTS_SEGMENT: &str = "/accounts/v1/accounts";
/// Path segment of the billing resource
pub const BILLING_SEGMENT: &str = "/billing/v1";
/// Page size sent by the `search` operations
pub const DEFAULT_SEARCH_LIMIT: u32 = 100;
/// Grant type used when exchanging a password for a token
pub const PASSWORD_GRANT_TYPE: &str = "password";
/// User agent string sent with every request
pub const USER_AGENT: &str = concat!("gbdx-client/", env!("CARGO_PKG_VERSION"));
