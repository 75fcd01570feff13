/// Account service interface
pub mod account;
/// Authentication service interface
pub mod auth;
/// Billing service interface
pub mod billing;
/// User service interface
pub mod user;
