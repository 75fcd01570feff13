/// Module containing the account service
pub mod account_service;
/// Module containing the authentication service
pub mod auth_service;
/// Module containing the billing service
pub mod billing_service;
/// Module containing the user service
pub mod user_service;

pub use crate::application::interfaces::account::*;
pub use crate::application::interfaces::auth::*;
pub use crate::application::interfaces::billing::*;
pub use crate::application::interfaces::user::*;
pub use account_service::AccountServiceImpl;
pub use auth_service::AuthServiceImpl;
pub use billing_service::BillingServiceImpl;
pub use user_service::UserServiceImpl;
