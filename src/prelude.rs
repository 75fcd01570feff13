/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! # GBDX Client Prelude
//!
//! Imports the types and traits needed for most GBDX API interactions.
//!
//! ## Usage
//!
//! ```rust
//! use gbdx_client::prelude::*;
//!
//! let config = Config::with_root_url("https://geobigdata.io");
//! let filters = SearchFilters::new().with("type", "org");
//! # let _ = (config, filters);
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the GBDX API client
pub use crate::application::config::{ApiConfig, Config, Mode};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type and normalized API failure
pub use crate::error::{ApiFailure, AppError};

// ============================================================================
// CLIENT FACADE AND CREDENTIAL
// ============================================================================

/// Facade bundling the four resource clients
pub use crate::application::client::GbdxClient;

/// Shared bearer credential
pub use crate::application::credential::Credential;

// ============================================================================
// SERVICE TRAITS AND IMPLEMENTATIONS
// ============================================================================

pub use crate::application::services::{
    AccountService, AccountServiceImpl, AuthService, AuthServiceImpl, BillingService,
    BillingServiceImpl, UserService, UserServiceImpl,
};

// ============================================================================
// MODELS
// ============================================================================

/// Token issued by the password grant
pub use crate::model::auth::TokenResponse;

/// Normalized success payload
pub use crate::model::response::ResponseBody;

/// Search filters and pagination parameter names
pub use crate::model::search::{PageSizeParam, SearchFilters};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logger setup
pub use crate::utils::logger::setup_logger;
