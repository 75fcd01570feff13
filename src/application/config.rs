/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::constants::DEFAULT_API_ROOT;
use crate::utils::config::get_env_or_default;
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Execution mode of the client
///
/// Traffic logging is only ever emitted in [`Mode::Development`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Local development, traffic logging may be enabled
    Development,
    /// Any other execution context, traffic logging is disabled
    #[default]
    Production,
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Mode::Development),
            "production" | "prod" => Ok(Mode::Production),
            other => Err(format!("unknown mode: {other}")),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Development => write!(f, "development"),
            Mode::Production => write!(f, "production"),
        }
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct ApiConfig {
    /// API root shared by every resource, e.g. `https://geobigdata.io`
    pub root_url: String,
    /// Timeout in seconds for REST requests, 0 leaves the transport default
    pub timeout: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the GBDX client
pub struct Config {
    /// REST API configuration
    pub api: ApiConfig,
    /// Execution mode
    pub mode: Mode,
    /// Whether requests and responses are logged when running in development mode
    pub log_traffic: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration from the environment
    ///
    /// A `.env` file is loaded first when present. See the crate documentation
    /// for the list of variables.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        Config {
            api: ApiConfig {
                root_url: get_env_or_default("GBDX_API_URL", String::from(DEFAULT_API_ROOT)),
                timeout: get_env_or_default("GBDX_API_TIMEOUT", 0),
            },
            mode: get_env_or_default("GBDX_ENV", Mode::Production),
            log_traffic: get_env_or_default("GBDX_LOG_TRAFFIC", false),
        }
    }

    /// Creates a production configuration pointing at `root_url`
    ///
    /// Nothing is read from the environment.
    pub fn with_root_url(root_url: impl Into<String>) -> Self {
        Config {
            api: ApiConfig {
                root_url: root_url.into(),
                timeout: 0,
            },
            mode: Mode::Production,
            log_traffic: false,
        }
    }

    /// Sets the execution mode
    #[must_use]
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Enables or disables traffic logging
    #[must_use]
    pub fn log_traffic(mut self, enabled: bool) -> Self {
        self.log_traffic = enabled;
        self
    }

    /// Sets the request timeout in seconds
    #[must_use]
    pub fn timeout(mut self, seconds: u64) -> Self {
        self.api.timeout = seconds;
        self
    }

    /// Whether request/response traffic should be logged
    #[must_use]
    pub fn should_log_traffic(&self) -> bool {
        self.mode == Mode::Development && self.log_traffic
    }

    /// Base URL of a resource: the API root followed by `segment`
    #[must_use]
    pub fn resource_url(&self, segment: &str) -> String {
        format!("{}{}", self.api.root_url.trim_end_matches('/'), segment)
    }
}
