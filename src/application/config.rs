use crate::application::request_log::{LogPolicy, RequestLog};
use crate::constants::{DEFAULT_BASE_URL, DEFAULT_LOG_FILE};
use crate::utils::config::get_env_or_default;
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Account credentials for the PetFriends API
pub struct Credentials {
    /// Account email
    pub email: String,
    /// Account password, never serialised
    #[serde(skip_serializing, default)]
    pub password: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the PetFriends API client
pub struct Config {
    /// Account credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Request log configuration
    pub request_log: RequestLogConfig,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL every endpoint path is appended to
    pub base_url: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Where and what the request log writes
pub struct RequestLogConfig {
    /// Path of the append-only log file
    pub path: String,
    /// Which outcomes are recorded
    pub policy: LogPolicy,
}

impl RequestLogConfig {
    /// Builds the log handle described by this configuration
    pub fn build(&self) -> RequestLog {
        RequestLog::new(&self.path, self.policy)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration from the environment, loading `.env` first
    ///
    /// | Variable | Default |
    /// |---|---|
    /// | `PETFRIENDS_EMAIL` | `default_email` |
    /// | `PETFRIENDS_PASSWORD` | `default_password` |
    /// | `PETFRIENDS_BASE_URL` | `https://petfriends.skillfactory.ru/` |
    /// | `PETFRIENDS_LOG_FILE` | `log.txt` |
    /// | `PETFRIENDS_LOG_POLICY` | `all` (`all`, `completed`, `off`) |
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let email = get_env_or_default("PETFRIENDS_EMAIL", String::from("default_email"));
        let password = get_env_or_default("PETFRIENDS_PASSWORD", String::from("default_password"));

        if email == "default_email" {
            error!("PETFRIENDS_EMAIL not found in environment variables or .env file");
        }
        if password == "default_password" {
            error!("PETFRIENDS_PASSWORD not found in environment variables or .env file");
        }

        Config {
            credentials: Credentials { email, password },
            rest_api: RestApiConfig {
                base_url: get_env_or_default("PETFRIENDS_BASE_URL", String::from(DEFAULT_BASE_URL)),
            },
            request_log: RequestLogConfig {
                path: get_env_or_default("PETFRIENDS_LOG_FILE", String::from(DEFAULT_LOG_FILE)),
                policy: get_env_or_default("PETFRIENDS_LOG_POLICY", LogPolicy::default()),
            },
        }
    }

    /// Same configuration pointed at another server
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.rest_api.base_url = base_url.into();
        self
    }

    /// Same configuration with another request log setup
    #[must_use]
    pub fn with_request_log(mut self, path: impl Into<String>, policy: LogPolicy) -> Self {
        self.request_log = RequestLogConfig {
            path: path.into(),
            policy,
        };
        self
    }

    /// True when credentials were actually provided
    #[must_use]
    pub fn has_credentials(&self) -> bool {
        self.credentials.email != "default_email" && self.credentials.password != "default_password"
    }
}
