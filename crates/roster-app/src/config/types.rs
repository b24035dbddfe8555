//! Configuration types for Roster
//!
//! Defines `Settings` and its `[backend]`, `[list]` and `[ui]` sections.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use roster_backend::ClientOptions;
use roster_core::prelude::*;
use roster_core::DEFAULT_PAGE_SIZE;

/// Global application settings from config.toml
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub backend: BackendSettings,

    #[serde(default)]
    pub list: ListSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

impl Settings {
    /// Reject settings that cannot drive a session
    pub fn validate(&self) -> Result<()> {
        if self.list.page_size == 0 {
            return Err(Error::config_invalid("list.page_size must be at least 1"));
        }
        self.backend.client_options().map(|_| ())
    }
}

/// Customer backend connection
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BackendSettings {
    /// GraphQL endpoint URL
    #[serde(default)]
    pub endpoint: String,

    /// Static API key sent as `x-api-key`
    #[serde(default)]
    pub api_key: String,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            api_key: String::new(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl BackendSettings {
    /// Build HTTP client options, failing on a missing or unparseable endpoint
    /// or an empty API key.
    pub fn client_options(&self) -> Result<ClientOptions> {
        let endpoint = self.endpoint.trim();
        if endpoint.is_empty() {
            return Err(Error::config_invalid(
                "backend.endpoint is not set (config file or ROSTER_ENDPOINT)",
            ));
        }
        let url = Url::parse(endpoint).map_err(|e| {
            Error::config_invalid(format!("backend.endpoint {:?} is not a URL: {}", endpoint, e))
        })?;

        if self.api_key.trim().is_empty() {
            return Err(Error::config_invalid(
                "backend.api_key is not set (config file or ROSTER_API_KEY)",
            ));
        }

        let timeout = Duration::from_secs(self.request_timeout_secs.max(1));
        Ok(ClientOptions::new(url, self.api_key.trim()).with_timeout(timeout))
    }
}

fn default_request_timeout_secs() -> u64 {
    15
}

/// List behaviour
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ListSettings {
    /// Records requested per fetch
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

impl Default for ListSettings {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiSettings {
    /// Show the email column in the list
    #[serde(default = "default_true")]
    pub show_email: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self { show_email: true }
    }
}

fn default_true() -> bool {
    true
}
