//! Settings loader for config.toml

use std::path::{Path, PathBuf};

use super::types::Settings;
use roster_core::prelude::*;

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "roster";

/// Overrides `backend.endpoint`
pub const ENDPOINT_ENV: &str = "ROSTER_ENDPOINT";
/// Overrides `backend.api_key`
pub const API_KEY_ENV: &str = "ROSTER_API_KEY";

/// `<config_dir>/roster/config.toml`, when the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Load settings from `config_path`, falling back to defaults.
///
/// A missing file is normal; an unreadable or invalid one is logged and
/// ignored.
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Apply `ROSTER_ENDPOINT` / `ROSTER_API_KEY` on top of loaded settings
pub fn apply_env_overrides(settings: &mut Settings) {
    if let Some(endpoint) = non_empty_env(ENDPOINT_ENV) {
        debug!("Backend endpoint overridden by {}", ENDPOINT_ENV);
        settings.backend.endpoint = endpoint;
    }
    if let Some(key) = non_empty_env(API_KEY_ENV) {
        debug!("API key overridden by {}", API_KEY_ENV);
        settings.backend.api_key = key;
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Write a commented default config file.
///
/// Returns `false` without touching anything when the file already exists.
pub fn init_config_file(config_path: &Path) -> Result<bool> {
    if config_path.exists() {
        info!("Config file already exists at {:?}", config_path);
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::config(format!("Failed to create {:?}: {}", parent, e)))?;
    }

    let default_content = r#"# Roster Configuration

[backend]
# GraphQL endpoint (or set ROSTER_ENDPOINT)
endpoint = ""
# API key sent as x-api-key (or set ROSTER_API_KEY)
api_key = ""
request_timeout_secs = 15

[list]
page_size = 10

[ui]
show_email = true
"#;
    std::fs::write(config_path, default_content)
        .map_err(|e| Error::config(format!("Failed to write {:?}: {}", config_path, e)))?;

    info!("Wrote default config to {:?}", config_path);
    Ok(true)
}
