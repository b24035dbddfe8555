//! Configuration file parsing for Roster
//!
//! Settings live in `<config_dir>/roster/config.toml`; environment variables
//! override the backend section.

pub mod settings;
pub mod types;

pub use settings::{
    apply_env_overrides, default_config_path, init_config_file, load_settings, API_KEY_ENV,
    ENDPOINT_ENV,
};
pub use types::*;
