//! Roster - terminal customer directory
//!
//! This is the binary entry point. The list logic lives in the workspace
//! crates; this file wires configuration, logging and the chosen front end.

mod headless;

use std::path::PathBuf;

use clap::Parser;
use roster_app::config::{self, Settings};
use roster_app::{Engine, ListMessage};
use roster_backend::AppSyncClient;
use roster_core::prelude::*;
use roster_core::{CustomerId, RoleTab};

use headless::HeadlessOptions;

/// Roster - browse customers by role from the terminal
#[derive(Parser, Debug)]
#[command(name = "roster", version)]
#[command(about = "Browse customers by role from the terminal", long_about = None)]
struct Args {
    /// Settings file (default: <config dir>/roster/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write a commented default config file and exit
    #[arg(long)]
    init_config: bool,

    /// Run without the TUI and print NDJSON events
    #[arg(long)]
    headless: bool,

    /// Initial role tab
    #[arg(long, value_parser = parse_role, value_name = "admin|manager")]
    role: Option<RoleTab>,

    /// Initial name search
    #[arg(long, value_name = "TEXT")]
    search: Option<String>,

    /// (headless) Follow the cursor for this many pages
    #[arg(long, default_value_t = 1, value_name = "N")]
    pages: u32,

    /// (headless) Request the detail view for this customer id
    #[arg(long, value_name = "ID")]
    select: Option<String>,
}

fn parse_role(value: &str) -> std::result::Result<RoleTab, String> {
    RoleTab::parse(value).ok_or_else(|| format!("unknown role {:?} (expected admin or manager)", value))
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    color_eyre::install().map_err(|e| Error::error_reporting(e.to_string()))?;
    roster_core::logging::init()?;

    let config_path = args
        .config
        .clone()
        .or_else(config::default_config_path)
        .ok_or_else(|| Error::config("No config directory on this platform; pass --config"))?;

    if args.init_config {
        if config::init_config_file(&config_path).context("Writing default config")? {
            eprintln!("Wrote default config to {}", config_path.display());
        } else {
            eprintln!("Config already exists at {}", config_path.display());
        }
        return Ok(());
    }

    let settings = load_validated_settings(&config_path)?;
    let client = AppSyncClient::new(settings.backend.client_options()?)?;

    let result = if args.headless {
        let options = HeadlessOptions {
            role: args.role,
            search: args.search,
            pages: args.pages.max(1),
            select: args.select.map(CustomerId::new),
        };
        headless::run_headless(client, settings.list.page_size, options).await
    } else {
        let mut engine = Engine::with_settings(client, &settings);
        if let Some(role) = args.role {
            engine.process_message(ListMessage::SetRoleFilter(role).into());
        }
        if let Some(search) = args.search {
            engine.process_message(ListMessage::SetSearchText(search).into());
        }
        roster_tui::run(engine).await
    };

    match &result {
        Err(e) if e.is_fatal() => error!("Application error: {:?}", e),
        Err(e) => warn!("Run ended on a fetch failure: {}", e),
        Ok(()) => {}
    }
    info!("Roster exiting");
    result
}

fn load_validated_settings(config_path: &std::path::Path) -> Result<Settings> {
    let mut settings = config::load_settings(config_path);
    config::apply_env_overrides(&mut settings);
    settings.validate().context("Validating settings")?;
    info!(
        "Settings loaded: page_size={}, timeout={}s",
        settings.list.page_size, settings.backend.request_timeout_secs
    );
    Ok(settings)
}
