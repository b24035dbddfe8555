//! Headless mode - JSON event output instead of the TUI
//!
//! Drives the customer list controller once (mount, optional pages, optional
//! selection) and reports each step on stdout.
//!
//! # Event Format
//!
//! Events are output as NDJSON (newline-delimited JSON), one event per line.
//! Each event has an "event" field indicating its type.
//!
//! ```json
//! {"event":"started","page_size":10,"role":"admin","search":"","timestamp":1704700001000}
//! {"event":"page_loaded","page":1,"fetched":2,"visible":[...],"next_token":null,"timestamp":1704700002000}
//! {"event":"finished","timestamp":1704700002001}
//! ```

pub mod runner;

pub use runner::{run_headless, HeadlessOptions};

use chrono::Utc;
use roster_core::prelude::*;
use roster_core::CustomerRecord;
use serde::Serialize;
use std::io::{self, Write};

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// Controller mounted with its initial filters
    Started {
        page_size: u32,
        role: String,
        search: String,
        timestamp: i64,
    },

    /// A page fetch settled successfully
    PageLoaded {
        page: u32,
        fetched: usize,
        visible: Vec<CustomerRecord>,
        next_token: Option<String>,
        timestamp: i64,
    },

    /// A page fetch settled with an error
    FetchFailed {
        page: u32,
        message: String,
        timestamp: i64,
    },

    /// The navigation port was asked to show a record
    DetailRequested { id: String, timestamp: i64 },

    /// Single-record fetch result for the requested detail view
    CustomerDetail {
        id: String,
        record: Option<CustomerRecord>,
        timestamp: i64,
    },

    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },

    Finished { timestamp: i64 },
}

impl HeadlessEvent {
    /// Emit this event to stdout as JSON
    pub fn emit(&self) {
        let mut stdout = io::stdout().lock();
        if let Err(e) = self.write_to(&mut stdout) {
            error!("Failed to write headless event to stdout: {}", e);
        }
    }

    /// Write this event as one NDJSON line and flush
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        let json = serde_json::to_string(self)?;
        writeln!(out, "{}", json)?;
        out.flush()?;
        Ok(())
    }

    /// Get current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    // ─────────────────────────────────────────────────────────
    // Convenience constructors
    // ─────────────────────────────────────────────────────────

    pub fn started(page_size: u32, role: &str, search: &str) -> Self {
        Self::Started {
            page_size,
            role: role.to_string(),
            search: search.to_string(),
            timestamp: Self::now(),
        }
    }

    pub fn page_loaded(
        page: u32,
        fetched: usize,
        visible: Vec<CustomerRecord>,
        next_token: Option<String>,
    ) -> Self {
        Self::PageLoaded {
            page,
            fetched,
            visible,
            next_token,
            timestamp: Self::now(),
        }
    }

    pub fn fetch_failed(page: u32, message: String) -> Self {
        Self::FetchFailed {
            page,
            message,
            timestamp: Self::now(),
        }
    }

    pub fn detail_requested(id: &str) -> Self {
        Self::DetailRequested {
            id: id.to_string(),
            timestamp: Self::now(),
        }
    }

    pub fn customer_detail(id: &str, record: Option<CustomerRecord>) -> Self {
        Self::CustomerDetail {
            id: id.to_string(),
            record,
            timestamp: Self::now(),
        }
    }

    pub fn error(message: String, fatal: bool) -> Self {
        Self::Error {
            message,
            fatal,
            timestamp: Self::now(),
        }
    }

    pub fn finished() -> Self {
        Self::Finished {
            timestamp: Self::now(),
        }
    }
}
