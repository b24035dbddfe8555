//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `list`: The customer list protocol (`update_list`)
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for UI modes
//! - `detail`: Detail view handlers

pub(crate) mod detail;
pub(crate) mod keys;
pub(crate) mod list;
pub(crate) mod update;


use roster_core::{CustomerId, ListQuery};

use crate::message::{FetchOrigin, Message};

// Re-export main entry points
pub use list::update_list;
pub use update::update;

/// Actions that the executor should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Query the data port for one page and report back with
    /// `ListMessage::PageLoaded` / `ListMessage::PageFailed`
    FetchPage {
        query: ListQuery,
        origin: FetchOrigin,
    },

    /// Invoke the navigation port for a record. Fire-and-forget.
    ShowDetail { id: CustomerId },

    /// Fetch a single record for the detail view and report back with
    /// `Message::CustomerLoaded` / `Message::CustomerFetchFailed`
    FetchCustomer { id: CustomerId },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}

impl From<Option<UpdateAction>> for UpdateResult {
    fn from(action: Option<UpdateAction>) -> Self {
        Self {
            message: None,
            action,
        }
    }
}
