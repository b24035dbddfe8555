//! Navigation port
//!
//! Selecting a record hands its id to a [`Navigator`]. The list never learns
//! what happened next.

use roster_core::prelude::*;
use roster_core::CustomerId;
use tokio::sync::mpsc;

use crate::message::Message;

/// Shows the detail view for a record. Fire-and-forget.
#[cfg_attr(test, mockall::automock)]
pub trait Navigator {
    fn show_detail(&self, id: &CustomerId);
}

/// Navigator that posts [`Message::OpenDetail`] onto the app's event queue
#[derive(Debug, Clone)]
pub struct ChannelNavigator {
    tx: mpsc::Sender<Message>,
}

impl ChannelNavigator {
    pub fn new(tx: mpsc::Sender<Message>) -> Self {
        Self { tx }
    }
}

impl Navigator for ChannelNavigator {
    fn show_detail(&self, id: &CustomerId) {
        let msg = Message::OpenDetail { id: id.clone() };
        if let Err(e) = self.tx.try_send(msg) {
            warn!("Failed to open detail for {}: {}", id, e);
        }
    }
}
