//! Engine - event-queue executor for the TUI
//!
//! The Engine owns the app state, the unified message channel, and the
//! background tasks it has spawned. Every fetch runs as its own task and
//! reports back through the channel, so fetches can overlap; each settlement
//! is applied in arrival order and the last to arrive wins.

use std::sync::Arc;

use roster_backend::CustomerSource;
use roster_core::prelude::*;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::actions::{spawn_customer_fetch, spawn_page_fetch};
use crate::config::Settings;
use crate::handler::{self, UpdateAction};
use crate::message::{ListMessage, Message};
use crate::navigation::{ChannelNavigator, Navigator};
use crate::signals;
use crate::state::AppState;

/// Capacity of the unified message channel
const MESSAGE_CHANNEL_CAPACITY: usize = 256;

pub struct Engine<S, N = ChannelNavigator> {
    /// TEA application state (the Model)
    pub state: AppState,

    source: Arc<S>,

    navigator: N,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (signal handler, fetch tasks).
    msg_tx: mpsc::Sender<Message>,

    /// Receiver half; the runner drains it every frame
    msg_rx: mpsc::Receiver<Message>,

    /// Fetch tasks that may still be running
    tasks: Vec<JoinHandle<()>>,

    signal_task: Option<JoinHandle<()>>,
}

impl<S> Engine<S, ChannelNavigator>
where
    S: CustomerSource + Sync + 'static,
{
    /// Engine whose navigator opens the detail view through the event queue
    pub fn with_settings(source: S, settings: &Settings) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(MESSAGE_CHANNEL_CAPACITY);
        let navigator = ChannelNavigator::new(msg_tx.clone());
        Self::from_parts(
            source,
            navigator,
            AppState::with_settings(settings),
            msg_tx,
            msg_rx,
        )
    }
}

impl<S, N> Engine<S, N>
where
    S: CustomerSource + Sync + 'static,
    N: Navigator,
{
    /// Engine with a caller-supplied navigation port
    pub fn with_navigator(source: S, navigator: N, state: AppState) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(MESSAGE_CHANNEL_CAPACITY);
        Self::from_parts(source, navigator, state, msg_tx, msg_rx)
    }

    fn from_parts(
        source: S,
        navigator: N,
        state: AppState,
        msg_tx: mpsc::Sender<Message>,
        msg_rx: mpsc::Receiver<Message>,
    ) -> Self {
        Self {
            state,
            source: Arc::new(source),
            navigator,
            msg_tx,
            msg_rx,
            tasks: Vec::new(),
            signal_task: None,
        }
    }

    /// Spawn the signal handler and mount the list (first page fetch)
    pub fn start(&mut self) {
        if self.signal_task.is_none() {
            self.signal_task = Some(signals::spawn_signal_handler(self.msg_tx.clone()));
        }
        self.process_message(ListMessage::Initialize.into());
    }

    /// Run a message through update, following up messages and running actions
    pub fn process_message(&mut self, message: Message) {
        let mut msg = Some(message);
        while let Some(m) = msg {
            let result = handler::update(&mut self.state, m);
            if let Some(action) = result.action {
                self.handle_action(action);
            }
            msg = result.message;
        }
    }

    /// Process everything already queued; returns how many messages ran
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Wait for the next queued message and process it.
    ///
    /// Returns `false` once the channel is closed.
    pub async fn process_next(&mut self) -> bool {
        match self.msg_rx.recv().await {
            Some(msg) => {
                self.process_message(msg);
                true
            }
            None => false,
        }
    }

    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    /// Number of spawned fetches not yet finished
    pub fn pending_tasks(&self) -> usize {
        self.tasks.iter().filter(|t| !t.is_finished()).count()
    }

    /// Abort outstanding fetches and the signal handler.
    ///
    /// Results of aborted fetches are never applied.
    pub fn shutdown(&mut self) {
        let pending = self.pending_tasks();
        if pending > 0 {
            info!("Abandoning {} in-flight fetch(es) on shutdown", pending);
        }
        for task in self.tasks.drain(..) {
            task.abort();
        }
        if let Some(task) = self.signal_task.take() {
            task.abort();
        }
    }

    fn handle_action(&mut self, action: UpdateAction) {
        self.tasks.retain(|t| !t.is_finished());

        match action {
            UpdateAction::FetchPage { query, origin } => {
                let handle =
                    spawn_page_fetch(self.source.clone(), query, origin, self.msg_tx.clone());
                self.tasks.push(handle);
            }
            UpdateAction::ShowDetail { id } => self.navigator.show_detail(&id),
            UpdateAction::FetchCustomer { id } => {
                let handle = spawn_customer_fetch(self.source.clone(), id, self.msg_tx.clone());
                self.tasks.push(handle);
            }
        }
    }
}

impl<S, N> Drop for Engine<S, N> {
    fn drop(&mut self) {
        for task in &self.tasks {
            task.abort();
        }
        if let Some(task) = &self.signal_task {
            task.abort();
        }
    }
}
