//! Inline executor for the customer list protocol
//!
//! [`CustomerListController`] owns a [`ListState`] and awaits each data-port
//! call before returning, so every intent has settled by the time its method
//! resolves. Headless mode and the protocol tests run on it; the TUI uses
//! [`crate::Engine`] instead.

use roster_backend::LocalCustomerSource;
use roster_core::prelude::*;
use roster_core::{CustomerRecord, Cursor, RoleTab, DEFAULT_PAGE_SIZE};

use crate::actions::page_outcome;
use crate::handler::{update_list, UpdateAction};
use crate::list_state::ListState;
use crate::message::ListMessage;
use crate::navigation::Navigator;

pub struct CustomerListController<S, N> {
    source: S,
    navigator: N,
    state: ListState,
    page_size: u32,
}

impl<S, N> CustomerListController<S, N>
where
    S: LocalCustomerSource,
    N: Navigator,
{
    pub fn new(source: S, navigator: N) -> Self {
        Self {
            source,
            navigator,
            state: ListState::new(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Read-only view of the list state
    pub fn state(&self) -> &ListState {
        &self.state
    }

    pub fn visible_records(&self) -> Vec<&CustomerRecord> {
        self.state.visible_records()
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Mount-time fetch of the first page. Only the first call fetches.
    pub async fn initialize(&mut self) {
        self.dispatch(ListMessage::Initialize).await;
    }

    pub async fn fetch_page(&mut self, cursor: Option<Cursor>) {
        self.dispatch(ListMessage::FetchPage { cursor }).await;
    }

    /// Fetch the page after the current cursor, replacing the records
    pub async fn next_page(&mut self) {
        self.dispatch(ListMessage::NextPage).await;
    }

    /// Restart from the first page
    pub async fn refresh(&mut self) {
        self.dispatch(ListMessage::Refresh).await;
    }

    pub fn set_role_filter(&mut self, role: RoleTab) {
        self.apply(ListMessage::SetRoleFilter(role));
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.apply(ListMessage::SetSearchText(text.into()));
    }

    /// Hand the record to the navigation port
    pub fn select_record(&mut self, record: &CustomerRecord) {
        self.apply(ListMessage::SelectRecord(record.id.clone()));
    }

    /// Run a message and every action it leads to, awaiting fetches inline
    async fn dispatch(&mut self, msg: ListMessage) {
        let mut next = update_list(&mut self.state, self.page_size, msg);

        while let Some(action) = next {
            next = match action {
                UpdateAction::FetchPage { query, origin } => {
                    let result = self.source.list_customers(query).await;
                    let settled = page_outcome(origin, result);
                    update_list(&mut self.state, self.page_size, settled)
                }
                other => {
                    self.run_sync(other);
                    None
                }
            };
        }
    }

    /// Apply a message whose action, if any, needs no I/O
    fn apply(&mut self, msg: ListMessage) {
        if let Some(action) = update_list(&mut self.state, self.page_size, msg) {
            self.run_sync(action);
        }
    }

    fn run_sync(&self, action: UpdateAction) {
        match action {
            UpdateAction::ShowDetail { id } => self.navigator.show_detail(&id),
            other => warn!("Controller cannot run {:?} synchronously", other),
        }
    }
}
