//! Customer list protocol
//!
//! Every list transition goes through [`update_list`]. It never performs I/O:
//! fetches and navigation are returned as [`UpdateAction`]s for the executor,
//! whose outcome comes back as `PageLoaded` / `PageFailed`.
//!
//! Overlapping fetches are neither de-duplicated nor cancelled. Whichever
//! settles last wins, and the first to settle clears both in-flight flags.

use roster_core::prelude::*;
use roster_core::{Cursor, ListQuery};

use super::UpdateAction;
use crate::list_state::ListState;
use crate::message::{FetchOrigin, ListMessage};

/// Apply one list message and return the action to run, if any
pub fn update_list(
    state: &mut ListState,
    page_size: u32,
    message: ListMessage,
) -> Option<UpdateAction> {
    match message {
        ListMessage::Initialize => {
            if state.initialized {
                debug!("List already initialized, ignoring mount fetch");
                return None;
            }
            state.initialized = true;
            state.is_loading = true;
            Some(fetch(page_size, None, FetchOrigin::Initial))
        }

        ListMessage::FetchPage { cursor } => Some(fetch(page_size, cursor, FetchOrigin::Direct)),

        ListMessage::NextPage => {
            state.is_loading = true;
            Some(fetch(page_size, state.cursor.clone(), FetchOrigin::NextPage))
        }

        ListMessage::Refresh => {
            state.is_refreshing = true;
            state.cursor = None;
            Some(fetch(page_size, None, FetchOrigin::Refresh))
        }

        ListMessage::SetRoleFilter(role) => {
            state.selected_role = role;
            None
        }

        ListMessage::SetSearchText(text) => {
            state.search_text = text;
            None
        }

        ListMessage::SelectRecord(id) => Some(UpdateAction::ShowDetail { id }),

        ListMessage::PageLoaded { origin, page } => {
            info!(
                "Fetched {} customers ({} fetch, more: {})",
                page.items.len(),
                origin.label(),
                page.next_token.is_some()
            );
            state.apply_page(page);
            state.settle();
            None
        }

        ListMessage::PageFailed { origin, error } => {
            warn!("Error fetching customers ({} fetch): {}", origin.label(), error);
            state.apply_failure(&error);
            state.settle();
            None
        }
    }
}

fn fetch(page_size: u32, cursor: Option<Cursor>, origin: FetchOrigin) -> UpdateAction {
    UpdateAction::FetchPage {
        query: ListQuery::new(page_size, cursor),
        origin,
    }
}
