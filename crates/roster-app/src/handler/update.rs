//! Main update function - handles state transitions (TEA pattern)
//!
//! List intents are forwarded to [`update_list`]; everything else here is
//! view bookkeeping around it (highlight, search input, detail popup).

use crate::message::{ListMessage, Message};
use crate::state::{AppState, UiMode};

use super::{detail, keys::handle_key, update_list, UpdateResult};

/// Spinner frames cycle through this many states
const SPINNER_FRAMES: usize = 10;

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => {
            if state.list.is_busy() || state.detail.as_ref().is_some_and(|d| d.loading) {
                state.spinner_frame = (state.spinner_frame + 1) % SPINNER_FRAMES;
            }
            UpdateResult::none()
        }

        Message::List(msg) => {
            if matches!(msg, ListMessage::SetRoleFilter(_)) {
                state.selected_index = 0;
            }
            let action = update_list(&mut state.list, state.page_size, msg);
            state.clamp_selection();
            UpdateResult::from(action)
        }

        // ─────────────────────────────────────────────────────────
        // List Navigation Messages
        // ─────────────────────────────────────────────────────────
        Message::HighlightNext => {
            let len = state.visible_records().len();
            if len > 0 {
                state.selected_index = (state.selected_index + 1).min(len - 1);
            }
            UpdateResult::none()
        }

        Message::HighlightPrevious => {
            state.selected_index = state.selected_index.saturating_sub(1);
            UpdateResult::none()
        }

        Message::HighlightFirst => {
            state.selected_index = 0;
            UpdateResult::none()
        }

        Message::HighlightLast => {
            state.selected_index = state.visible_records().len().saturating_sub(1);
            UpdateResult::none()
        }

        Message::SelectHighlighted => match state.highlighted_record() {
            Some(record) => {
                UpdateResult::message(ListMessage::SelectRecord(record.id.clone()).into())
            }
            None => UpdateResult::none(),
        },

        Message::NextRoleTab => {
            let tab = state.list.selected_role.next();
            UpdateResult::message(ListMessage::SetRoleFilter(tab).into())
        }

        Message::PreviousRoleTab => {
            let tab = state.list.selected_role.prev();
            UpdateResult::message(ListMessage::SetRoleFilter(tab).into())
        }

        // ─────────────────────────────────────────────────────────
        // Search Input Messages
        // ─────────────────────────────────────────────────────────
        Message::StartSearchInput => {
            state.ui_mode = UiMode::SearchInput;
            UpdateResult::none()
        }

        Message::EndSearchInput => {
            state.ui_mode = UiMode::List;
            UpdateResult::none()
        }

        Message::SearchInputChar(c) => {
            let mut text = state.list.search_text.clone();
            text.push(c);
            UpdateResult::message(ListMessage::SetSearchText(text).into())
        }

        Message::SearchInputBackspace => {
            let mut text = state.list.search_text.clone();
            if text.pop().is_none() {
                return UpdateResult::none();
            }
            UpdateResult::message(ListMessage::SetSearchText(text).into())
        }

        Message::ClearSearch => {
            UpdateResult::message(ListMessage::SetSearchText(String::new()).into())
        }

        // ─────────────────────────────────────────────────────────
        // Detail View Messages
        // ─────────────────────────────────────────────────────────
        Message::OpenDetail { id } => detail::handle_open_detail(state, id),
        Message::CloseDetail => detail::handle_close_detail(state),
        Message::CustomerLoaded { id, record } => detail::handle_customer_loaded(state, id, record),
        Message::CustomerFetchFailed { id, error } => {
            detail::handle_customer_fetch_failed(state, id, error)
        }
    }
}
