//! Key event handlers for different UI modes

use roster_core::RoleTab;

use crate::input_key::InputKey;
use crate::message::{ListMessage, Message};
use crate::state::{AppState, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode {
        UiMode::List => handle_key_list(key),
        UiMode::SearchInput => handle_key_search_input(key),
        UiMode::Detail => handle_key_detail(key),
    }
}

fn handle_key_list(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc | InputKey::CharCtrl('c') => Some(Message::Quit),

        // Role tabs
        InputKey::Tab | InputKey::Right => Some(Message::NextRoleTab),
        InputKey::BackTab | InputKey::Left => Some(Message::PreviousRoleTab),
        InputKey::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            RoleTab::from_index(index).map(|tab| ListMessage::SetRoleFilter(tab).into())
        }

        // Highlight
        InputKey::Down | InputKey::Char('j') => Some(Message::HighlightNext),
        InputKey::Up | InputKey::Char('k') => Some(Message::HighlightPrevious),
        InputKey::Home | InputKey::Char('g') => Some(Message::HighlightFirst),
        InputKey::End | InputKey::Char('G') => Some(Message::HighlightLast),
        InputKey::Enter => Some(Message::SelectHighlighted),

        InputKey::Char('/') => Some(Message::StartSearchInput),
        InputKey::Char('r') | InputKey::F(5) => Some(ListMessage::Refresh.into()),
        InputKey::Char('n') => Some(ListMessage::NextPage.into()),

        _ => None,
    }
}

/// Keystrokes edit the search text live; the filter applies as you type
fn handle_key_search_input(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc | InputKey::Enter => Some(Message::EndSearchInput),
        InputKey::Backspace => Some(Message::SearchInputBackspace),
        InputKey::CharCtrl('u') => Some(Message::ClearSearch),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::Char(c) => Some(Message::SearchInputChar(c)),
        _ => None,
    }
}

fn handle_key_detail(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc | InputKey::Char('q') | InputKey::Backspace => Some(Message::CloseDetail),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}
