//! Application state (Model in TEA pattern)

use roster_core::{CustomerId, CustomerRecord, DEFAULT_PAGE_SIZE};

use crate::config::Settings;
use crate::list_state::ListState;

/// Current UI mode/screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Customer list with role tabs
    #[default]
    List,

    /// Capturing keystrokes into the search text
    SearchInput,

    /// Detail popup for one record
    Detail,
}

/// Detail popup state for the record handed to the navigation port
#[derive(Debug, Clone, PartialEq)]
pub struct DetailState {
    pub id: CustomerId,

    /// Last known copy of the record; starts with the list's copy
    pub record: Option<CustomerRecord>,

    /// Single-record fetch outstanding
    pub loading: bool,

    pub error: Option<String>,
}

impl DetailState {
    pub fn new(id: CustomerId, record: Option<CustomerRecord>) -> Self {
        Self {
            id,
            record,
            loading: true,
            error: None,
        }
    }
}

/// Complete application state
#[derive(Debug)]
pub struct AppState {
    /// Customer list controller state
    pub list: ListState,

    pub ui_mode: UiMode,

    /// Highlighted row within `list.visible_records()`
    pub selected_index: usize,

    pub detail: Option<DetailState>,

    /// Requested page size for every fetch
    pub page_size: u32,

    /// Show the email column in the list
    pub show_email: bool,

    /// Spinner animation frame, advanced on every tick
    pub spinner_frame: usize,

    quitting: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            list: ListState::new(),
            ui_mode: UiMode::default(),
            selected_index: 0,
            detail: None,
            page_size: DEFAULT_PAGE_SIZE,
            show_email: true,
            spinner_frame: 0,
            quitting: false,
        }
    }

    pub fn with_settings(settings: &Settings) -> Self {
        Self {
            page_size: settings.list.page_size,
            show_email: settings.ui.show_email,
            ..Self::new()
        }
    }

    pub fn visible_records(&self) -> Vec<&CustomerRecord> {
        self.list.visible_records()
    }

    /// Record under the highlight, if the visible list is non-empty
    pub fn highlighted_record(&self) -> Option<&CustomerRecord> {
        self.list.visible_records().get(self.selected_index).copied()
    }

    /// Keep the highlight inside the visible list
    pub fn clamp_selection(&mut self) {
        let len = self.list.visible_records().len();
        if len == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= len {
            self.selected_index = len - 1;
        }
    }

    pub fn request_quit(&mut self) {
        self.quitting = true;
    }

    pub fn should_quit(&self) -> bool {
        self.quitting
    }
}
