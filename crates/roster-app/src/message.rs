//! Message types for the application (TEA pattern)

use roster_core::{CustomerId, CustomerRecord, Cursor, PageResult, RoleTab};

use crate::input_key::InputKey;

/// Why a page fetch was issued. Carried through to settlement for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOrigin {
    /// The single fetch issued when the list mounts
    Initial,
    /// User pull-to-refresh
    Refresh,
    /// Advance to the page after the current cursor
    NextPage,
    /// Explicit fetch with a caller-supplied cursor
    Direct,
}

impl FetchOrigin {
    pub fn label(self) -> &'static str {
        match self {
            FetchOrigin::Initial => "initial",
            FetchOrigin::Refresh => "refresh",
            FetchOrigin::NextPage => "next-page",
            FetchOrigin::Direct => "direct",
        }
    }
}

/// Intents and settlements handled by the customer list protocol
#[derive(Debug, Clone)]
pub enum ListMessage {
    /// View mounted: issue the first fetch (once per lifetime)
    Initialize,

    /// Fetch the page at `cursor` (first page when `None`)
    FetchPage { cursor: Option<Cursor> },

    /// Fetch the page after the current cursor
    NextPage,

    /// Restart pagination from the first page
    Refresh,

    SetRoleFilter(RoleTab),

    SetSearchText(String),

    /// Ask the navigation port to show this record
    SelectRecord(CustomerId),

    /// A page fetch succeeded
    PageLoaded {
        origin: FetchOrigin,
        page: PageResult,
    },

    /// A page fetch failed; `error` is the underlying failure's text
    PageFailed { origin: FetchOrigin, error: String },
}

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (spinner animation)
    Tick,

    /// Quit the application (q, Ctrl+C, signal handler)
    Quit,

    /// Customer list protocol message
    List(ListMessage),

    // ─────────────────────────────────────────────────────────
    // List Navigation Messages
    // ─────────────────────────────────────────────────────────
    /// Move the highlight down one row
    HighlightNext,
    /// Move the highlight up one row
    HighlightPrevious,
    /// Jump to the first row
    HighlightFirst,
    /// Jump to the last row
    HighlightLast,
    /// Select the highlighted record
    SelectHighlighted,
    /// Switch to the next role tab
    NextRoleTab,
    /// Switch to the previous role tab
    PreviousRoleTab,

    // ─────────────────────────────────────────────────────────
    // Search Input Messages
    // ─────────────────────────────────────────────────────────
    /// Enter search input mode
    StartSearchInput,
    /// Leave search input mode, keeping the text
    EndSearchInput,
    /// Append a character to the search text
    SearchInputChar(char),
    /// Delete the last character of the search text
    SearchInputBackspace,
    /// Clear the search text
    ClearSearch,

    // ─────────────────────────────────────────────────────────
    // Detail View Messages
    // ─────────────────────────────────────────────────────────
    /// Navigation port asked for the detail view of a record
    OpenDetail { id: CustomerId },
    /// Close the detail view
    CloseDetail,
    /// Single-record fetch completed
    CustomerLoaded {
        id: CustomerId,
        record: Option<CustomerRecord>,
    },
    /// Single-record fetch failed
    CustomerFetchFailed { id: CustomerId, error: String },
}

impl From<ListMessage> for Message {
    fn from(msg: ListMessage) -> Self {
        Message::List(msg)
    }
}
