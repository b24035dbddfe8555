//! Customer list state (the controller's Model)

use roster_core::{CustomerRecord, Cursor, PageResult, RoleTab};

/// Prefix for the message surfaced when a page fetch fails
pub const FETCH_ERROR_PREFIX: &str = "Error fetching customers";

/// State owned by the customer list controller.
///
/// Created when the list view mounts, dropped when it unmounts; nothing here
/// is persisted. Transitions happen only in [`crate::handler::update_list`].
#[derive(Debug, Clone, Default)]
pub struct ListState {
    /// A fetch is outstanding (full-screen spinner)
    pub is_loading: bool,

    /// A user-initiated refresh is outstanding (pull-to-refresh spinner)
    pub is_refreshing: bool,

    /// Active role filter tab
    pub selected_role: RoleTab,

    /// Free-text name filter
    pub search_text: String,

    /// Last continuation token seen
    pub cursor: Option<Cursor>,

    /// Latest successfully fetched page; replaced, never accumulated
    pub records: Vec<CustomerRecord>,

    /// Last fetch failure, surfaced verbatim by the view
    pub error: Option<String>,

    /// Set by the first `Initialize`; later ones are ignored
    pub(crate) initialized: bool,
}

impl ListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Records passing the role filter and the name search, in fetch order.
    ///
    /// Recomputed on every call.
    pub fn visible_records(&self) -> Vec<&CustomerRecord> {
        let needle = self.search_text.to_lowercase();
        self.records
            .iter()
            .filter(|r| self.selected_role.matches(&r.role))
            .filter(|r| r.name_contains(&needle))
            .collect()
    }

    /// True while any fetch is in flight
    pub fn is_busy(&self) -> bool {
        self.is_loading || self.is_refreshing
    }

    /// Apply a successful page.
    ///
    /// The cursor only moves forward: a page without `nextToken` leaves the
    /// previous cursor in place, so only a refresh restarts pagination.
    pub(crate) fn apply_page(&mut self, page: PageResult) {
        self.records = page.items;
        if let Some(token) = page.next_token {
            self.cursor = Some(token);
        }
        self.error = None;
    }

    /// Record a failed fetch; records and cursor stay as they were.
    pub(crate) fn apply_failure(&mut self, error: &str) {
        self.error = Some(format!("{}: {}", FETCH_ERROR_PREFIX, error));
    }

    /// Clear both in-flight flags once a fetch settles, whatever its outcome
    pub(crate) fn settle(&mut self) {
        self.is_loading = false;
        self.is_refreshing = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_backend::test_utils::{david_and_lynn, test_nameless_record, test_record};

    fn loaded() -> ListState {
        let mut state = ListState::new();
        state.apply_page(david_and_lynn());
        state
    }

    #[test]
    fn test_initial_state() {
        let state = ListState::new();
        assert!(!state.is_loading);
        assert!(!state.is_refreshing);
        assert_eq!(state.selected_role, RoleTab::Admin);
        assert!(state.search_text.is_empty());
        assert!(state.cursor.is_none());
        assert!(state.records.is_empty());
        assert!(state.error.is_none());
        assert!(!state.is_initialized());
    }

    #[test]
    fn test_visible_records_filters_by_role() {
        let mut state = loaded();
        let admins: Vec<_> = state.visible_records().into_iter().map(|r| r.id.as_str()).collect();
        assert_eq!(admins, vec!["1"]);

        state.selected_role = RoleTab::Manager;
        let managers: Vec<_> = state.visible_records().into_iter().map(|r| r.id.as_str()).collect();
        assert_eq!(managers, vec!["2"]);
    }

    #[test]
    fn test_visible_records_search_is_case_insensitive() {
        let mut state = loaded();
        state.search_text = "dAVID".to_string();
        assert_eq!(state.visible_records().len(), 1);

        state.search_text = "zzz".to_string();
        assert!(state.visible_records().is_empty());
    }

    #[test]
    fn test_search_does_not_cross_role_filter() {
        let mut state = loaded();
        state.search_text = "Lynn".to_string();
        assert!(state.visible_records().is_empty());
    }

    #[test]
    fn test_unknown_roles_never_visible() {
        let mut state = ListState::new();
        state.records = vec![test_record("9", "Pat Owner", "OWNER")];
        assert!(state.visible_records().is_empty());
        state.selected_role = RoleTab::Manager;
        assert!(state.visible_records().is_empty());
    }

    #[test]
    fn test_nameless_record_hidden_only_by_non_empty_search() {
        let mut state = ListState::new();
        state.records = vec![test_nameless_record("5", "ADMIN")];
        assert_eq!(state.visible_records().len(), 1);

        state.search_text = "a".to_string();
        assert!(state.visible_records().is_empty());
    }

    #[test]
    fn test_visible_records_preserve_fetch_order() {
        let mut state = ListState::new();
        state.records = vec![
            test_record("3", "Zed", "ADMIN"),
            test_record("1", "Amy", "ADMIN"),
            test_record("2", "Max", "MANAGER"),
        ];
        let ids: Vec<_> = state.visible_records().into_iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1"]);
    }

    #[test]
    fn test_apply_page_keeps_stale_cursor_at_end_of_list() {
        let mut state = ListState::new();
        state.apply_page(david_and_lynn().with_next_token("page-2"));
        assert_eq!(state.cursor.as_ref().map(|c| c.as_str()), Some("page-2"));

        state.apply_page(PageResult::new(vec![test_record("3", "Bob", "MANAGER")]));
        assert_eq!(state.cursor.as_ref().map(|c| c.as_str()), Some("page-2"));
        assert_eq!(state.records.len(), 1);
    }

    #[test]
    fn test_apply_failure_leaves_records() {
        let mut state = loaded();
        state.apply_failure("Network error: Network Error");
        assert_eq!(state.records.len(), 2);
        assert!(state.error.as_deref().unwrap().contains("Network Error"));

        state.apply_page(david_and_lynn());
        assert!(state.error.is_none());
    }
}
