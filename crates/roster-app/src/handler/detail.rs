//! Detail view handlers
//!
//! The detail view sits on top of the list; none of these handlers touch
//! list state.

use roster_core::prelude::*;
use roster_core::{CustomerId, CustomerRecord};

use super::{UpdateAction, UpdateResult};
use crate::state::{AppState, DetailState, UiMode};

/// Show a record pushed by the navigation port and refresh it from the backend
pub fn handle_open_detail(state: &mut AppState, id: CustomerId) -> UpdateResult {
    let known = state.list.records.iter().find(|r| r.id == id).cloned();
    debug!("Opening detail for {} (cached: {})", id, known.is_some());

    state.detail = Some(DetailState::new(id.clone(), known));
    state.ui_mode = UiMode::Detail;
    UpdateResult::action(UpdateAction::FetchCustomer { id })
}

pub fn handle_close_detail(state: &mut AppState) -> UpdateResult {
    state.detail = None;
    state.ui_mode = UiMode::List;
    UpdateResult::none()
}

pub fn handle_customer_loaded(
    state: &mut AppState,
    id: CustomerId,
    record: Option<CustomerRecord>,
) -> UpdateResult {
    let Some(detail) = state.detail.as_mut().filter(|d| d.id == id) else {
        debug!("Dropping detail result for {}: view closed or moved on", id);
        return UpdateResult::none();
    };

    detail.loading = false;
    match record {
        Some(record) => {
            detail.record = Some(record);
            detail.error = None;
        }
        None => detail.error = Some(format!("Customer {} was not found", id)),
    }
    UpdateResult::none()
}

pub fn handle_customer_fetch_failed(
    state: &mut AppState,
    id: CustomerId,
    error: String,
) -> UpdateResult {
    warn!("Error fetching customer {}: {}", id, error);
    if let Some(detail) = state.detail.as_mut().filter(|d| d.id == id) {
        detail.loading = false;
        detail.error = Some(format!("Error fetching customer: {}", error));
    }
    UpdateResult::none()
}
