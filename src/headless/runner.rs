//! Headless mode runner - drives the list controller without a TUI
//!
//! Mount, follow the cursor for `--pages` pages, optionally select one
//! record, then exit. Each step is reported as a [`HeadlessEvent`].

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

use roster_app::{CustomerListController, ListState, Navigator};
use roster_backend::LocalCustomerSource;
use roster_core::prelude::*;
use roster_core::{CustomerId, RoleTab};

use super::HeadlessEvent;

/// What to do after mounting
#[derive(Debug, Clone, Default)]
pub struct HeadlessOptions {
    pub role: Option<RoleTab>,
    pub search: Option<String>,
    /// Total pages to fetch, including the mount fetch
    pub pages: u32,
    pub select: Option<CustomerId>,
}

/// Navigator that remembers requested ids instead of switching screens
#[derive(Debug, Clone, Default)]
struct RecordingNavigator {
    requested: Rc<RefCell<Vec<CustomerId>>>,
}

impl RecordingNavigator {
    fn take(&self) -> Vec<CustomerId> {
        self.requested.take()
    }
}

impl Navigator for RecordingNavigator {
    fn show_detail(&self, id: &CustomerId) {
        self.requested.borrow_mut().push(id.clone());
    }
}

/// Run in headless mode - output JSON events instead of TUI
pub async fn run_headless<S: LocalCustomerSource>(
    source: S,
    page_size: u32,
    options: HeadlessOptions,
) -> Result<()> {
    info!("Roster starting in HEADLESS mode");
    let mut stdout = io::stdout();
    let result = drive(source, page_size, options, &mut stdout).await;

    if let Err(ref e) = result {
        HeadlessEvent::error(e.to_string(), e.is_fatal()).emit();
    }
    result
}

async fn drive<S, W>(source: S, page_size: u32, options: HeadlessOptions, out: &mut W) -> Result<()>
where
    S: LocalCustomerSource,
    W: Write,
{
    let navigator = RecordingNavigator::default();
    let mut controller =
        CustomerListController::new(source, navigator.clone()).with_page_size(page_size);

    if let Some(role) = options.role {
        controller.set_role_filter(role);
    }
    if let Some(search) = options.search.as_deref() {
        controller.set_search_text(search);
    }

    let state = controller.state();
    write(
        out,
        HeadlessEvent::started(
            page_size.max(1),
            &state.selected_role.role().as_str().to_ascii_lowercase(),
            &state.search_text,
        ),
    )?;

    controller.initialize().await;
    let mut keep_going = report_page(out, 1, controller.state(), None)?;

    for page in 2..=options.pages {
        let Some(before) = controller.state().cursor.clone() else {
            break;
        };
        if !keep_going {
            break;
        }

        controller.next_page().await;
        keep_going = report_page(out, page, controller.state(), Some(&before))?;

        // A last page leaves the cursor where it was
        if controller.state().cursor.as_ref() == Some(&before) {
            debug!("Reached the end of the list after page {}", page);
            break;
        }
    }

    if let Some(id) = options.select {
        select(&mut controller, &navigator, &id, out).await?;
    }

    write(out, HeadlessEvent::finished())
}

/// Emit the outcome of the last settled fetch. Returns false after a failure.
fn report_page<W: Write>(
    out: &mut W,
    page: u32,
    state: &ListState,
    previous_cursor: Option<&roster_core::Cursor>,
) -> Result<bool> {
    if let Some(error) = &state.error {
        write(out, HeadlessEvent::fetch_failed(page, error.clone()))?;
        return Ok(false);
    }

    let next_token = state
        .cursor
        .as_ref()
        .filter(|c| Some(*c) != previous_cursor)
        .map(|c| c.as_str().to_string());
    let visible = state.visible_records().into_iter().cloned().collect();

    write(
        out,
        HeadlessEvent::page_loaded(page, state.records.len(), visible, next_token),
    )?;
    Ok(true)
}

async fn select<S, W>(
    controller: &mut CustomerListController<S, RecordingNavigator>,
    navigator: &RecordingNavigator,
    id: &CustomerId,
    out: &mut W,
) -> Result<()>
where
    S: LocalCustomerSource,
    W: Write,
{
    let Some(record) = controller.state().records.iter().find(|r| &r.id == id).cloned() else {
        warn!("Customer {} is not on the loaded page", id);
        return write(
            out,
            HeadlessEvent::error(format!("Customer {} is not on the loaded page", id), false),
        );
    };

    controller.select_record(&record);

    for requested in navigator.take() {
        write(out, HeadlessEvent::detail_requested(requested.as_str()))?;

        match controller.source().get_customer(&requested).await {
            Ok(found) => write(out, HeadlessEvent::customer_detail(requested.as_str(), found))?,
            Err(e) => write(
                out,
                HeadlessEvent::error(format!("Error fetching customer: {}", e), e.is_fatal()),
            )?,
        }
    }
    Ok(())
}

fn write<W: Write>(out: &mut W, event: HeadlessEvent) -> Result<()> {
    event.write_to(out)
}
