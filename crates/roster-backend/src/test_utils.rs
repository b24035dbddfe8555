//! Test utilities for the customer data port
//!
//! Provides [`FakeCustomerSource`], a scripted in-memory source, plus record
//! and page helpers shared by the app and TUI test suites.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::time::Duration;

use roster_core::prelude::*;
use roster_core::{CustomerId, CustomerRecord, ListQuery, PageResult};

use crate::source::CustomerSource;

/// Creates a test record with the given id, name and role tag.
pub fn test_record(id: &str, name: &str, role: &str) -> CustomerRecord {
    CustomerRecord::new(id, name, role)
}

/// Creates a test record whose name is missing.
pub fn test_nameless_record(id: &str, role: &str) -> CustomerRecord {
    let mut record = CustomerRecord::new(id, "", role);
    record.name = None;
    record
}

/// The two-customer page used throughout the list tests.
pub fn david_and_lynn() -> PageResult {
    PageResult::new(vec![
        test_record("1", "David Miler", "ADMIN"),
        test_record("2", "Lynn Warr", "MANAGER"),
    ])
}

/// One scripted answer to `list_customers`
#[derive(Debug, Clone)]
enum Scripted {
    Page(PageResult),
    Failure(String),
}

/// In-memory [`CustomerSource`] with scripted responses.
///
/// Responses are consumed in order; once the script is exhausted every call
/// returns an empty page. Every query is recorded for later inspection.
#[derive(Debug, Default)]
pub struct FakeCustomerSource {
    script: Mutex<VecDeque<(Scripted, Option<Duration>)>>,
    queries: Mutex<Vec<ListQuery>>,
    customers: Mutex<HashMap<CustomerId, CustomerRecord>>,
}

impl FakeCustomerSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer the next `list_customers` call with `page`
    pub fn push_page(self, page: PageResult) -> Self {
        self.push(Scripted::Page(page), None)
    }

    /// Answer the next call with `page` after `delay`
    pub fn push_page_after(self, page: PageResult, delay: Duration) -> Self {
        self.push(Scripted::Page(page), Some(delay))
    }

    /// Fail the next call with a network error carrying `message`
    pub fn push_failure(self, message: &str) -> Self {
        self.push(Scripted::Failure(message.to_string()), None)
    }

    /// Make `record` available to `get_customer`
    pub fn with_customer(self, record: CustomerRecord) -> Self {
        if let Ok(mut customers) = self.customers.lock() {
            customers.insert(record.id.clone(), record);
        }
        self
    }

    /// All queries received so far, in call order
    pub fn queries(&self) -> Vec<ListQuery> {
        self.queries.lock().map(|q| q.clone()).unwrap_or_default()
    }

    fn push(self, answer: Scripted, delay: Option<Duration>) -> Self {
        if let Ok(mut script) = self.script.lock() {
            script.push_back((answer, delay));
        }
        self
    }

    fn next_answer(&self) -> (Scripted, Option<Duration>) {
        self.script
            .lock()
            .ok()
            .and_then(|mut s| s.pop_front())
            .unwrap_or((Scripted::Page(PageResult::default()), None))
    }
}

impl CustomerSource for FakeCustomerSource {
    async fn list_customers(&self, query: ListQuery) -> Result<PageResult> {
        if let Ok(mut queries) = self.queries.lock() {
            queries.push(query);
        }

        let (answer, delay) = self.next_answer();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        match answer {
            Scripted::Page(page) => Ok(page),
            Scripted::Failure(message) => Err(Error::network(message)),
        }
    }

    async fn get_customer(&self, id: &CustomerId) -> Result<Option<CustomerRecord>> {
        Ok(self
            .customers
            .lock()
            .ok()
            .and_then(|c| c.get(id).cloned()))
    }
}
