//! Customer data port
//!
//! The list controller only ever talks to the backend through this trait, so
//! transport, credentials and timeouts stay on the implementor's side.

use roster_core::prelude::*;
use roster_core::{CustomerId, CustomerRecord, ListQuery, PageResult};

/// Paged access to customer records.
///
/// Implement the `Send` variant ([`CustomerSource`]) so the source can be
/// driven from spawned tasks; the local variant comes for free.
#[trait_variant::make(CustomerSource: Send)]
pub trait LocalCustomerSource {
    /// Fetch one page of customers.
    ///
    /// Fails with a fetch-failure [`Error`] on network, backend or
    /// response-shape problems.
    async fn list_customers(&self, query: ListQuery) -> Result<PageResult>;

    /// Fetch a single customer. `Ok(None)` when the backend has no such id.
    async fn get_customer(&self, id: &CustomerId) -> Result<Option<CustomerRecord>>;
}
