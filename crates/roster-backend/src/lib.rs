//! roster-backend - Customer data port and GraphQL client
//!
//! This crate defines the [`CustomerSource`] data port consumed by the list
//! controller and implements it over a managed GraphQL endpoint
//! ([`AppSyncClient`]). Wire-level request building and response parsing live
//! in [`graphql`] so they can be tested without a network.

pub mod client;
pub mod graphql;
pub mod source;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use client::{AppSyncClient, ClientOptions, DEFAULT_REQUEST_TIMEOUT};
pub use source::{CustomerSource, LocalCustomerSource};
