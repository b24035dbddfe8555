//! # roster-core - Core Domain Types
//!
//! Foundation crate for Roster. Provides the customer domain types, the
//! error taxonomy, small text helpers and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`CustomerRecord`] - A single customer as returned by the backend
//! - [`CustomerId`] - Opaque, stable customer identifier
//! - [`Role`] - Role tag carried by a record (known or arbitrary)
//! - [`RoleTab`] - The fixed set of role filter tabs
//! - [`PageResult`] - One page of records plus continuation cursor
//! - [`ListQuery`] - Page request (limit + cursor)
//! - [`Cursor`] - Opaque continuation token
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with fetch-failure vs fatal classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait that logs an error with context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use roster_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod text;
pub mod types;

/// Prelude for common imports used throughout all Roster crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use text::{capitalize_first_letter, truncate_name};
pub use types::{
    CustomerId, CustomerRecord, Cursor, ListQuery, PageResult, Role, RoleTab, DEFAULT_PAGE_SIZE,
    ROLE_TABS,
};
