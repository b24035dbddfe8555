//! roster-app - Application state and orchestration for Roster
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state management.
//! The customer list protocol itself is a pure transition function over
//! [`ListState`] ([`handler::update_list`]) driven by two executors:
//! - [`CustomerListController`] awaits the data port inline (headless mode, tests)
//! - [`Engine`] spawns each fetch as a task and feeds the outcome back as a message (TUI)
//!
//! Configuration loading and signal handling live here as well.

pub mod actions;
pub mod config;
pub mod controller;
pub mod engine;
pub mod handler;
pub mod input_key;
pub mod list_state;
pub mod message;
pub mod navigation;
pub mod signals;
pub mod state;

// Re-export primary types
pub use controller::CustomerListController;
pub use engine::Engine;
pub use handler::{update_list, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use list_state::ListState;
pub use message::{FetchOrigin, ListMessage, Message};
pub use navigation::{ChannelNavigator, Navigator};
pub use state::{AppState, DetailState, UiMode};
