//! Theme system for the TUI.
//!
//! - `palette` holds the raw color constants
//! - `styles` builds semantic styles from them

pub mod palette;
pub mod styles;
