//! Custom widget components

mod customer_list;
mod detail_popup;
pub mod modal_overlay;
mod role_tabs;
mod search_input;
mod status_bar;

pub use customer_list::CustomerList;
pub use detail_popup::DetailPopup;
pub use role_tabs::RoleTabs;
pub use search_input::SearchInput;
pub use status_bar::{spinner_glyph, StatusBar, SPINNER_FRAMES};
