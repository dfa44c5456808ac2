//! Sidebar navigation model.
//!
//! The menu is a static, ordered list of entries loaded from TOML embedded at
//! compile time. Entries either link to a route directly or open a submenu of
//! sub-items.

mod config;
mod types;

pub use config::default_menu;
#[cfg(test)]
pub use config::parse_menu;
pub use types::*;
