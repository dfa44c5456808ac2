pub mod app_layout;
pub mod header;
pub mod nav_badge;
pub mod nav_icon;
pub mod sidebar;
