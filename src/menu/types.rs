//! Type definitions for the sidebar navigation model.
//!
//! These types are deserialized from the embedded TOML menu config.

use serde::Deserialize;

/// Menu section a submenu belongs to. The sidebar currently has one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuKind {
    Main,
}

impl MenuKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MenuKind::Main => "main",
        }
    }
}

/// Glyphs available to menu entries and sidebar chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Grid,
    PieChart,
    Table,
    List,
    Page,
    Calendar,
    UserCircle,
    ChevronDown,
    HorizontalDots,
}

impl Icon {
    /// SVG path data on a 24x24 view box.
    pub fn path(self) -> &'static str {
        match self {
            Icon::Grid => "M3 3h8v8H3V3zm10 0h8v8h-8V3zM3 13h8v8H3v-8zm10 0h8v8h-8v-8z",
            Icon::PieChart => "M11 2v20c-5.07-.5-9-4.79-9-10s3.93-9.5 9-10zm2.03 0v8.99H22c-.47-4.74-4.24-8.52-8.97-8.99zm0 11.01V22c4.74-.47 8.5-4.25 8.97-8.99h-8.97z",
            Icon::Table => "M3 3h18v18H3V3zm2 2v4h6V5H5zm8 0v4h6V5h-6zm-8 6v8h6v-8H5zm8 0v8h6v-8h-6z",
            Icon::List => "M3 13h2v-2H3v2zm0 4h2v-2H3v2zm0-8h2V7H3v2zm4 4h14v-2H7v2zm0 4h14v-2H7v2zM7 7v2h14V7H7z",
            Icon::Page => "M14 2H6c-1.1 0-2 .9-2 2v16c0 1.1.9 2 2 2h12c1.1 0 2-.9 2-2V8l-6-6zm2 16H8v-2h8v2zm0-4H8v-2h8v2zm-3-5V3.5L18.5 9H13z",
            Icon::Calendar => "M19 4h-1V2h-2v2H8V2H6v2H5c-1.1 0-2 .9-2 2v14c0 1.1.9 2 2 2h14c1.1 0 2-.9 2-2V6c0-1.1-.9-2-2-2zm0 16H5V9h14v11z",
            Icon::UserCircle => "M12 2C6.48 2 2 6.48 2 12s4.48 10 10 10 10-4.48 10-10S17.52 2 12 2zm0 4c1.93 0 3.5 1.57 3.5 3.5S13.93 13 12 13s-3.5-1.57-3.5-3.5S10.07 6 12 6zm0 14c-2.03 0-4.43-.82-6.14-2.88C7.55 15.8 9.68 15 12 15s4.45.8 6.14 2.12C16.43 19.18 14.03 20 12 20z",
            Icon::ChevronDown => "M7.41 8.59 12 13.17l4.59-4.58L18 10l-6 6-6-6 1.41-1.41z",
            Icon::HorizontalDots => "M6 10c-1.1 0-2 .9-2 2s.9 2 2 2 2-.9 2-2-.9-2-2-2zm12 0c-1.1 0-2 .9-2 2s.9 2 2 2 2-.9 2-2-.9-2-2-2zm-6 0c-1.1 0-2 .9-2 2s.9 2 2 2 2-.9 2-2-.9-2-2-2z",
        }
    }
}

/// A row inside an expandable submenu.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SubItem {
    pub name: String,
    pub path: String,
    #[serde(default)]
    pub pro: bool,
    #[serde(default)]
    pub new: bool,
}

/// One top-level sidebar entry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NavItem {
    pub name: String,
    pub icon: Icon,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub sub_items: Option<Vec<SubItem>>,
}

/// What activating an entry does.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavTarget<'a> {
    Link(&'a str),
    Submenu(&'a [SubItem]),
}

impl NavItem {
    /// Entries with sub-items render as a toggle, everything else as a link.
    /// An entry missing both links nowhere and never matches a route.
    pub fn target(&self) -> NavTarget<'_> {
        match (&self.sub_items, &self.path) {
            (Some(subs), _) => NavTarget::Submenu(subs),
            (None, Some(path)) => NavTarget::Link(path),
            (None, None) => NavTarget::Link(""),
        }
    }
}

/// The full navigation menu, grouped by section.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NavMenu {
    #[serde(default)]
    pub main: Vec<NavItem>,
}

impl NavMenu {
    pub fn section(&self, kind: MenuKind) -> &[NavItem] {
        match kind {
            MenuKind::Main => &self.main,
        }
    }
}
