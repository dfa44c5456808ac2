//! Pure rendering rules for the sidebar.
//!
//! `SidebarSnapshot` is the plain description of the tree the `Sidebar`
//! component renders: it rebuilds the snapshot reactively and reads labels,
//! highlight, chevron and sub-entry rows from it.

use crate::layout::LayoutFlags;
use crate::menu::{Icon, MenuKind, NavItem, NavMenu, NavTarget, SubItem};
use crate::submenu::{OpenSubmenu, SubmenuHeights, SubmenuKey};

pub const LOGO_FULL: &str = "/images/logo/logo.svg";
pub const LOGO_ICON: &str = "/images/logo/logo-icon.svg";

/// Exact match; an empty path never matches.
pub fn is_active_path(path: &str, current: &str) -> bool {
    !path.is_empty() && path == current
}

/// Link entries highlight on their route, toggle entries while open.
pub fn entry_highlighted(item: &NavItem, key: SubmenuKey, open: OpenSubmenu, current: &str) -> bool {
    match item.target() {
        NavTarget::Link(path) => is_active_path(path, current),
        NavTarget::Submenu(_) => open.is_open(key),
    }
}

pub fn sidebar_class(flags: LayoutFlags) -> String {
    let mut class = String::from("sidebar");
    class.push_str(if flags.shows_labels() {
        " sidebar-wide"
    } else {
        " sidebar-narrow"
    });
    if flags.mobile_open {
        class.push_str(" sidebar-mobile-open");
    }
    class
}

pub fn brand_logo(flags: LayoutFlags) -> &'static str {
    if flags.shows_labels() {
        LOGO_FULL
    } else {
        LOGO_ICON
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    New,
    Pro,
}

impl Badge {
    pub fn label(self) -> &'static str {
        match self {
            Badge::New => "new",
            Badge::Pro => "pro",
        }
    }
}

pub fn badges(sub: &SubItem) -> Vec<Badge> {
    let mut out = Vec::new();
    if sub.new {
        out.push(Badge::New);
    }
    if sub.pro {
        out.push(Badge::Pro);
    }
    out
}

/// Inline `height` for a submenu container.
pub fn submenu_height_style(heights: &SubmenuHeights, key: SubmenuKey, open: bool) -> String {
    format!("{}px", heights.height_for(key, open))
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubEntrySnapshot {
    pub label: String,
    pub href: String,
    pub active: bool,
    pub badges: Vec<Badge>,
}

impl SubEntrySnapshot {
    pub fn build(sub: &SubItem, current: &str) -> Self {
        Self {
            label: sub.name.clone(),
            href: sub.path.clone(),
            active: is_active_path(&sub.path, current),
            badges: badges(sub),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ControlSnapshot {
    Link {
        href: String,
    },
    Toggle {
        /// `Some(rotated)` when the chevron is shown.
        chevron: Option<bool>,
        height_key: SubmenuKey,
        /// `None` when the submenu list is not rendered at all.
        sub_entries: Option<Vec<SubEntrySnapshot>>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct EntrySnapshot {
    pub icon: Icon,
    pub label: Option<String>,
    pub highlighted: bool,
    pub control: ControlSnapshot,
}

impl EntrySnapshot {
    /// Labels, chevron and sub-entry rows exist only in the wide sidebar.
    pub fn build(item: &NavItem, key: SubmenuKey, open: OpenSubmenu, current: &str, wide: bool) -> Self {
        let control = match item.target() {
            NavTarget::Link(path) => ControlSnapshot::Link {
                href: path.to_string(),
            },
            NavTarget::Submenu(subs) => ControlSnapshot::Toggle {
                chevron: wide.then(|| open.is_open(key)),
                height_key: key,
                sub_entries: wide
                    .then(|| subs.iter().map(|sub| SubEntrySnapshot::build(sub, current)).collect()),
            },
        };

        Self {
            icon: item.icon,
            label: wide.then(|| item.name.clone()),
            highlighted: entry_highlighted(item, key, open, current),
            control,
        }
    }

    pub fn chevron(&self) -> Option<bool> {
        match &self.control {
            ControlSnapshot::Toggle { chevron, .. } => *chevron,
            ControlSnapshot::Link { .. } => None,
        }
    }

    pub fn sub_entries(&self) -> Option<&[SubEntrySnapshot]> {
        match &self.control {
            ControlSnapshot::Toggle { sub_entries, .. } => sub_entries.as_deref(),
            ControlSnapshot::Link { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SidebarSnapshot {
    pub class: String,
    pub logo: &'static str,
    /// Section heading text, or `None` when only the dots glyph shows.
    pub heading: Option<&'static str>,
    pub entries: Vec<EntrySnapshot>,
}

impl SidebarSnapshot {
    pub fn build(menu: &NavMenu, open: OpenSubmenu, current: &str, flags: LayoutFlags) -> Self {
        let wide = flags.shows_labels();
        let entries = menu
            .section(MenuKind::Main)
            .iter()
            .enumerate()
            .map(|(index, item)| EntrySnapshot::build(item, SubmenuKey::main(index), open, current, wide))
            .collect();

        Self {
            class: sidebar_class(flags),
            logo: brand_logo(flags),
            heading: wide.then_some("Menu"),
            entries,
        }
    }
}
