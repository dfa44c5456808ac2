//! Open-submenu tracking and submenu height caching.
//!
//! At most one submenu is open at a time. The open submenu follows the
//! current route whenever it changes and is toggled accordion-style by clicks.

use std::collections::HashMap;

use crate::menu::{MenuKind, NavMenu, NavTarget};

/// Identifies one expandable entry: its menu section and index within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubmenuKey {
    pub kind: MenuKind,
    pub index: usize,
}

impl SubmenuKey {
    pub fn main(index: usize) -> Self {
        Self {
            kind: MenuKind::Main,
            index,
        }
    }

    /// Stable element id for the submenu container, e.g. `"main-0"`.
    pub fn dom_id(&self) -> String {
        format!("{}-{}", self.kind.as_str(), self.index)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OpenSubmenu {
    #[default]
    Closed,
    OpenAt(SubmenuKey),
}

/// Inputs that move the tracker between states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmenuEvent<'a> {
    RouteChanged(&'a str),
    Toggled(SubmenuKey),
}

impl OpenSubmenu {
    /// The submenu owning a sub-item whose path equals `path`, if any.
    /// The first matching entry in list order wins.
    pub fn for_route(menu: &NavMenu, path: &str) -> Self {
        let kind = MenuKind::Main;
        menu.section(kind)
            .iter()
            .enumerate()
            .find_map(|(index, item)| match item.target() {
                NavTarget::Submenu(subs) if subs.iter().any(|s| s.path == path) => {
                    Some(OpenSubmenu::OpenAt(SubmenuKey { kind, index }))
                }
                _ => None,
            })
            .unwrap_or(OpenSubmenu::Closed)
    }

    /// Clicking the open entry closes it; clicking any other entry opens
    /// that one instead.
    pub fn toggled(self, key: SubmenuKey) -> Self {
        match self {
            OpenSubmenu::OpenAt(open) if open == key => OpenSubmenu::Closed,
            _ => OpenSubmenu::OpenAt(key),
        }
    }

    pub fn apply(self, menu: &NavMenu, event: SubmenuEvent<'_>) -> Self {
        match event {
            SubmenuEvent::RouteChanged(path) => Self::for_route(menu, path),
            SubmenuEvent::Toggled(key) => self.toggled(key),
        }
    }

    pub fn key(self) -> Option<SubmenuKey> {
        match self {
            OpenSubmenu::Closed => None,
            OpenSubmenu::OpenAt(key) => Some(key),
        }
    }

    pub fn is_open(self, key: SubmenuKey) -> bool {
        self.key() == Some(key)
    }
}

/// Measured natural heights of submenu containers, in pixels.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmenuHeights {
    heights: HashMap<SubmenuKey, i32>,
}

impl SubmenuHeights {
    pub fn record(&mut self, key: SubmenuKey, px: i32) {
        self.heights.insert(key, px.max(0));
    }

    /// Store the result of measuring an open container. A container that is
    /// not mounted yet has no measurement and is stored as 0.
    pub fn record_measurement(&mut self, key: SubmenuKey, measured: Option<i32>) {
        self.record(key, measured.unwrap_or(0));
    }

    pub fn get(&self, key: SubmenuKey) -> Option<i32> {
        self.heights.get(&key).copied()
    }

    /// Height the container should transition to: its measured height while
    /// open, 0 otherwise. Unmeasured containers stay at 0.
    pub fn height_for(&self, key: SubmenuKey, open: bool) -> i32 {
        if open {
            self.get(key).unwrap_or(0)
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::{default_menu, parse_menu};

    /// Link, submenu, link, submenu.
    fn synthetic_menu() -> NavMenu {
        parse_menu(
            r#"
            [[main]]
            name = "Cartera Castigada"
            icon = "grid"
            path = "/"

            [[main]]
            name = "Reportes"
            icon = "table"

            [[main.sub_items]]
            name = "Mensual"
            path = "/reportes/mensual"

            [[main.sub_items]]
            name = "Anual"
            path = "/reportes/anual"
            new = true

            [[main]]
            name = "Reportes y Análisis"
            icon = "pie-chart"
            path = "/resumen"

            [[main]]
            name = "Gestión"
            icon = "calendar"

            [[main.sub_items]]
            name = "Agenda"
            path = "/gestion/agenda"
            pro = true
            "#,
        )
        .unwrap()
    }

    #[test]
    fn test_route_matching_sub_item_opens_its_entry() {
        let menu = synthetic_menu();
        assert_eq!(
            OpenSubmenu::for_route(&menu, "/reportes/anual"),
            OpenSubmenu::OpenAt(SubmenuKey::main(1))
        );
        assert_eq!(
            OpenSubmenu::for_route(&menu, "/gestion/agenda"),
            OpenSubmenu::OpenAt(SubmenuKey::main(3))
        );
    }

    #[test]
    fn test_route_matching_nothing_clears() {
        let menu = synthetic_menu();
        let open = OpenSubmenu::OpenAt(SubmenuKey::main(3));
        // "/resumen" is a direct link, not a sub-item
        assert_eq!(
            open.apply(&menu, SubmenuEvent::RouteChanged("/resumen")),
            OpenSubmenu::Closed
        );
        assert_eq!(
            open.apply(&menu, SubmenuEvent::RouteChanged("/no-existe")),
            OpenSubmenu::Closed
        );
    }

    #[test]
    fn test_route_change_overrides_manual_toggle() {
        let menu = synthetic_menu();
        let state = OpenSubmenu::Closed
            .apply(&menu, SubmenuEvent::Toggled(SubmenuKey::main(3)))
            .apply(&menu, SubmenuEvent::RouteChanged("/reportes/mensual"));
        assert_eq!(state, OpenSubmenu::OpenAt(SubmenuKey::main(1)));
    }

    #[test]
    fn test_toggle_open_close_replace() {
        let first = SubmenuKey::main(1);
        let second = SubmenuKey::main(3);

        let opened = OpenSubmenu::Closed.toggled(first);
        assert_eq!(opened, OpenSubmenu::OpenAt(first));

        let replaced = opened.toggled(second);
        assert_eq!(replaced, OpenSubmenu::OpenAt(second));
        assert!(!replaced.is_open(first));

        let closed = replaced.toggled(second);
        assert_eq!(closed, OpenSubmenu::Closed);
        assert_eq!(closed.key(), None);
    }

    #[test]
    fn test_static_menu_never_opens_a_submenu() {
        let menu = default_menu().unwrap();
        for path in ["/", "/resumen", "/otro"] {
            assert_eq!(OpenSubmenu::for_route(&menu, path), OpenSubmenu::Closed);
        }
    }

    #[test]
    fn test_dom_id_uses_menu_kind_tag() {
        assert_eq!(SubmenuKey::main(4).dom_id(), "main-4");
    }

    #[test]
    fn test_navigation_then_clicks_go_through_apply() {
        let menu = synthetic_menu();
        let events = [
            SubmenuEvent::RouteChanged("/"),
            SubmenuEvent::Toggled(SubmenuKey::main(1)),
            SubmenuEvent::Toggled(SubmenuKey::main(1)),
            SubmenuEvent::RouteChanged("/gestion/agenda"),
            SubmenuEvent::Toggled(SubmenuKey::main(1)),
        ];
        let states: Vec<_> = events
            .iter()
            .scan(OpenSubmenu::Closed, |state, event| {
                *state = state.apply(&menu, *event);
                Some(*state)
            })
            .collect();

        assert_eq!(
            states,
            vec![
                OpenSubmenu::Closed,
                OpenSubmenu::OpenAt(SubmenuKey::main(1)),
                OpenSubmenu::Closed,
                OpenSubmenu::OpenAt(SubmenuKey::main(3)),
                OpenSubmenu::OpenAt(SubmenuKey::main(1)),
            ]
        );
    }

    #[test]
    fn test_unmounted_container_measures_zero() {
        let key = SubmenuKey::main(1);
        let mut heights = SubmenuHeights::default();

        heights.record_measurement(key, None);
        assert_eq!(heights.get(key), Some(0));
        assert_eq!(heights.height_for(key, true), 0);

        heights.record_measurement(key, Some(88));
        assert_eq!(heights.height_for(key, true), 88);

        // A later detached measurement falls back to 0 rather than keeping a stale height
        heights.record_measurement(key, None);
        assert_eq!(heights.height_for(key, true), 0);
    }

    #[test]
    fn test_heights_follow_open_state() {
        let key = SubmenuKey::main(1);
        let other = SubmenuKey::main(3);
        let mut heights = SubmenuHeights::default();

        assert_eq!(heights.height_for(key, true), 0);

        heights.record(key, 96);
        assert_eq!(heights.get(key), Some(96));
        assert_eq!(heights.height_for(key, true), 96);
        assert_eq!(heights.height_for(key, false), 0);
        assert_eq!(heights.height_for(other, true), 0);

        // Re-measuring replaces the cached value
        heights.record(key, 140);
        assert_eq!(heights.height_for(key, true), 140);
    }
}
