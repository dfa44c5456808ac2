//! TOML loading for the sidebar menu.
//!
//! - `default_menu()` - Loads the menu embedded at compile time
//! - `parse_menu(source)` - Parses and validates any TOML menu document

use crate::error::MenuError;

use super::types::{NavItem, NavMenu};

/// Default menu embedded in the binary at compile time.
const DEFAULT_MENU: &str = include_str!("../../config/sidebar_menu.toml");

/// Parse a TOML menu document and check the model invariants.
pub fn parse_menu(source: &str) -> Result<NavMenu, MenuError> {
    let menu: NavMenu = toml::from_str(source)?;
    menu.validate()?;
    Ok(menu)
}

/// Load the menu embedded from `config/sidebar_menu.toml`.
pub fn default_menu() -> Result<NavMenu, MenuError> {
    parse_menu(DEFAULT_MENU)
}

impl NavMenu {
    /// Every entry needs a name and something to do: a path, or a
    /// non-empty submenu whose rows all have paths.
    pub fn validate(&self) -> Result<(), MenuError> {
        self.main.iter().enumerate().try_for_each(|(index, item)| validate_item(index, item))
    }
}

fn validate_item(index: usize, item: &NavItem) -> Result<(), MenuError> {
    if item.name.trim().is_empty() {
        return Err(MenuError::MissingName { index });
    }

    match (&item.sub_items, &item.path) {
        (Some(subs), _) if subs.is_empty() => Err(MenuError::EmptySubmenu {
            name: item.name.clone(),
        }),
        (Some(subs), _) => match subs.iter().find(|s| s.path.trim().is_empty()) {
            Some(sub) => Err(MenuError::EmptySubItemPath {
                name: item.name.clone(),
                sub_item: sub.name.clone(),
            }),
            None => Ok(()),
        },
        (None, Some(path)) if !path.trim().is_empty() => Ok(()),
        (None, _) => Err(MenuError::MissingTarget {
            name: item.name.clone(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::{Icon, NavTarget};

    #[test]
    fn test_default_menu_loads() {
        let menu = default_menu().expect("embedded menu must be valid");
        assert_eq!(menu.main.len(), 2);

        assert_eq!(menu.main[0].name, "Cartera Castigada");
        assert_eq!(menu.main[0].icon, Icon::Grid);
        assert_eq!(menu.main[0].target(), NavTarget::Link("/"));

        assert_eq!(menu.main[1].name, "Reportes y Análisis");
        assert_eq!(menu.main[1].icon, Icon::PieChart);
        assert_eq!(menu.main[1].target(), NavTarget::Link("/resumen"));
    }

    #[test]
    fn test_default_menu_has_no_submenus() {
        let menu = default_menu().unwrap();
        assert!(menu.main.iter().all(|item| item.sub_items.is_none()));
    }

    #[test]
    fn test_sub_item_flags_default_to_false() {
        let menu = parse_menu(
            r#"
            [[main]]
            name = "Reportes"
            icon = "table"

            [[main.sub_items]]
            name = "Mensual"
            path = "/reportes/mensual"

            [[main.sub_items]]
            name = "Anual"
            path = "/reportes/anual"
            pro = true
            new = true
            "#,
        )
        .unwrap();

        let subs = menu.main[0].sub_items.as_ref().unwrap();
        assert!(!subs[0].pro && !subs[0].new);
        assert!(subs[1].pro && subs[1].new);
        assert!(matches!(menu.main[0].target(), NavTarget::Submenu(s) if s.len() == 2));
    }

    #[test]
    fn test_entry_without_target_is_rejected() {
        let err = parse_menu(
            r#"
            [[main]]
            name = "Huérfano"
            icon = "page"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, MenuError::MissingTarget { ref name } if name == "Huérfano"));
    }

    #[test]
    fn test_empty_submenu_is_rejected() {
        let err = parse_menu(
            r#"
            [[main]]
            name = "Vacío"
            icon = "list"
            path = "/vacio"
            sub_items = []
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, MenuError::EmptySubmenu { .. }));
    }

    #[test]
    fn test_blank_name_and_sub_path_are_rejected() {
        let err = parse_menu(
            r#"
            [[main]]
            name = "  "
            icon = "grid"
            path = "/"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, MenuError::MissingName { index: 0 }));

        let err = parse_menu(
            r#"
            [[main]]
            name = "Calendario"
            icon = "calendar"

            [[main.sub_items]]
            name = "Hoy"
            path = ""
            "#,
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Sub-item 'Hoy' of 'Calendario' has an empty path"
        );
    }

    #[test]
    fn test_unknown_icon_is_a_parse_error() {
        let err = parse_menu(
            r#"
            [[main]]
            name = "Raro"
            icon = "rocket"
            path = "/raro"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, MenuError::Parse(_)));
    }
}
