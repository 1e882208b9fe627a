// crates/vitrine-core/tests/menu_scenarios.rs
// Mobile menu driven through an in-memory style map

use std::collections::HashMap;

use vitrine_core::menu::{LIST_OPEN_STYLES, NAV_OPEN_STYLES};
use vitrine_core::{MenuSurface, MobileMenu, StyleTarget};

#[derive(Debug, Default, Clone, PartialEq)]
struct Panel {
    styles: HashMap<(StyleTarget, String), String>,
    toggle_active: bool,
    expanded: Option<String>,
}

impl Panel {
    fn style(&self, target: StyleTarget, property: &str) -> &str {
        self.styles
            .get(&(target, property.to_string()))
            .map(String::as_str)
            .unwrap_or("")
    }
}

impl MenuSurface for Panel {
    fn set_style(&mut self, target: StyleTarget, property: &str, value: &str) {
        let key = (target, property.to_string());
        if value.is_empty() {
            self.styles.remove(&key);
        } else {
            self.styles.insert(key, value.to_string());
        }
    }

    fn set_toggle_active(&mut self, active: bool) {
        self.toggle_active = active;
    }

    fn set_expanded(&mut self, expanded: bool) {
        self.expanded = Some(expanded.to_string());
    }
}

#[test]
fn test_open_then_close_restores_every_property() {
    let mut menu = MobileMenu::new(Panel::default());
    let before = menu.surface().styles.clone();

    menu.open();
    assert_eq!(menu.surface().style(StyleTarget::Nav, "display"), "block");
    assert_eq!(menu.surface().style(StyleTarget::Nav, "position"), "absolute");
    assert_eq!(
        menu.surface().style(StyleTarget::Nav, "box-shadow"),
        "0 4px 8px -2px rgba(0, 87, 183, 0.08)"
    );
    assert_eq!(menu.surface().style(StyleTarget::List, "flex-direction"), "column");
    assert_eq!(menu.surface().expanded.as_deref(), Some("true"));
    assert!(menu.surface().toggle_active);

    menu.close();
    assert_eq!(menu.surface().styles, before);
    for (property, _) in NAV_OPEN_STYLES {
        assert_eq!(menu.surface().style(StyleTarget::Nav, property), "");
    }
    for (property, _) in LIST_OPEN_STYLES {
        assert_eq!(menu.surface().style(StyleTarget::List, property), "");
    }
    assert_eq!(menu.surface().expanded.as_deref(), Some("false"));
    assert!(!menu.surface().toggle_active);
}

#[test]
fn test_outside_click_and_escape_close() {
    let mut menu = MobileMenu::new(Panel::default());

    menu.toggle();
    assert!(menu.on_document_click(false));
    assert!(menu.surface().styles.is_empty());

    menu.toggle();
    menu.on_document_click(true);
    assert!(menu.is_open());
    assert!(menu.on_key("Escape"));
    assert!(!menu.is_open());
}
