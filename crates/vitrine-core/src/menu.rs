// crates/vitrine-core/src/menu.rs
// Mobile navigation toggle

/// Inline overrides applied to the nav panel when opened
pub const NAV_OPEN_STYLES: &[(&str, &str)] = &[
    ("display", "block"),
    ("position", "absolute"),
    ("top", "80px"),
    ("left", "0"),
    ("right", "0"),
    ("background-color", "#FFFFFF"),
    ("border-bottom", "1px solid #E5E7EB"),
    ("padding", "16px 24px"),
    ("box-shadow", "0 4px 8px -2px rgba(0, 87, 183, 0.08)"),
];

/// Inline overrides applied to the panel's inner list when opened
pub const LIST_OPEN_STYLES: &[(&str, &str)] = &[("flex-direction", "column"), ("gap", "16px")];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleTarget {
    Nav,
    List,
}

/// The elements a mobile menu writes to
pub trait MenuSurface {
    /// An empty `value` clears the inline property
    fn set_style(&mut self, target: StyleTarget, property: &str, value: &str);
    fn set_toggle_active(&mut self, active: bool);
    fn set_expanded(&mut self, expanded: bool);
}

#[derive(Debug)]
pub struct MobileMenu<S> {
    surface: S,
    open: bool,
}

impl<S: MenuSurface> MobileMenu<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            open: false,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open();
        }
    }

    pub fn open(&mut self) {
        for (property, value) in NAV_OPEN_STYLES {
            self.surface.set_style(StyleTarget::Nav, property, value);
        }
        for (property, value) in LIST_OPEN_STYLES {
            self.surface.set_style(StyleTarget::List, property, value);
        }

        self.surface.set_toggle_active(true);
        self.open = true;
        self.surface.set_expanded(true);
        log::debug!("Mobile menu opened");
    }

    pub fn close(&mut self) {
        // Reset property by property; the stylesheet takes over again
        for (property, _) in NAV_OPEN_STYLES {
            self.surface.set_style(StyleTarget::Nav, property, "");
        }
        for (property, _) in LIST_OPEN_STYLES {
            self.surface.set_style(StyleTarget::List, property, "");
        }

        self.surface.set_toggle_active(false);
        self.open = false;
        self.surface.set_expanded(false);
        log::debug!("Mobile menu closed");
    }

    /// Document click; `inside` is true when the target is within the
    /// panel or the toggle. Returns whether the menu closed.
    pub fn on_document_click(&mut self, inside: bool) -> bool {
        if self.open && !inside {
            self.close();
            return true;
        }
        false
    }

    /// Document keydown. Returns whether the menu closed.
    pub fn on_key(&mut self, key: &str) -> bool {
        if key == "Escape" && self.open {
            self.close();
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Calls {
        styles: Vec<(StyleTarget, String, String)>,
        active: Option<bool>,
        expanded: Option<bool>,
    }

    impl MenuSurface for Calls {
        fn set_style(&mut self, target: StyleTarget, property: &str, value: &str) {
            self.styles.push((target, property.to_string(), value.to_string()));
        }

        fn set_toggle_active(&mut self, active: bool) {
            self.active = Some(active);
        }

        fn set_expanded(&mut self, expanded: bool) {
            self.expanded = Some(expanded);
        }
    }

    #[test]
    fn test_toggle_flips_state() {
        let mut menu = MobileMenu::new(Calls::default());
        assert!(!menu.is_open());
        menu.toggle();
        assert!(menu.is_open());
        assert_eq!(menu.surface().expanded, Some(true));
        menu.toggle();
        assert!(!menu.is_open());
        assert_eq!(menu.surface().expanded, Some(false));
    }

    #[test]
    fn test_open_writes_every_override() {
        let mut menu = MobileMenu::new(Calls::default());
        menu.open();
        let styles = &menu.surface().styles;
        assert_eq!(styles.len(), NAV_OPEN_STYLES.len() + LIST_OPEN_STYLES.len());
        assert!(styles.contains(&(StyleTarget::Nav, "top".to_string(), "80px".to_string())));
        assert!(styles.contains(&(StyleTarget::List, "gap".to_string(), "16px".to_string())));
        assert_eq!(menu.surface().active, Some(true));
    }

    #[test]
    fn test_close_only_when_open() {
        let mut menu = MobileMenu::new(Calls::default());
        assert!(!menu.on_key("Escape"));
        assert!(!menu.on_document_click(false));
        assert!(menu.surface().styles.is_empty());

        menu.open();
        assert!(!menu.on_key("Enter"));
        assert!(!menu.on_document_click(true));
        assert!(menu.is_open());
        assert!(menu.on_key("Escape"));
        assert!(!menu.is_open());

        menu.open();
        assert!(menu.on_document_click(false));
        assert!(!menu.is_open());
    }
}
