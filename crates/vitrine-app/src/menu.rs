// crates/vitrine-app/src/menu.rs
// Mobile menu controller

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, KeyboardEvent, Node};
use vitrine_core::{MenuConfig, MenuSurface, MobileMenu, StyleTarget};

use crate::dom::{self, Listener};
use crate::error::AppError;

pub struct DomMenu {
    toggle: Element,
    nav: Element,
    list: Option<Element>,
}

impl DomMenu {
    /// Whether `target` is inside the panel or the toggle control
    fn contains(&self, target: Option<&Node>) -> bool {
        target.is_some() && (self.nav.contains(target) || self.toggle.contains(target))
    }
}

impl MenuSurface for DomMenu {
    fn set_style(&mut self, target: StyleTarget, property: &str, value: &str) {
        let element = match target {
            StyleTarget::Nav => &self.nav,
            StyleTarget::List => match &self.list {
                Some(list) => list,
                None => return,
            },
        };
        dom::report("update menu style", dom::set_style(element, property, value));
    }

    fn set_toggle_active(&mut self, active: bool) {
        dom::report("update menu toggle", dom::set_class(&self.toggle, "active", active));
    }

    fn set_expanded(&mut self, expanded: bool) {
        let value = if expanded { "true" } else { "false" };
        dom::report(
            "update aria-expanded",
            self.toggle.set_attribute("aria-expanded", value).map_err(Into::into),
        );
    }
}

pub struct MenuController {
    _menu: Rc<RefCell<MobileMenu<DomMenu>>>,
    _listeners: Vec<Listener>,
}

impl MenuController {
    /// Bind the mobile menu. Returns None unless both the toggle and the
    /// panel exist.
    pub fn bind(document: &Document, config: &MenuConfig) -> Result<Option<Self>, AppError> {
        let (Some(toggle), Some(nav)) = (
            document.query_selector(&config.toggle)?,
            document.query_selector(&config.nav)?,
        ) else {
            log::debug!("No {} / {}, mobile menu skipped", config.toggle, config.nav);
            return Ok(None);
        };
        let list = nav.query_selector(&config.list)?;

        let menu = Rc::new(RefCell::new(MobileMenu::new(DomMenu {
            toggle: toggle.clone(),
            nav,
            list,
        })));

        let mut listeners = Vec::new();

        let weak = Rc::downgrade(&menu);
        listeners.push(Listener::new(&toggle, "click", move |_| {
            if let Some(menu) = weak.upgrade() {
                menu.borrow_mut().toggle();
            }
        })?);

        let weak = Rc::downgrade(&menu);
        listeners.push(Listener::new(document, "click", move |event| {
            let Some(handle) = weak.upgrade() else {
                return;
            };
            let mut menu = handle.borrow_mut();
            if !menu.is_open() {
                return;
            }
            let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
            let inside = menu.surface().contains(target.as_ref());
            menu.on_document_click(inside);
        })?);

        let weak = Rc::downgrade(&menu);
        listeners.push(Listener::new(document, "keydown", move |event| {
            let (Some(menu), Some(event)) = (weak.upgrade(), event.dyn_ref::<KeyboardEvent>())
            else {
                return;
            };
            menu.borrow_mut().on_key(&event.key());
        })?);

        Ok(Some(Self {
            _menu: menu,
            _listeners: listeners,
        }))
    }
}
