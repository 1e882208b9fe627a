// crates/vitrine-app/src/dom.rs
// Thin helpers over web-sys: lookups, classes, inline styles, listeners

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, NodeList, Window};

use crate::error::AppError;

pub fn window() -> Result<Window, AppError> {
    web_sys::window().ok_or(AppError::NoWindow)
}

pub fn document() -> Result<Document, AppError> {
    window()?.document().ok_or(AppError::NoDocument)
}

fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Every element in the document matching `selector`, in document order
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, AppError> {
    Ok(elements(document.query_selector_all(selector)?))
}

/// Every descendant of `root` matching `selector`
pub fn query_all_in(root: &Element, selector: &str) -> Result<Vec<Element>, AppError> {
    Ok(elements(root.query_selector_all(selector)?))
}

pub fn set_class(element: &Element, class: &str, on: bool) -> Result<(), AppError> {
    let list = element.class_list();
    if on {
        list.add_1(class)?;
    } else {
        list.remove_1(class)?;
    }
    Ok(())
}

/// Set an inline style property; an empty value clears it
pub fn set_style(element: &Element, property: &str, value: &str) -> Result<(), AppError> {
    // Only HTML elements carry an inline style declaration
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        html.style().set_property(property, value)?;
    }
    Ok(())
}

/// Log and drop a DOM write failure
pub fn report(what: &str, result: Result<(), AppError>) {
    if let Err(e) = result {
        log::warn!("Failed to {}: {}", what, e);
    }
}

/// An attached event listener; dropping it detaches the listener
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self, AppError>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;

        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let callback = self.callback.as_ref().unchecked_ref();
        let _ = self.target.remove_event_listener_with_callback(self.event, callback);
    }
}
