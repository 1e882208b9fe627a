// crates/vitrine-app/src/scroll.rs
// Smooth anchor scrolling and the header scroll effect

use web_sys::{Document, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Window};
use vitrine_core::anchor::fragment_id;
use vitrine_core::{HeaderConfig, HeaderStyle};

use crate::dom::{self, Listener};
use crate::error::AppError;

/// Same-page links scroll smoothly instead of jumping
pub fn bind_smooth_scroll(document: &Document) -> Result<Vec<Listener>, AppError> {
    let anchors = dom::query_all(document, "a[href^=\"#\"]")?;
    let mut listeners = Vec::with_capacity(anchors.len());

    for anchor in anchors {
        let doc = document.clone();
        let link = anchor.clone();
        listeners.push(Listener::new(&anchor, "click", move |event| {
            event.prevent_default();

            let href = link.get_attribute("href").unwrap_or_default();
            let Some(target) = fragment_id(&href).and_then(|id| doc.get_element_by_id(id)) else {
                return;
            };

            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        })?);
    }

    Ok(listeners)
}

fn scroll_offset(window: &Window, document: &Document) -> f64 {
    match window.scroll_y() {
        Ok(y) => y,
        Err(_) => document
            .document_element()
            .map(|root| f64::from(root.scroll_top()))
            .unwrap_or(0.0),
    }
}

/// Header turns translucent and blurred once the page is scrolled
pub fn bind_header_scroll(
    window: &Window,
    document: &Document,
    config: &HeaderConfig,
) -> Result<Option<Listener>, AppError> {
    let Some(header) = document.query_selector(&config.selector)? else {
        log::debug!("No {}, header scroll effect skipped", config.selector);
        return Ok(None);
    };

    let win = window.clone();
    let doc = document.clone();
    let config = config.clone();
    let listener = Listener::new(window, "scroll", move |_| {
        let style = HeaderStyle::for_scroll(scroll_offset(&win, &doc), &config);
        dom::report(
            "update header background",
            dom::set_style(&header, "background-color", style.background_color),
        );
        dom::report(
            "update header backdrop",
            dom::set_style(&header, "backdrop-filter", style.backdrop_filter),
        );
    })?;

    Ok(Some(listener))
}
