// crates/vitrine-app/src/lib.rs
// Vitrine - WASM behaviors for the marketing site
// Binds to the server-rendered markup; nothing is rendered from Rust

mod carousel;
mod counter;
mod dom;
mod error;
mod form;
mod lazy;
mod menu;
mod scroll;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use web_sys::Document;
use vitrine_core::SiteConfig;

pub use carousel::CarouselController;
pub use counter::CounterAnimation;
pub use error::AppError;
pub use lazy::LazyImages;
pub use menu::MenuController;

use dom::Listener;

const CONFIG_ELEMENT_ID: &str = "vitrine-config";

/// Everything bound to the page; lives until the page unloads
#[derive(Default)]
struct Site {
    carousels: Vec<CarouselController>,
    menu: Option<MenuController>,
    counters: Option<CounterAnimation>,
    lazy: Option<LazyImages>,
    listeners: Vec<Listener>,
}

thread_local! {
    static SITE: RefCell<Site> = RefCell::new(Site::default());
}

fn keep<F: FnOnce(&mut Site)>(f: F) {
    SITE.with(|site| f(&mut site.borrow_mut()));
}

/// Log a feature that failed to bind; the others carry on
fn bound<T>(feature: &str, result: Result<T, AppError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("Skipping {}: {}", feature, e);
            None
        }
    }
}

#[wasm_bindgen(start)]
pub fn main() {
    // Better panic messages in the browser console
    console_error_panic_hook::set_once();

    // Initialize logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("Vitrine starting...");

    if let Err(e) = start() {
        log::error!("Vitrine failed to start: {}", e);
    }
}

fn start() -> Result<(), AppError> {
    let document = dom::document()?;

    if let Some(body) = document.body() {
        body.class_list().add_1("loading")?;
    }

    // Images don't wait for the rest of the page
    if let Some(lazy) = bound("lazy images", LazyImages::bind(&document)).flatten() {
        keep(|site| site.lazy = Some(lazy));
    }

    if document.ready_state() == "loading" {
        let doc = document.clone();
        let listener = Listener::new(&document, "DOMContentLoaded", move |_| boot(&doc))?;
        keep(|site| site.listeners.push(listener));
    } else {
        boot(&document);
    }

    Ok(())
}

/// Read the optional JSON config block
fn load_config(document: &Document) -> Result<Option<SiteConfig>, AppError> {
    let Some(element) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
        return Ok(None);
    };
    let json = element.text_content().unwrap_or_default();
    Ok(Some(SiteConfig::from_json(&json)?))
}

fn boot(document: &Document) {
    let config = match load_config(document) {
        Ok(Some(config)) => {
            log::info!("Using page config from #{}", CONFIG_ELEMENT_ID);
            config
        }
        Ok(None) => SiteConfig::default(),
        Err(e) => {
            log::warn!("Ignoring page config: {}", e);
            SiteConfig::default()
        }
    };

    for mount in &config.carousels {
        let bound_carousel = bound(
            "carousel",
            CarouselController::bind(document, mount, config.transition_delay_ms),
        );
        if let Some(carousel) = bound_carousel.flatten() {
            log::debug!("Carousel {} at slide {}", mount.container, carousel.current());
            keep(|site| site.carousels.push(carousel));
        }
    }

    let menu = bound("mobile menu", MenuController::bind(document, &config.menu));
    if let Some(menu) = menu.flatten() {
        keep(|site| site.menu = Some(menu));
    }

    if let Some(counters) =
        bound("counter animation", CounterAnimation::bind(document, &config.counters)).flatten()
    {
        keep(|site| site.counters = Some(counters));
    }

    if let Some(listeners) = bound("smooth scroll", scroll::bind_smooth_scroll(document)) {
        keep(|site| site.listeners.extend(listeners));
    }

    let header = dom::window()
        .and_then(|window| scroll::bind_header_scroll(&window, document, &config.header));
    if let Some(listener) = bound("header scroll", header).flatten() {
        keep(|site| site.listeners.push(listener));
    }

    let forms = form::bind_form_validation(document, &config.form);
    if let Some(listeners) = bound("form validation", forms) {
        keep(|site| site.listeners.extend(listeners));
    }

    if let Some(body) = document.body() {
        dom::report("mark page loaded", dom::set_class(&body, "loaded", true));
    }

    SITE.with(|site| {
        let site = site.borrow();
        log::info!(
            "Vitrine ready: {} carousels, menu {}, counters {}, lazy images {}, {} listeners",
            site.carousels.len(),
            site.menu.is_some(),
            site.counters.is_some(),
            site.lazy.is_some(),
            site.listeners.len()
        );
    });
}
