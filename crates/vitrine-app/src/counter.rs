// crates/vitrine-app/src/counter.rs
// Statistics count-up, fired once when the stats grid scrolls into view

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};
use vitrine_core::counter::parse_target;
use vitrine_core::{CounterConfig, CounterRamp, OneShot};

use crate::dom;
use crate::error::AppError;

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

pub struct CounterAnimation {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl CounterAnimation {
    /// Observe the stats section. Returns None when the page has none.
    pub fn bind(document: &Document, config: &CounterConfig) -> Result<Option<Self>, AppError> {
        let Some(section) = document.query_selector(&config.section)? else {
            log::debug!("No {}, counter animation skipped", config.section);
            return Ok(None);
        };

        let counters: Vec<(Element, i64)> = dom::query_all(document, &config.selector)?
            .into_iter()
            .filter_map(|element| {
                let raw = element.get_attribute("data-count").unwrap_or_default();
                match parse_target(&raw) {
                    Some(target) => Some((element, target)),
                    None => {
                        log::debug!("Counter without numeric data-count: {:?}", raw);
                        None
                    }
                }
            })
            .collect();

        let duration_ms = config.duration_ms;
        let frame_ms = config.frame_ms;
        let mut once = OneShot::new();
        let mut pending = Some(counters);

        let callback: ObserverCallback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                let visible = entries.iter().any(|entry| {
                    entry
                        .dyn_into::<IntersectionObserverEntry>()
                        .map(|entry| entry.is_intersecting())
                        .unwrap_or(false)
                });
                // Guard and disconnect in the same turn
                if !visible || !once.try_fire() {
                    return;
                }
                observer.disconnect();

                if let Some(counters) = pending.take() {
                    log::debug!("Stats visible, animating {} counters", counters.len());
                    for (element, target) in counters {
                        animate(element, CounterRamp::new(target, duration_ms, frame_ms));
                    }
                }
            },
        ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(config.threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        observer.observe(&section);

        Ok(Some(Self {
            observer,
            _callback: callback,
        }))
    }
}

impl Drop for CounterAnimation {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

type FrameCallback = Closure<dyn FnMut(f64)>;

/// Drive one counter's ramp, one step per animation frame
fn animate(element: Element, mut ramp: CounterRamp) {
    // First step runs right away, the rest on animation frames
    let step = ramp.step();
    element.set_text_content(Some(&step.value().to_string()));
    if step.is_done() {
        return;
    }

    let frame: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
    let handle = frame.clone();

    *handle.borrow_mut() = Some(Closure::wrap(Box::new(move |_timestamp: f64| {
        let step = ramp.step();
        element.set_text_content(Some(&step.value().to_string()));
        if step.is_done() {
            // Drop our own closure; it is cleaned up once this call returns
            let _ = frame.borrow_mut().take();
            return;
        }
        request_frame(&frame);
    }) as Box<dyn FnMut(f64)>));

    request_frame(&handle);
}

fn request_frame(frame: &Rc<RefCell<Option<FrameCallback>>>) {
    let frame = frame.borrow();
    let Some(callback) = frame.as_ref() else {
        return;
    };
    let requested = dom::window().and_then(|window| {
        window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .map_err(AppError::from)
    });
    if let Err(e) = requested {
        log::warn!("Failed to request animation frame: {}", e);
    }
}
