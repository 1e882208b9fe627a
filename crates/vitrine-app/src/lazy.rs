// crates/vitrine-app/src/lazy.rs
// Deferred image sources, swapped in on first intersection

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlImageElement, IntersectionObserver, IntersectionObserverEntry};
use vitrine_core::OneShot;

use crate::dom;
use crate::error::AppError;

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

pub struct LazyImages {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl LazyImages {
    pub fn bind(document: &Document) -> Result<Option<Self>, AppError> {
        let images = dom::query_all(document, "img[data-src]")?;
        if images.is_empty() {
            return Ok(None);
        }
        log::debug!("Lazy loading {} images", images.len());

        let mut loaded: Vec<(Element, OneShot)> = images
            .iter()
            .map(|image| (image.clone(), OneShot::new()))
            .collect();

        let callback: ObserverCallback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !entry.is_intersecting() {
                        continue;
                    }

                    let target = entry.target();
                    let found = loaded.iter_mut().find(|(image, _)| *image == target);
                    let Some((_, once)) = found else {
                        continue;
                    };
                    if !once.try_fire() {
                        continue;
                    }
                    observer.unobserve(&target);
                    reveal(&target);
                }
            },
        ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref())?;
        for image in &images {
            observer.observe(image);
        }

        Ok(Some(Self {
            observer,
            _callback: callback,
        }))
    }
}

impl Drop for LazyImages {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn reveal(target: &Element) {
    let Some(image) = target.dyn_ref::<HtmlImageElement>() else {
        return;
    };
    if let Some(src) = image.get_attribute("data-src") {
        image.set_src(&src);
    }
    dom::report("clear lazy class", dom::set_class(image, "lazy", false));
}
