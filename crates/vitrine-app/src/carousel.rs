// crates/vitrine-app/src/carousel.rs
// Carousel controller: DOM deck, transition timeout, autoplay interval

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_timers::callback::{Interval, Timeout};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, KeyboardEvent};
use vitrine_core::{CarouselMount, SlideDeck, Slideshow, Transition};

use crate::dom::{self, Listener};
use crate::error::AppError;

/// Slides and dots as found in the page
pub struct DomDeck {
    slides: Vec<Element>,
    dots: Vec<Element>,
}

impl SlideDeck for DomDeck {
    fn slide_count(&self) -> usize {
        self.slides.len()
    }

    fn dot_count(&self) -> usize {
        self.dots.len()
    }

    fn set_slide_class(&mut self, index: usize, class: &str, on: bool) {
        if let Some(slide) = self.slides.get(index) {
            dom::report("update slide class", dom::set_class(slide, class, on));
        }
    }

    fn set_dot_class(&mut self, index: usize, class: &str, on: bool) {
        if let Some(dot) = self.dots.get(index) {
            dom::report("update dot class", dom::set_class(dot, class, on));
        }
    }

    fn set_slide_attr(&mut self, index: usize, name: &str, value: &str) {
        if let Some(slide) = self.slides.get(index) {
            let result = slide.set_attribute(name, value).map_err(Into::into);
            dom::report("update slide attribute", result);
        }
    }

    fn set_dot_attr(&mut self, index: usize, name: &str, value: &str) {
        if let Some(dot) = self.dots.get(index) {
            let result = dot.set_attribute(name, value).map_err(Into::into);
            dom::report("update dot attribute", result);
        }
    }
}

type Show = Slideshow<DomDeck, Interval>;

struct State {
    show: Show,
    transition_delay_ms: u32,
}

/// A carousel bound to its container for the lifetime of the page
pub struct CarouselController {
    state: Rc<RefCell<State>>,
    _listeners: Vec<Listener>,
}

impl CarouselController {
    /// Bind the carousel described by `mount`. Returns None when the page
    /// has no slides or no container for it.
    pub fn bind(
        document: &Document,
        mount: &CarouselMount,
        transition_delay_ms: u32,
    ) -> Result<Option<Self>, AppError> {
        let slides = dom::query_all(document, &mount.slides)?;
        if slides.is_empty() {
            log::debug!("No slides for {}, carousel skipped", mount.slides);
            return Ok(None);
        }
        let Some(container) = document.query_selector(&mount.container)? else {
            log::debug!("No container {}, carousel skipped", mount.container);
            return Ok(None);
        };
        let dots = dom::query_all(document, &mount.dots)?;

        log::debug!(
            "Binding carousel {} ({} slides, {} dots, {}ms)",
            mount.container,
            slides.len(),
            dots.len(),
            mount.autoplay_ms
        );

        let deck = DomDeck {
            slides,
            dots: dots.clone(),
        };
        let state = Rc::new(RefCell::new(State {
            show: Slideshow::new(deck, mount.autoplay_ms),
            transition_delay_ms,
        }));

        let mut listeners = Vec::new();

        for (index, dot) in dots.iter().enumerate() {
            let weak = Rc::downgrade(&state);
            listeners.push(Listener::new(dot, "click", move |_| {
                navigate(&weak, |s| s.carousel_mut().go_to_slide(index));
            })?);
        }

        let weak = Rc::downgrade(&state);
        listeners.push(Listener::new(&container, "keydown", move |event| {
            if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                let key = event.key();
                navigate(&weak, |s| s.on_key(&key));
            }
        })?);

        let weak = Rc::downgrade(&state);
        listeners.push(Listener::new(&container, "mouseenter", move |_| {
            with_show(&weak, |s| s.on_pointer_enter());
        })?);

        let weak = Rc::downgrade(&state);
        listeners.push(Listener::new(&container, "mouseleave", move |_| {
            let schedule = ticker(weak.clone());
            with_show(&weak, |s| s.on_pointer_leave(schedule));
        })?);

        let weak = Rc::downgrade(&state);
        let doc = document.clone();
        listeners.push(Listener::new(document, "visibilitychange", move |_| {
            let schedule = ticker(weak.clone());
            let hidden = doc.hidden();
            with_show(&weak, |s| s.on_visibility_change(hidden, schedule));
        })?);

        let weak = Rc::downgrade(&state);
        with_show(&weak, |s| s.start_autoplay(ticker(weak.clone())));

        Ok(Some(Self {
            state,
            _listeners: listeners,
        }))
    }

    pub fn current(&self) -> usize {
        self.state.borrow().show.carousel().current()
    }
}

fn with_show<F: FnOnce(&mut Show)>(state: &Weak<RefCell<State>>, f: F) {
    if let Some(state) = state.upgrade() {
        f(&mut state.borrow_mut().show);
    }
}

/// Build the autoplay interval; each tick advances the slideshow
fn ticker(state: Weak<RefCell<State>>) -> impl FnOnce(u32) -> Interval {
    move |ms| Interval::new(ms, move || navigate(&state, |s| s.on_tick()))
}

/// Run a navigation and, if it started a transition, settle it after the delay
fn navigate<F>(state: &Weak<RefCell<State>>, step: F)
where
    F: FnOnce(&mut Show) -> Option<Transition>,
{
    let Some(state) = state.upgrade() else {
        return;
    };

    let delay = {
        let mut state = state.borrow_mut();
        if step(&mut state.show).is_none() {
            return;
        }
        state.transition_delay_ms
    };

    // Never cancelled; the transition guard drops anything that races it
    let weak = Rc::downgrade(&state);
    Timeout::new(delay, move || {
        if let Some(state) = weak.upgrade() {
            state.borrow_mut().show.carousel_mut().settle();
        }
    })
    .forget();
}
