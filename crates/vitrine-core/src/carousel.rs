// crates/vitrine-core/src/carousel.rs
// Carousel slide/dot state machine
//
// The transition is two-phase: `go_to_slide` deactivates the outgoing slide
// and returns a `Transition`; the caller schedules `settle` after the
// configured delay, which activates the incoming slide. While a transition
// is pending every navigation request is dropped.

pub const ACTIVE: &str = "active";
pub const PREV: &str = "prev";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// A slide change that has started but not yet settled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: usize,
    pub to: usize,
    pub direction: Direction,
}

/// Index bookkeeping for a carousel of `len` slides
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselState {
    len: usize,
    current: usize,
    transitioning: bool,
}

impl CarouselState {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            current: 0,
            transitioning: false,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn is_transitioning(&self) -> bool {
        self.transitioning
    }

    /// Start moving to `target`. Returns None when the request is dropped:
    /// a transition is pending, the target is already current, or it is
    /// out of range.
    pub fn begin(&mut self, target: usize) -> Option<Transition> {
        if self.transitioning || target == self.current || target >= self.len {
            return None;
        }

        let direction = if target > self.current {
            Direction::Forward
        } else {
            Direction::Backward
        };
        let transition = Transition {
            from: self.current,
            to: target,
            direction,
        };

        self.transitioning = true;
        self.current = target;
        Some(transition)
    }

    /// Finish the pending transition. Returns the now-active index, or None
    /// if nothing was pending.
    pub fn settle(&mut self) -> Option<usize> {
        if !self.transitioning {
            return None;
        }
        self.transitioning = false;
        Some(self.current)
    }

    pub fn next_index(&self) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        Some((self.current + 1) % self.len)
    }

    pub fn prev_index(&self) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        Some((self.current + self.len - 1) % self.len)
    }
}

/// The elements a carousel drives: slides and the index-aligned dots.
///
/// Dots may be fewer than slides; implementations ignore indices they do
/// not have.
pub trait SlideDeck {
    fn slide_count(&self) -> usize;
    fn dot_count(&self) -> usize;
    fn set_slide_class(&mut self, index: usize, class: &str, on: bool);
    fn set_dot_class(&mut self, index: usize, class: &str, on: bool);
    fn set_slide_attr(&mut self, index: usize, name: &str, value: &str);
    fn set_dot_attr(&mut self, index: usize, name: &str, value: &str);
}

/// A carousel bound to a deck of slides
#[derive(Debug)]
pub struct Carousel<D> {
    deck: D,
    state: CarouselState,
}

impl<D: SlideDeck> Carousel<D> {
    pub fn new(deck: D) -> Self {
        let state = CarouselState::new(deck.slide_count());
        Self { deck, state }
    }

    pub fn current(&self) -> usize {
        self.state.current()
    }

    pub fn is_transitioning(&self) -> bool {
        self.state.is_transitioning()
    }

    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    pub fn deck(&self) -> &D {
        &self.deck
    }

    /// Begin a move to `index`. When this returns Some, the caller must
    /// call `settle` once the transition delay has elapsed.
    pub fn go_to_slide(&mut self, index: usize) -> Option<Transition> {
        let transition = self.state.begin(index)?;

        self.deck.set_slide_class(transition.from, ACTIVE, false);
        self.deck.set_dot_class(transition.from, ACTIVE, false);
        // Tagged for the exit style only; settle clears it from every slide
        if transition.direction == Direction::Forward {
            self.deck.set_slide_class(transition.from, PREV, true);
        }

        self.update_aria();
        log::debug!(
            "Carousel moving {} -> {} ({:?})",
            transition.from,
            transition.to,
            transition.direction
        );
        Some(transition)
    }

    pub fn next_slide(&mut self) -> Option<Transition> {
        let index = self.state.next_index()?;
        self.go_to_slide(index)
    }

    pub fn prev_slide(&mut self) -> Option<Transition> {
        let index = self.state.prev_index()?;
        self.go_to_slide(index)
    }

    /// Second phase of a transition: show the incoming slide and dot
    pub fn settle(&mut self) {
        let Some(current) = self.state.settle() else {
            return;
        };

        self.deck.set_slide_class(current, ACTIVE, true);
        self.deck.set_dot_class(current, ACTIVE, true);
        for index in 0..self.deck.slide_count() {
            self.deck.set_slide_class(index, PREV, false);
        }
    }

    /// Mirror the current index into aria-hidden/aria-label/aria-pressed
    pub fn update_aria(&mut self) {
        let current = self.state.current();
        let total = self.deck.slide_count();

        for index in 0..total {
            let hidden = if index != current { "true" } else { "false" };
            self.deck.set_slide_attr(index, "aria-hidden", hidden);
            self.deck
                .set_slide_attr(index, "aria-label", &format!("Slide {} of {}", index + 1, total));
        }

        for index in 0..self.deck.dot_count() {
            let pressed = if index == current { "true" } else { "false" };
            self.deck
                .set_dot_attr(index, "aria-label", &format!("Go to slide {}", index + 1));
            self.deck.set_dot_attr(index, "aria-pressed", pressed);
        }
    }
}
