// crates/vitrine-core/src/slideshow.rs
// Carousel plus autoplay: the event handlers a bound carousel reacts to

use crate::autoplay::Autoplay;
use crate::carousel::{Carousel, SlideDeck, Transition};

/// A carousel together with its autoplay timer.
///
/// `H` is the host's periodic timer handle. Every method that may (re)start
/// autoplay takes a `schedule` closure building that handle; the host's
/// timer calls back into `on_tick`.
#[derive(Debug)]
pub struct Slideshow<D, H> {
    carousel: Carousel<D>,
    autoplay: Autoplay<H>,
}

impl<D: SlideDeck, H> Slideshow<D, H> {
    pub fn new(deck: D, interval_ms: u32) -> Self {
        Self {
            carousel: Carousel::new(deck),
            autoplay: Autoplay::new(interval_ms),
        }
    }

    pub fn carousel(&self) -> &Carousel<D> {
        &self.carousel
    }

    pub fn carousel_mut(&mut self) -> &mut Carousel<D> {
        &mut self.carousel
    }

    pub fn is_playing(&self) -> bool {
        self.autoplay.is_running()
    }

    pub fn interval_ms(&self) -> u32 {
        self.autoplay.interval_ms()
    }

    pub fn start_autoplay<F>(&mut self, schedule: F)
    where
        F: FnOnce(u32) -> H,
    {
        self.autoplay.start(schedule);
    }

    pub fn stop_autoplay(&mut self) {
        self.autoplay.stop();
    }

    /// Periodic timer fired. A tick that races a stop is ignored.
    pub fn on_tick(&mut self) -> Option<Transition> {
        if !self.autoplay.is_running() {
            return None;
        }
        self.carousel.next_slide()
    }

    pub fn on_key(&mut self, key: &str) -> Option<Transition> {
        match key {
            "ArrowLeft" => self.carousel.prev_slide(),
            "ArrowRight" => self.carousel.next_slide(),
            _ => None,
        }
    }

    pub fn on_pointer_enter(&mut self) {
        self.stop_autoplay();
    }

    pub fn on_pointer_leave<F>(&mut self, schedule: F)
    where
        F: FnOnce(u32) -> H,
    {
        self.start_autoplay(schedule);
    }

    pub fn on_visibility_change<F>(&mut self, hidden: bool, schedule: F)
    where
        F: FnOnce(u32) -> H,
    {
        if hidden {
            self.stop_autoplay();
        } else {
            self.start_autoplay(schedule);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Deck(usize);

    impl SlideDeck for Deck {
        fn slide_count(&self) -> usize {
            self.0
        }
        fn dot_count(&self) -> usize {
            0
        }
        fn set_slide_class(&mut self, _: usize, _: &str, _: bool) {}
        fn set_dot_class(&mut self, _: usize, _: &str, _: bool) {}
        fn set_slide_attr(&mut self, _: usize, _: &str, _: &str) {}
        fn set_dot_attr(&mut self, _: usize, _: &str, _: &str) {}
    }

    #[test]
    fn test_tick_without_autoplay_is_ignored() {
        let mut show: Slideshow<Deck, ()> = Slideshow::new(Deck(3), 5000);
        assert!(show.on_tick().is_none());

        show.start_autoplay(|_| ());
        assert!(show.on_tick().is_some());
    }

    #[test]
    fn test_arrow_keys() {
        let mut show: Slideshow<Deck, ()> = Slideshow::new(Deck(3), 5000);
        assert_eq!(show.on_key("ArrowLeft").map(|t| t.to), Some(2));
        show.carousel_mut().settle();
        assert_eq!(show.on_key("ArrowRight").map(|t| t.to), Some(0));
        show.carousel_mut().settle();
        assert!(show.on_key("Enter").is_none());
    }

    #[test]
    fn test_visibility_pauses_and_resumes() {
        let mut show: Slideshow<Deck, ()> = Slideshow::new(Deck(3), 5000);
        show.start_autoplay(|_| ());
        show.on_visibility_change(true, |_| ());
        assert!(!show.is_playing());
        show.on_visibility_change(false, |_| ());
        assert!(show.is_playing());
    }
}
