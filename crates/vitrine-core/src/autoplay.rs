// crates/vitrine-core/src/autoplay.rs
// Owned periodic-timer handle with cancel-before-reschedule semantics

/// Owns at most one scheduled periodic task.
///
/// `H` is whatever the host hands back for a periodic timer; dropping it
/// must cancel the timer (gloo's `Interval` does). `start` always drops the
/// previous handle before scheduling, so there is never more than one live
/// periodic callback per carousel.
#[derive(Debug)]
pub struct Autoplay<H> {
    interval_ms: u32,
    handle: Option<H>,
}

impl<H> Autoplay<H> {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms,
            handle: None,
        }
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Cancel any running timer, then install the one built by `schedule`
    pub fn start<F>(&mut self, schedule: F)
    where
        F: FnOnce(u32) -> H,
    {
        self.stop();
        self.handle = Some(schedule(self.interval_ms));
    }

    /// Cancel the running timer. Returns whether one was running.
    pub fn stop(&mut self) -> bool {
        self.handle.take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Counts live timers the way a host would
    struct FakeTimer {
        live: Rc<Cell<i32>>,
    }

    impl FakeTimer {
        fn new(live: &Rc<Cell<i32>>) -> Self {
            live.set(live.get() + 1);
            Self { live: live.clone() }
        }
    }

    impl Drop for FakeTimer {
        fn drop(&mut self) {
            self.live.set(self.live.get() - 1);
        }
    }

    #[test]
    fn test_start_and_stop() {
        let live = Rc::new(Cell::new(0));
        let mut autoplay = Autoplay::new(5000);
        assert!(!autoplay.is_running());

        autoplay.start(|ms| {
            assert_eq!(ms, 5000);
            FakeTimer::new(&live)
        });
        assert!(autoplay.is_running());
        assert_eq!(live.get(), 1);

        assert!(autoplay.stop());
        assert!(!autoplay.is_running());
        assert_eq!(live.get(), 0);
    }

    #[test]
    fn test_restart_cancels_first() {
        let live = Rc::new(Cell::new(0));
        let mut autoplay = Autoplay::new(6000);

        autoplay.start(|_| FakeTimer::new(&live));
        autoplay.start(|_| {
            // Previous timer must already be gone when the new one is scheduled
            assert_eq!(live.get(), 0);
            FakeTimer::new(&live)
        });
        assert_eq!(live.get(), 1);
    }

    #[test]
    fn test_stop_when_stopped() {
        let mut autoplay: Autoplay<()> = Autoplay::new(5000);
        assert!(!autoplay.stop());
        assert!(!autoplay.stop());
    }
}
