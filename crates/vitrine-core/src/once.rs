// crates/vitrine-core/src/once.rs
// Fire-at-most-once guard for visibility-triggered work

/// Guard for a subscription that must fire at most once.
///
/// Observer callbacks can deliver several entries (or several batches) before
/// the unsubscribe takes effect, so callers check `try_fire` and release the
/// subscription in the same callback turn.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct OneShot {
    fired: bool,
}

impl OneShot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true exactly once; every later call returns false.
    pub fn try_fire(&mut self) -> bool {
        if self.fired {
            return false;
        }
        self.fired = true;
        true
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once() {
        let mut once = OneShot::new();
        assert!(!once.has_fired());
        assert!(once.try_fire());
        assert!(once.has_fired());
        assert!(!once.try_fire());
        assert!(!once.try_fire());
    }
}
