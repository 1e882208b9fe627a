// crates/vitrine-core/src/counter.rs
// Count-up ramp for the statistics counters

/// Outcome of one animation frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RampStep {
    /// Render this value and request another frame
    Continue(i64),
    /// Render the exact target and stop
    Done(i64),
}

impl RampStep {
    pub fn value(&self) -> i64 {
        match self {
            RampStep::Continue(v) | RampStep::Done(v) => *v,
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, RampStep::Done(_))
    }
}

/// Linear ramp from 0 to `target`.
///
/// The per-frame increment is `target / (duration_ms / frame_ms)`, so the
/// ramp takes a fixed number of frames; wall-clock length follows the real
/// frame rate.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterRamp {
    target: i64,
    increment: f64,
    current: f64,
}

impl CounterRamp {
    pub fn new(target: i64, duration_ms: u32, frame_ms: u32) -> Self {
        let frames = f64::from(duration_ms) / f64::from(frame_ms.max(1));
        let increment = if frames > 0.0 {
            target as f64 / frames
        } else {
            // Zero duration: jump straight to the target
            target as f64
        };

        Self {
            target,
            increment,
            current: 0.0,
        }
    }

    pub fn target(&self) -> i64 {
        self.target
    }

    pub fn increment(&self) -> f64 {
        self.increment
    }

    pub fn step(&mut self) -> RampStep {
        self.current += self.increment;
        if self.current < self.target as f64 {
            RampStep::Continue(self.current.floor() as i64)
        } else {
            RampStep::Done(self.target)
        }
    }
}

/// Parse a `data-count` value by its leading integer ("250+" is 250).
pub fn parse_target(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (sign, digits) = match s.as_bytes().first() {
        Some(b'-') => (-1, &s[1..]),
        Some(b'+') => (1, &s[1..]),
        _ => (1, s),
    };

    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    digits[..end].parse::<i64>().ok().map(|n| n * sign)
}
