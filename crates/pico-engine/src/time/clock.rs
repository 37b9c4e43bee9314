use std::time::{Duration, Instant};

/// Monotonic time source measured from backend start.
pub trait Clock {
    /// Time elapsed since the clock was created.
    fn elapsed(&self) -> Duration;
}

/// Wall clock backed by `Instant`.
#[derive(Debug, Clone)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self { start: Instant::now() }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    #[inline]
    fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

/// Clock that only moves when told to.
///
/// Deterministic tests drive it through `advance`; it never goes backwards.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Duration,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self, by: Duration) {
        self.now = self.now.saturating_add(by);
    }

    /// Moves the clock forward to `at`. Earlier instants are ignored.
    pub fn advance_to(&mut self, at: Duration) {
        self.now = self.now.max(at);
    }
}

impl Clock for ManualClock {
    #[inline]
    fn elapsed(&self) -> Duration {
        self.now
    }
}
