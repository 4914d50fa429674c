// src/timer.rs

/// Milliseconds on the page clock. Callers pass "now" into every operation so the
/// state machines can be driven by a simulated clock in tests.
pub type Millis = u64;

/// A single-shot timer that can be restarted or cancelled.
///
/// Restarting replaces the pending deadline; a superseded deadline never fires.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Timer {
    deadline: Option<Millis>,
}

impl Timer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm (or re-arm) the timer to fire `delay` ms after `now`.
    pub fn start(&mut self, now: Millis, delay: Millis) {
        self.deadline = Some(now.saturating_add(delay));
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Millis> {
        self.deadline
    }

    /// Returns true exactly once, the first time `now` reaches the deadline.
    pub fn fire_if_due(&mut self, now: Millis) -> bool {
        match self.deadline {
            Some(at) if now >= at => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

/// Keeps only the latest value pushed within the quiet window.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Millis,
    timer: Timer,
    pending: Option<T>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Millis) -> Self {
        Self {
            delay,
            timer: Timer::new(),
            pending: None,
        }
    }

    /// Supersedes whatever was pending and restarts the quiet window.
    pub fn push(&mut self, now: Millis, value: T) {
        self.pending = Some(value);
        self.timer.start(now, self.delay);
    }

    pub fn cancel(&mut self) {
        self.pending = None;
        self.timer.cancel();
    }

    pub fn deadline(&self) -> Option<Millis> {
        self.timer.deadline()
    }

    pub fn poll(&mut self, now: Millis) -> Option<T> {
        if self.timer.fire_if_due(now) {
            self.pending.take()
        } else {
            None
        }
    }
}

/// Fixed-period timer, used by the hero slider.
#[derive(Debug, Clone)]
pub struct Interval {
    period: Millis,
    next_at: Millis,
}

impl Interval {
    pub fn new(start: Millis, period: Millis) -> Self {
        Self {
            period,
            next_at: start.saturating_add(period),
        }
    }

    /// Number of whole periods elapsed since the last call.
    pub fn ticks(&mut self, now: Millis) -> u64 {
        if self.period == 0 || now < self.next_at {
            return 0;
        }
        let n = (now - self.next_at) / self.period + 1;
        self.next_at += n * self.period;
        n
    }
}
