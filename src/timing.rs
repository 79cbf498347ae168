//! Repeating timers polled from the single-threaded event loop.
//!
//! The dashboard runs two independent timer streams (the 50 ms tick and the
//! 1 s clock refresh). Neither runs on its own thread; the event loop polls
//! both with the current time and runs whichever is due. A timer that fires
//! schedules its next deadline one interval after the poll that observed it,
//! so a stalled loop resumes at the normal cadence instead of firing a burst
//! of catch-up ticks.
//!
//! Time is always passed in, never read here, so tests drive timers with
//! synthetic `Instant`s.

use std::time::{Duration, Instant};

/// A repeating timer with an explicit start/stop lifecycle.
#[derive(Clone, Copy, Debug)]
pub struct RepeatingTimer {
    interval: Duration,
    /// `None` while stopped.
    next_due: Option<Instant>,
}

impl RepeatingTimer {
    /// Create a stopped timer.
    pub const fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_due: None,
        }
    }

    #[inline]
    #[allow(dead_code)]
    pub const fn interval(&self) -> Duration { self.interval }

    /// Start (or restart) the timer. The first expiry is one interval after `now`.
    pub fn start(
        &mut self,
        now: Instant,
    ) {
        self.next_due = Some(now + self.interval);
    }

    /// Stop the timer. Pending expiries are discarded.
    #[allow(dead_code)]
    pub const fn stop(&mut self) { self.next_due = None; }

    #[inline]
    #[allow(dead_code)]
    pub const fn is_running(&self) -> bool { self.next_due.is_some() }

    /// Next deadline, or `None` when stopped.
    #[inline]
    pub const fn next_due(&self) -> Option<Instant> { self.next_due }

    /// Returns `true` if the timer expired at or before `now`, and reschedules it.
    ///
    /// Fires at most once per call.
    pub fn poll(
        &mut self,
        now: Instant,
    ) -> bool {
        match self.next_due {
            Some(due) if due <= now => {
                self.next_due = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }

    /// Time left until the next expiry (zero if already due, `None` when stopped).
    #[allow(dead_code)]
    pub fn remaining(
        &self,
        now: Instant,
    ) -> Option<Duration> {
        self.next_due.map(|due| due.saturating_duration_since(now))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
