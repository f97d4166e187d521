//! Count-down engine with one-shot completion detection.
//!
//! Structurally parallel to the stopwatch: a pure state machine advanced by
//! monotonic-timestamp ticks. The extra concern is the zero-crossing — the
//! tick that drains the remaining time to exactly zero stops the engine and
//! latches `completed` in the same state update, and reports the crossing
//! through [`CountdownTick::Completed`] at most once per epoch. The driver
//! fires the completion side effect on that outcome, so "exactly once" is
//! enforced by the state machine rather than by caller discipline.
//!
//! An epoch runs from (re)arming at full duration to either the natural
//! zero-crossing or an explicit reset.

use std::time::{Duration, Instant};

/// Outcome of a single countdown tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownTick {
    /// The engine was not running; nothing changed.
    Idle,
    /// Time advanced and the countdown is still going.
    Running,
    /// This tick crossed zero: the engine stopped itself and latched
    /// completion. Reported exactly once per epoch.
    Completed,
}

/// Monotonically decreasing remaining-time counter.
///
/// The configured total duration is immutable for the engine's lifetime;
/// restarting always re-arms from the full total.
#[derive(Debug, Clone)]
pub struct CountdownEngine {
    /// Immutable full duration for every epoch.
    total: Duration,
    /// Remaining time in the current epoch. Never goes negative.
    remaining: Duration,
    /// Whether the engine is actively draining wall-clock time.
    running: bool,
    /// One-shot latch: true once this epoch's zero-crossing has been
    /// reported. Cleared on reset and on re-arm.
    completed: bool,
    /// Anchor for the next tick's delta. `Some` exactly while running.
    last_tick: Option<Instant>,
}

impl CountdownEngine {
    /// Creates a stopped countdown armed with `total_seconds` of remaining
    /// time.
    #[must_use]
    pub const fn new(total_seconds: u32) -> Self {
        let total = Duration::from_secs(total_seconds as u64);
        Self {
            total,
            remaining: total,
            running: false,
            completed: false,
            last_tick: None,
        }
    }

    /// Begins (or resumes) draining from `now`.
    ///
    /// Starting an exhausted countdown re-arms it to the full duration and
    /// clears the completion latch first — the user re-triggers the same
    /// named task without a separate reset press. No-op if already running.
    pub fn start(&mut self, now: Instant) {
        if self.running {
            return;
        }
        if self.remaining.is_zero() {
            self.remaining = self.total;
            self.completed = false;
        }
        self.last_tick = Some(now);
        self.running = true;
    }

    /// Stops draining. Remaining time freezes until the next
    /// [`start`](Self::start). No-op if already paused.
    pub fn pause(&mut self) {
        self.running = false;
        self.last_tick = None;
    }

    /// Returns to the full duration, stopped and not completed, beginning a
    /// fresh epoch regardless of the current state.
    pub fn reset(&mut self) {
        self.remaining = self.total;
        self.running = false;
        self.completed = false;
        self.last_tick = None;
    }

    /// Drains the wall-clock delta since the previous tick, clamping at
    /// zero. On the zero-crossing the engine stops itself and latches
    /// completion before returning, so consumers never observe a transient
    /// "stopped but not completed" state.
    pub fn tick(&mut self, now: Instant) -> CountdownTick {
        if !self.running {
            return CountdownTick::Idle;
        }
        let Some(last) = self.last_tick else {
            self.last_tick = Some(now);
            return CountdownTick::Running;
        };
        let delta = now.saturating_duration_since(last);
        self.last_tick = Some(now);
        self.remaining = self.remaining.saturating_sub(delta);

        if self.remaining.is_zero() {
            self.running = false;
            self.last_tick = None;
            if !self.completed {
                self.completed = true;
                return CountdownTick::Completed;
            }
            return CountdownTick::Idle;
        }
        CountdownTick::Running
    }

    /// Remaining time in whole milliseconds.
    #[must_use]
    pub fn remaining_ms(&self) -> u64 {
        u64::try_from(self.remaining.as_millis()).unwrap_or(u64::MAX)
    }

    /// Full epoch duration in whole milliseconds.
    #[must_use]
    pub fn total_ms(&self) -> u64 {
        u64::try_from(self.total.as_millis()).unwrap_or(u64::MAX)
    }

    /// Whether the engine is actively draining.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Whether this epoch's zero-crossing has fired.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }
}
