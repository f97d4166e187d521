//! Count-up stopwatch engine.
//!
//! A pure state machine: it never schedules anything itself. The owning
//! driver anchors it with [`StopwatchEngine::start`] and advances it with
//! [`StopwatchEngine::tick`], passing a monotonic timestamp each time.
//! Elapsed time is derived from the timestamps alone, so the accumulated
//! value is exact regardless of tick cadence.

use std::time::{Duration, Instant};

use crate::format::sanitize_ms;

/// Monotonically increasing elapsed-time counter with start/pause/reset
/// and direct time editing.
///
/// All operations are total: there is no invalid input and no error path.
#[derive(Debug, Clone)]
pub struct StopwatchEngine {
    /// Accumulated elapsed time. Stored as a [`Duration`] so sub-millisecond
    /// remainders between ticks are never dropped.
    elapsed: Duration,
    /// Whether the engine is actively accumulating wall-clock time.
    running: bool,
    /// Anchor for the next tick's delta. `Some` exactly while running.
    last_tick: Option<Instant>,
}

impl StopwatchEngine {
    /// Creates a stopped stopwatch at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elapsed: Duration::ZERO,
            running: false,
            last_tick: None,
        }
    }

    /// Begins accumulating from `now`. No-op if already running, so a
    /// repeated start never re-anchors and never loses a partial delta.
    pub fn start(&mut self, now: Instant) {
        if self.running {
            return;
        }
        self.last_tick = Some(now);
        self.running = true;
    }

    /// Stops accumulating. The elapsed value freezes until the next
    /// [`start`](Self::start). No-op if already paused.
    pub fn pause(&mut self) {
        self.running = false;
        self.last_tick = None;
    }

    /// Returns to zero and stops, regardless of the current state.
    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
        self.running = false;
        self.last_tick = None;
    }

    /// Overwrites the elapsed value with a sanitized millisecond count.
    ///
    /// Callers gate this to the paused state in the UI; if it does race a
    /// tick, both serialize on the owning lock and last write wins.
    pub fn set_time_ms(&mut self, ms: f64) {
        self.elapsed = Duration::from_millis(sanitize_ms(ms));
    }

    /// Advances elapsed time by the wall-clock delta since the previous
    /// tick and re-anchors. Does nothing while paused.
    pub fn tick(&mut self, now: Instant) {
        if !self.running {
            return;
        }
        let Some(last) = self.last_tick else {
            self.last_tick = Some(now);
            return;
        };
        self.elapsed += now.saturating_duration_since(last);
        self.last_tick = Some(now);
    }

    /// Current elapsed time in whole milliseconds.
    #[must_use]
    pub fn elapsed_ms(&self) -> u64 {
        u64::try_from(self.elapsed.as_millis()).unwrap_or(u64::MAX)
    }

    /// Whether the engine is actively accumulating.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }
}

impl Default for StopwatchEngine {
    fn default() -> Self {
        Self::new()
    }
}
