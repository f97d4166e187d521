//! Async tick drivers for the core engines.
//!
//! Each driver owns its engine state behind a mutex plus a tokio ticker
//! task. The ticker is spawned on `start()` and released on every exit
//! path — pause, reset, the countdown's self-stop at zero, and handle drop.
//! A ticker that outlives its running state is a correctness bug, not a
//! performance nit: it would keep mutating a value the UI believes is
//! frozen.
//!
//! Drivers emit no events of their own; the countdown invokes its
//! completion callback, and the application routes completions to the UI
//! loop as [`TimerEvent`]s over an unbounded channel.

pub mod countdown;
pub mod stopwatch;

pub use countdown::Countdown;
pub use stopwatch::Stopwatch;

use std::time::Duration;

/// Default engine tick period. The UI re-renders at its own poll cadence;
/// the engines stay accurate at any period because values are derived from
/// wall-clock deltas, never from tick counts.
pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_millis(250);

/// Notifications from timers toward the UI loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerEvent {
    /// A task's countdown drained to zero.
    CountdownCompleted {
        /// Id of the routine task whose countdown finished.
        task_id: String,
    },
}

/// Current monotonic time, routed through tokio so virtual-time tests can
/// drive the engines deterministically.
pub(crate) fn now() -> std::time::Instant {
    tokio::time::Instant::now().into_std()
}
