//! Time-keeping core for `Routinely`.
//!
//! Two independent engines — a count-up [`stopwatch`] and a count-down
//! [`countdown`] — plus the pure [`format`] utilities that turn milliseconds
//! into display strings. Engines are plain state machines advanced by
//! explicit monotonic-timestamp ticks; the application layer owns the tick
//! cadence and drives re-rendering.

pub mod countdown;
pub mod format;
pub mod stopwatch;
pub mod task;
