//! Property tests for the pure time-keeping core.
//!
//! Uses proptest to verify, for arbitrary tick schedules:
//! 1. Stopwatch elapsed time equals the exact delta sum, never a function
//!    of tick count.
//! 2. Stopwatch elapsed time is non-decreasing across ticks.
//! 3. Countdown remaining time is non-increasing and floors at zero.
//! 4. A countdown's zero-crossing is reported exactly once per epoch.
//! 5. The sanitizer is total over arbitrary floats.
//! 6. Formatting invariants (parse/format agreement, hundredths shape,
//!    minute-progress range and wraparound).

use std::time::{Duration, Instant};

use proptest::prelude::*;

use routinely_core::countdown::{CountdownEngine, CountdownTick};
use routinely_core::format::{
    format_clock, format_stopwatch_display, minute_progress, parse_clock, sanitize_ms,
};
use routinely_core::stopwatch::StopwatchEngine;

/// Strategy for a schedule of tick deltas, in milliseconds.
fn arb_deltas() -> impl Strategy<Value = Vec<u64>> {
    prop::collection::vec(0u64..2_000, 0..50)
}

proptest! {
    /// Elapsed time is exactly the sum of deltas, regardless of cadence.
    #[test]
    fn stopwatch_elapsed_is_exact_delta_sum(deltas in arb_deltas()) {
        let t0 = Instant::now();
        let mut sw = StopwatchEngine::new();
        sw.start(t0);

        let mut at = t0;
        for delta in &deltas {
            at += Duration::from_millis(*delta);
            sw.tick(at);
        }
        prop_assert_eq!(sw.elapsed_ms(), deltas.iter().sum::<u64>());
    }

    /// Elapsed time never decreases across a run.
    #[test]
    fn stopwatch_is_monotonic(deltas in arb_deltas()) {
        let t0 = Instant::now();
        let mut sw = StopwatchEngine::new();
        sw.start(t0);

        let mut at = t0;
        let mut prev = sw.elapsed_ms();
        for delta in deltas {
            at += Duration::from_millis(delta);
            sw.tick(at);
            prop_assert!(sw.elapsed_ms() >= prev);
            prev = sw.elapsed_ms();
        }
    }

    /// Remaining time never increases and never goes negative.
    #[test]
    fn countdown_is_nonincreasing_and_floors_at_zero(
        total_seconds in 1u32..120,
        deltas in arb_deltas(),
    ) {
        let t0 = Instant::now();
        let mut cd = CountdownEngine::new(total_seconds);
        cd.start(t0);

        let mut at = t0;
        let mut prev = cd.remaining_ms();
        for delta in deltas {
            at += Duration::from_millis(delta);
            cd.tick(at);
            prop_assert!(cd.remaining_ms() <= prev);
            prev = cd.remaining_ms();
        }
    }

    /// The zero-crossing is reported exactly once when the schedule drains
    /// the timer, and never otherwise.
    #[test]
    fn countdown_completes_exactly_once_per_epoch(
        total_seconds in 1u32..60,
        deltas in arb_deltas(),
    ) {
        let t0 = Instant::now();
        let mut cd = CountdownEngine::new(total_seconds);
        cd.start(t0);

        let mut at = t0;
        let mut completions = 0u32;
        for delta in &deltas {
            at += Duration::from_millis(*delta);
            if cd.tick(at) == CountdownTick::Completed {
                completions += 1;
            }
        }

        let drained = deltas.iter().sum::<u64>() >= u64::from(total_seconds) * 1000;
        prop_assert_eq!(completions, u32::from(drained));
        prop_assert_eq!(cd.is_completed(), drained);
    }

    /// Restarting after natural completion always yields a fresh epoch
    /// that can complete exactly once more.
    #[test]
    fn countdown_restart_always_rearms(total_seconds in 1u32..30) {
        let t0 = Instant::now();
        let total_ms = u64::from(total_seconds) * 1000;
        let mut cd = CountdownEngine::new(total_seconds);

        cd.start(t0);
        let overshoot = t0 + Duration::from_millis(total_ms + 1);
        prop_assert_eq!(cd.tick(overshoot), CountdownTick::Completed);

        cd.start(overshoot);
        prop_assert_eq!(cd.remaining_ms(), total_ms);
        prop_assert!(!cd.is_completed());
        let second_end = overshoot + Duration::from_millis(total_ms);
        prop_assert_eq!(cd.tick(second_end), CountdownTick::Completed);
    }

    /// The input sanitizer is total: any float maps to a valid count.
    #[test]
    fn sanitize_ms_is_total(ms in any::<f64>()) {
        let sanitized = sanitize_ms(ms);
        if ms.is_nan() || ms <= 0.0 {
            prop_assert_eq!(sanitized, 0);
        } else {
            prop_assert!(sanitized > 0 || ms < 0.5);
        }
    }

    /// Formatting and parsing agree on whole-second values.
    #[test]
    fn format_clock_parses_back(seconds in 0u64..200_000) {
        let ms = seconds * 1000;
        let formatted = format_clock(ms, false);
        prop_assert_eq!(parse_clock(&formatted), Some(ms));
    }

    /// The hundredths field is always exactly two digits.
    #[test]
    fn hundredths_are_always_two_digits(ms in 0u64..10_000_000) {
        let display = format_stopwatch_display(ms, false);
        prop_assert_eq!(display.hundredths.len(), 2);
        prop_assert!(display.hundredths.chars().all(|c| c.is_ascii_digit()));
    }

    /// Minute progress stays in [0, 100) and wraps with a 60s period.
    #[test]
    fn minute_progress_wraps(ms in 0u64..10_000_000) {
        let progress = minute_progress(ms);
        prop_assert!((0.0..100.0).contains(&progress));
        prop_assert!((progress - minute_progress(ms + 60_000)).abs() < f64::EPSILON);
    }
}
