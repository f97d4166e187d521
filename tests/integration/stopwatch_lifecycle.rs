//! Virtual-time lifecycle tests for the stopwatch driver.
//!
//! `start_paused` tokio tests make the ticker deterministic: the runtime
//! auto-advances the clock to each timer deadline, so elapsed values are
//! exact multiples of the tick period.

#![allow(clippy::unwrap_used)]

use std::time::Duration;

use routinely::timer::Stopwatch;

const TICK: Duration = Duration::from_millis(250);

#[tokio::test(start_paused = true)]
async fn accumulates_while_running() {
    let mut sw = Stopwatch::new(TICK);
    assert_eq!(sw.elapsed_ms(), 0);

    sw.start();
    tokio::time::sleep(Duration::from_millis(1100)).await;
    // Ticks landed at 250/500/750/1000 of virtual time.
    assert_eq!(sw.elapsed_ms(), 1000);
    assert!(sw.is_running());
}

#[tokio::test(start_paused = true)]
async fn pause_freezes_and_releases_ticker() {
    let mut sw = Stopwatch::new(TICK);
    sw.start();
    tokio::time::sleep(Duration::from_millis(600)).await;
    sw.pause();

    let frozen = sw.elapsed_ms();
    assert_eq!(frozen, 500);
    assert!(!sw.is_running());

    // A ghost ticker would keep accumulating here.
    tokio::time::sleep(Duration::from_secs(10)).await;
    assert_eq!(sw.elapsed_ms(), frozen);
}

#[tokio::test(start_paused = true)]
async fn resume_continues_from_frozen_value() {
    let mut sw = Stopwatch::new(TICK);
    sw.start();
    tokio::time::sleep(Duration::from_millis(600)).await;
    sw.pause();
    tokio::time::sleep(Duration::from_secs(5)).await;

    sw.start();
    tokio::time::sleep(Duration::from_millis(300)).await;
    // 500 before the pause plus one 250ms tick after resume.
    assert_eq!(sw.elapsed_ms(), 750);
}

#[tokio::test(start_paused = true)]
async fn start_is_idempotent_while_running() {
    let mut sw = Stopwatch::new(TICK);
    sw.start();
    tokio::time::sleep(Duration::from_millis(600)).await;
    sw.start();
    tokio::time::sleep(Duration::from_millis(600)).await;
    assert_eq!(sw.elapsed_ms(), 1000);
}

#[tokio::test(start_paused = true)]
async fn reset_zeroes_and_stops_mid_run() {
    let mut sw = Stopwatch::new(TICK);
    sw.start();
    tokio::time::sleep(Duration::from_millis(1100)).await;
    sw.reset();

    assert_eq!(sw.elapsed_ms(), 0);
    assert!(!sw.is_running());

    // Ticker must be gone after reset.
    tokio::time::sleep(Duration::from_secs(3)).await;
    assert_eq!(sw.elapsed_ms(), 0);
}

#[tokio::test(start_paused = true)]
async fn set_time_while_paused_then_resume() {
    let mut sw = Stopwatch::new(TICK);
    sw.start();
    tokio::time::sleep(Duration::from_millis(600)).await;
    sw.pause();

    sw.set_time_ms(60_000.0);
    assert_eq!(sw.elapsed_ms(), 60_000);

    sw.start();
    tokio::time::sleep(Duration::from_millis(300)).await;
    assert_eq!(sw.elapsed_ms(), 60_250);
}

#[tokio::test(start_paused = true)]
async fn set_time_sanitizes_malformed_input() {
    let mut sw = Stopwatch::new(TICK);
    sw.set_time_ms(-42.0);
    assert_eq!(sw.elapsed_ms(), 0);
    sw.set_time_ms(f64::NAN);
    assert_eq!(sw.elapsed_ms(), 0);
    sw.set_time_ms(1500.7);
    assert_eq!(sw.elapsed_ms(), 1501);
}
