//! Stopwatch driver: core engine plus a scoped ticker task.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;

use routinely_core::stopwatch::StopwatchEngine;

use super::now;

/// Count-up timer handle for open-ended sessions.
///
/// Commands take `&mut self`; queries are snapshots of the engine state.
/// The internal ticker exists exactly while the engine is running.
pub struct Stopwatch {
    engine: Arc<Mutex<StopwatchEngine>>,
    ticker: Option<JoinHandle<()>>,
    tick_period: Duration,
}

impl Stopwatch {
    /// Creates a stopped stopwatch at zero.
    ///
    /// Must be called within a tokio runtime context, since `start()`
    /// spawns the ticker task.
    #[must_use]
    pub fn new(tick_period: Duration) -> Self {
        Self {
            engine: Arc::new(Mutex::new(StopwatchEngine::new())),
            ticker: None,
            tick_period,
        }
    }

    /// Starts accumulating and registers the ticker. No-op while running.
    pub fn start(&mut self) {
        {
            let mut engine = self.engine.lock();
            if engine.is_running() {
                return;
            }
            engine.start(now());
        }
        self.release_ticker();
        let engine = Arc::clone(&self.engine);
        let period = self.tick_period;
        self.ticker = Some(tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            loop {
                interval.tick().await;
                let mut engine = engine.lock();
                if !engine.is_running() {
                    break;
                }
                engine.tick(now());
            }
        }));
    }

    /// Freezes the elapsed value and releases the ticker.
    pub fn pause(&mut self) {
        self.release_ticker();
        self.engine.lock().pause();
    }

    /// Returns to zero, stopped, releasing the ticker if one is live.
    pub fn reset(&mut self) {
        self.release_ticker();
        self.engine.lock().reset();
    }

    /// Overwrites the elapsed value with a sanitized millisecond count.
    /// The UI only offers this while paused; a concurrent tick would
    /// serialize on the engine lock and the last write wins.
    pub fn set_time_ms(&mut self, ms: f64) {
        self.engine.lock().set_time_ms(ms);
    }

    /// Current elapsed time in whole milliseconds.
    #[must_use]
    pub fn elapsed_ms(&self) -> u64 {
        self.engine.lock().elapsed_ms()
    }

    /// Whether the stopwatch is accumulating.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.engine.lock().is_running()
    }

    fn release_ticker(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.abort();
        }
    }
}

impl Drop for Stopwatch {
    fn drop(&mut self) {
        self.release_ticker();
    }
}
