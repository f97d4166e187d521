//! Countdown driver: core engine, scoped ticker task, and the one-shot
//! completion collaborator.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;

use routinely_core::countdown::{CountdownEngine, CountdownTick};

use super::now;

/// Count-down timer handle for a single routine task.
///
/// The completion callback fires at most once per epoch, synchronously with
/// the tick that crossed zero. Callback failures are contained here: a
/// panicking collaborator is caught and discarded, and the engine state —
/// already stopped and latched — stays correct either way.
pub struct Countdown {
    engine: Arc<Mutex<CountdownEngine>>,
    on_complete: Arc<dyn Fn() + Send + Sync>,
    ticker: Option<JoinHandle<()>>,
    tick_period: Duration,
}

impl Countdown {
    /// Creates a stopped countdown armed with `total_seconds`.
    ///
    /// Must be called within a tokio runtime context, since `start()`
    /// spawns the ticker task.
    pub fn new(
        total_seconds: u32,
        tick_period: Duration,
        on_complete: impl Fn() + Send + Sync + 'static,
    ) -> Self {
        Self {
            engine: Arc::new(Mutex::new(CountdownEngine::new(total_seconds))),
            on_complete: Arc::new(on_complete),
            ticker: None,
            tick_period,
        }
    }

    /// Starts (or resumes) the countdown and registers the ticker.
    ///
    /// An exhausted countdown re-arms to its full duration first, so the
    /// user re-triggers the same task without a separate reset. No-op while
    /// running.
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
        let on_complete = Arc::clone(&self.on_complete);
        let period = self.tick_period;
        self.ticker = Some(tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            loop {
                interval.tick().await;
                let outcome = engine.lock().tick(now());
                match outcome {
                    CountdownTick::Running => {}
                    CountdownTick::Completed => {
                        // The engine already stopped itself and latched
                        // completion in the same snapshot; all that is left
                        // is the side effect, then the ticker ends.
                        invoke_completion(&on_complete);
                        break;
                    }
                    CountdownTick::Idle => break,
                }
            }
        }));
    }

    /// Freezes the remaining value and releases the ticker.
    pub fn pause(&mut self) {
        self.release_ticker();
        self.engine.lock().pause();
    }

    /// Returns to the full duration, stopped and not completed, releasing
    /// the ticker if one is live.
    pub fn reset(&mut self) {
        self.release_ticker();
        self.engine.lock().reset();
    }

    /// Remaining time in whole milliseconds.
    #[must_use]
    pub fn remaining_ms(&self) -> u64 {
        self.engine.lock().remaining_ms()
    }

    /// Full epoch duration in whole milliseconds.
    #[must_use]
    pub fn total_ms(&self) -> u64 {
        self.engine.lock().total_ms()
    }

    /// Whether the countdown is draining.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.engine.lock().is_running()
    }

    /// Whether the current epoch has completed.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.engine.lock().is_completed()
    }

    fn release_ticker(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.abort();
        }
    }
}

impl Drop for Countdown {
    fn drop(&mut self) {
        self.release_ticker();
    }
}

/// Fires the completion collaborator, discarding any failure. The timer's
/// own state must remain correct whether or not the side effect succeeds.
fn invoke_completion(on_complete: &Arc<dyn Fn() + Send + Sync>) {
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| on_complete()));
    if result.is_err() {
        tracing::warn!("countdown completion callback panicked; ignoring");
    }
}
