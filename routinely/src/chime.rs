//! Completion chime: a short terminal-bell sequence.
//!
//! This is a fire-and-forget collaborator. Any failure — an unwritable
//! terminal, a muted emulator — is swallowed at the point of invocation;
//! the timers' state is correct whether or not the bell rang, and no error
//! is surfaced to the user.

use std::io::Write;
use std::time::Duration;

/// Plays `count` bells with `gap` between them, on a background task.
pub fn play(count: u32, gap: Duration) {
    if count == 0 {
        return;
    }
    tokio::spawn(async move {
        for index in 0..count {
            if index > 0 {
                tokio::time::sleep(gap).await;
            }
            ring();
        }
    });
}

/// Rings the terminal bell once. Failure is silence.
fn ring() {
    let mut out = std::io::stdout();
    if out.write_all(b"\x07").and_then(|()| out.flush()).is_err() {
        tracing::debug!("terminal bell unavailable");
    }
}
