//! Pure time-formatting utilities.
//!
//! Everything here is stateless and total: callers hand in milliseconds and
//! get display strings back. Engines already clamp their values at zero, so
//! negative input is not part of the contract.

/// Formats milliseconds as a clock string, floored to whole seconds.
///
/// Below one hour this renders `"MM:SS"`; at or above one hour (or when
/// `pad_hours` is set) it renders `"H:MM:SS"`, with the hour field
/// zero-padded to two digits only when `pad_hours` is set.
#[must_use]
pub fn format_clock(total_ms: u64, pad_hours: bool) -> String {
    let total_seconds = total_ms / 1000;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    if hours > 0 || pad_hours {
        if pad_hours {
            format!("{hours:02}:{minutes:02}:{seconds:02}")
        } else {
            format!("{hours}:{minutes:02}:{seconds:02}")
        }
    } else {
        format!("{minutes:02}:{seconds:02}")
    }
}

/// The two display fields of the stopwatch readout.
///
/// `main` carries the integer-second clock; `hundredths` is the sub-second
/// field, recomputed every tick and rendered smaller by the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopwatchDisplay {
    /// Integer-second portion, formatted like [`format_clock`].
    pub main: String,
    /// Hundredths of the current second, always two digits.
    pub hundredths: String,
}

/// Splits milliseconds into the stopwatch's main clock and hundredths
/// fields.
#[must_use]
pub fn format_stopwatch_display(total_ms: u64, pad_hours: bool) -> StopwatchDisplay {
    let hundredths = (total_ms % 1000) / 10;
    StopwatchDisplay {
        main: format_clock(total_ms, pad_hours),
        hundredths: format!("{hundredths:02}"),
    }
}

/// Percentage of the current 60-second cycle that has elapsed, in
/// `[0, 100)`.
///
/// This is a cyclical indicator that restarts every minute by design — it
/// is not progress toward any completion target.
#[must_use]
pub fn minute_progress(elapsed_ms: u64) -> f64 {
    let minute_seconds = (elapsed_ms / 1000) % 60;
    #[allow(clippy::cast_precision_loss)]
    let fraction = minute_seconds as f64 / 60.0;
    fraction * 100.0
}

/// Clamps arbitrary user input to a valid non-negative integer millisecond
/// count: negative and NaN become 0, fractional values round to the nearest
/// integer, and overflow saturates.
///
/// This is a permissive-input policy, not validation — malformed input is
/// never an error.
#[must_use]
pub fn sanitize_ms(ms: f64) -> u64 {
    // Saturating float-to-int cast: NaN -> 0, negative -> 0, +inf -> MAX.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let clamped = ms.round() as u64;
    clamped
}

/// Parses a clock-format string (`"SS"`, `"MM:SS"`, or `"HH:MM:SS"`) into
/// milliseconds. Used by the paused-stopwatch edit box.
///
/// Returns `None` for anything that is not a well-formed clock string;
/// trailing fields must stay below 60.
#[must_use]
pub fn parse_clock(input: &str) -> Option<u64> {
    let parts: Vec<&str> = input.trim().split(':').collect();
    if parts.is_empty() || parts.len() > 3 {
        return None;
    }

    let mut total_seconds: u64 = 0;
    for (index, part) in parts.iter().enumerate() {
        let field: u64 = part.trim().parse().ok()?;
        // Only the leading field may exceed 59 ("90" is ninety seconds,
        // "1:90" is malformed).
        if index > 0 && field >= 60 {
            return None;
        }
        total_seconds = total_seconds.checked_mul(60)?.checked_add(field)?;
    }
    total_seconds.checked_mul(1000)
}
