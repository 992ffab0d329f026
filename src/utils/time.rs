//! Time utilities

use std::time::{Duration, Instant};

/// Run `f` and return its output together with the elapsed nanoseconds.
///
/// Uses the monotonic clock, so wall-clock adjustments never skew a
/// measurement. Durations beyond `u64::MAX` nanoseconds saturate.
#[inline]
pub fn time_nanos<T>(f: impl FnOnce() -> T) -> (T, u64) {
    let start = Instant::now();
    let output = f();
    let elapsed = start.elapsed();
    (output, duration_nanos(elapsed))
}

/// Convert a duration to whole nanoseconds, saturating at `u64::MAX`
pub fn duration_nanos(duration: Duration) -> u64 {
    u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX)
}

/// Format a nanosecond count as a human-readable string
pub fn format_nanos(nanos: f64) -> String {
    if !nanos.is_finite() || nanos < 0.0 {
        return "n/a".to_string();
    }

    if nanos < 1_000.0 {
        format!("{:.0}ns", nanos)
    } else if nanos < 1_000_000.0 {
        format!("{:.2}µs", nanos / 1_000.0)
    } else if nanos < 1_000_000_000.0 {
        format!("{:.2}ms", nanos / 1_000_000.0)
    } else {
        format!("{:.2}s", nanos / 1_000_000_000.0)
    }
}
