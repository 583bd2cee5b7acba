//! Display formatting for route distance and duration.

/// Miles per kilometer.
pub const MILES_PER_KM: f64 = 0.621371;

const SECONDS_PER_HOUR: u64 = 3600;
const SECONDS_PER_MINUTE: u64 = 60;

/// Meters as miles with one decimal place, no unit suffix.
pub fn format_distance(meters: f64) -> String {
    let miles = meters / 1000.0 * MILES_PER_KM;
    format!("{:.1}", miles)
}

/// Seconds as `1h 2m 3s`, omitting zero components.
///
/// The total is rounded to whole seconds before it is split, so a remainder
/// like 59.6s carries into the minutes instead of printing `60s`. A zero
/// duration prints `0s`. Negative and non-finite inputs count as zero.
pub fn format_duration(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.round() as u64
    } else {
        0
    };

    let hours = total / SECONDS_PER_HOUR;
    let minutes = (total % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;
    let secs = total % SECONDS_PER_MINUTE;

    let mut parts = Vec::with_capacity(3);
    if hours > 0 {
        parts.push(format!("{}h", hours));
    }
    if minutes > 0 {
        parts.push(format!("{}m", minutes));
    }
    if parts.is_empty() || secs > 0 {
        parts.push(format!("{}s", secs));
    }

    parts.join(" ")
}
