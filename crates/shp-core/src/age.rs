//! Compact age formatting, matching what kubectl prints in its AGE column.

use chrono::TimeDelta;

/// Format `elapsed` using its single largest whole unit: `45s`, `12m`, `3h`, `5d`, `2y`.
///
/// A delta up to one second negative is treated as clock skew and rendered as
/// `0s`. Anything further in the future is `<invalid>`.
pub fn short_human_duration(elapsed: TimeDelta) -> String {
    let seconds = elapsed.num_seconds();
    if seconds < -1 {
        return "<invalid>".to_string();
    }
    if seconds < 0 {
        return "0s".to_string();
    }
    if seconds < 60 {
        return format!("{seconds}s");
    }

    let minutes = elapsed.num_minutes();
    if minutes < 60 {
        return format!("{minutes}m");
    }

    let hours = elapsed.num_hours();
    if hours < 24 {
        return format!("{hours}h");
    }
    if hours < 24 * 365 {
        return format!("{}d", hours / 24);
    }

    format!("{}y", hours / 24 / 365)
}
