//! Display formatting for cooldown wait times.
//!
//! All user-visible duration formatting goes through this module so the
//! cooldown reply reads the same everywhere.

use std::time::Duration;

/// Format a remaining wait as the largest two applicable units.
///
/// - `>= 1 hour`: `Xh Ym`
/// - `>= 1 minute`: `Xm Ys`
/// - below that: whole seconds
///
/// Values are truncated, not rounded: a remaining 59.9s displays as `59s`.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use supply_signal_types::formatting::format_wait;
/// assert_eq!(format_wait(Duration::from_secs(3900)), "1h 5m");
/// assert_eq!(format_wait(Duration::from_secs(150)), "2m 30s");
/// assert_eq!(format_wait(Duration::from_secs_f32(59.9)), "59s");
/// ```
pub fn format_wait(remaining: Duration) -> String {
    let total_secs = remaining.as_secs();
    if total_secs >= 3600 {
        format!("{}h {}m", total_secs / 3600, (total_secs % 3600) / 60)
    } else if total_secs >= 60 {
        format!("{}m {}s", total_secs / 60, total_secs % 60)
    } else {
        format!("{}s", total_secs)
    }
}
