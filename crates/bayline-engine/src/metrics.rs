//! "Time unlocked" metrics — advance notice gained when arrivals slip later
//! than originally planned.
//!
//! Only later arrivals count: a driver arriving earlier than planned, or one
//! with an unknown ETA on either side, contributes zero. Negative unlocked
//! time never surfaces.

use crate::driver::Driver;

/// Minutes of advance notice gained for one driver.
///
/// `max(0, current.eta - original.eta)` in minutes when both ETAs are known
/// and the ids match; 0 otherwise.
pub fn unlocked_minutes(original: &Driver, current: &Driver) -> i64 {
    if original.id != current.id {
        return 0;
    }
    match (original.eta.instant(), current.eta.instant()) {
        (Some(original_eta), Some(current_eta)) => {
            (current_eta - original_eta).num_minutes().max(0)
        }
        _ => 0,
    }
}

/// Sum of per-driver unlocked minutes across the current set, matched by id
/// against the original set. Drivers without a matching original contribute 0.
pub fn total_unlocked_minutes(original: &[Driver], current: &[Driver]) -> i64 {
    current
        .iter()
        .map(|driver| {
            original
                .iter()
                .find(|o| o.id == driver.id)
                .map_or(0, |o| unlocked_minutes(o, driver))
        })
        .sum()
}

/// Render minutes as `"{h}h {m}m"` when hours are present, else `"{m}m"`.
pub fn format_unlocked(minutes: i64) -> String {
    let hours = minutes / 60;
    let remainder = minutes % 60;
    if hours > 0 {
        format!("{}h {}m", hours, remainder)
    } else {
        format!("{}m", remainder)
    }
}
