//! Half-open interval math for unloading windows.
//!
//! A window is `[start, start + duration)`. Two windows that exactly touch
//! (one ends where the other begins) do NOT intersect.

use chrono::{DateTime, Duration, Utc};

/// The fixed-duration interval a driver occupies a bay after arrival.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnloadWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl UnloadWindow {
    /// Build the window `[start, start + unload_minutes)`.
    pub fn starting_at(start: DateTime<Utc>, unload_minutes: i64) -> Self {
        Self {
            start,
            end: start + Duration::minutes(unload_minutes),
        }
    }

    /// Half-open membership: `start <= instant < end`.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant < self.end
    }

    /// Two intervals intersect iff `a.start < b.end && b.start < a.end`.
    /// This excludes the adjacent case where one ends exactly at the
    /// other's start.
    pub fn intersects(&self, other: &UnloadWindow) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Length of the intersection in minutes, 0 when disjoint.
    pub fn overlap_minutes(&self, other: &UnloadWindow) -> i64 {
        if !self.intersects(other) {
            return 0;
        }
        let overlap_start = self.start.max(other.start);
        let overlap_end = self.end.min(other.end);
        (overlap_end - overlap_start).num_minutes()
    }
}
