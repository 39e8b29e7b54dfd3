//! Engine tunables, passed explicitly instead of living as process-wide
//! constants so callers and tests can vary them per invocation.

/// Configuration shared by the overlap, swap, timeline, and metrics
/// computations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScheduleConfig {
    /// How long a driver occupies a bay after arrival, in minutes.
    /// One value for all drivers.
    pub unload_minutes: i64,
    /// Two ETAs closer than this are treated as the same slot when
    /// detecting swaps.
    pub swap_tolerance_seconds: i64,
    /// The timeline window never shrinks below this many minutes.
    pub min_window_minutes: i64,
    /// Span of the fallback window rendered when no driver has a usable ETA.
    pub empty_window_hours: i64,
    /// Horizontal scale factor handed to bar-positioning consumers.
    pub pixels_per_minute: f64,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            unload_minutes: 30,
            swap_tolerance_seconds: 60,
            min_window_minutes: 240,
            empty_window_hours: 12,
            pixels_per_minute: 2.0,
        }
    }
}

impl ScheduleConfig {
    /// Config with a non-default unloading window, other values unchanged.
    pub fn with_unload_minutes(unload_minutes: i64) -> Self {
        Self {
            unload_minutes,
            ..Self::default()
        }
    }
}
