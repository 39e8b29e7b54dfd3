//! Compute the display window and tick marks for rendering arrivals on a
//! shared time axis.
//!
//! The window covers every driver's unloading window plus padding, never
//! shrinks below a configured floor, and falls back to a fixed span anchored
//! at the current hour when there is nothing to show. Bar-positioning
//! helpers live here too, including the cross-midnight normalization that
//! governs every consumer of `start_time`.

use chrono::{DateTime, Duration, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::config::ScheduleConfig;
use crate::driver::{DriverWithOverlap, Eta};

/// A renderable display window: bounds, span, and hourly tick marks.
///
/// Recomputed whenever the driver set changes; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineConfig {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub total_minutes: i64,
    /// Hourly ticks from `start_time` through `end_time` inclusive.
    pub time_slots: Vec<DateTime<Utc>>,
    pub pixels_per_minute: f64,
}

/// Percentage geometry for one driver's bar on the axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarPlacement {
    pub left_pct: f64,
    pub width_pct: f64,
}

/// Compute the display window for the given drivers, anchored at `now` when
/// no driver has a usable ETA.
///
/// A pure function of its inputs: identical inputs (including identical
/// unknown-ETA drivers) always produce identical output.
///
/// - With no usable ETAs: the window starts at the top of `now`'s hour and
///   spans `empty_window_hours`.
/// - Otherwise: every known ETA and its unloading end are boundary
///   candidates. `start_time` is the top-of-hour at or before the earliest
///   candidate; `end_time` is the top-of-hour at or after the latest, plus
///   one padding hour, extended in whole hours until the span reaches
///   `min_window_minutes`.
pub fn timeline_config_at(
    drivers: &[DriverWithOverlap],
    now: DateTime<Utc>,
    config: &ScheduleConfig,
) -> TimelineConfig {
    let instants: Vec<DateTime<Utc>> = drivers
        .iter()
        .filter_map(|d| d.driver.eta.instant())
        .collect();

    if instants.is_empty() {
        return empty_window(now, config);
    }

    let unload = Duration::minutes(config.unload_minutes);
    let mut earliest = instants[0];
    let mut latest = instants[0] + unload;
    for &eta in &instants[1..] {
        earliest = earliest.min(eta);
        latest = latest.max(eta + unload);
    }

    let start_time = top_of_hour(earliest);
    let mut end_time = ceil_to_hour(latest) + Duration::hours(1);

    let floor = Duration::minutes(config.min_window_minutes);
    while end_time - start_time < floor {
        end_time += Duration::hours(1);
    }

    TimelineConfig {
        start_time,
        end_time,
        total_minutes: (end_time - start_time).num_minutes(),
        time_slots: hourly_slots(start_time, end_time),
        pixels_per_minute: config.pixels_per_minute,
    }
}

/// [`timeline_config_at`] anchored at the current instant.
pub fn timeline_config(drivers: &[DriverWithOverlap], config: &ScheduleConfig) -> TimelineConfig {
    timeline_config_at(drivers, Utc::now(), config)
}

/// Minutes from the window start to `instant`, normalized for schedules
/// that cross midnight.
///
/// A negative difference gains 24h under the assumption that no single
/// schedule spans more than a day. Every bar-positioning consumer of
/// `start_time` must go through this.
pub fn minutes_from_start(instant: DateTime<Utc>, start_time: DateTime<Utc>) -> i64 {
    let minutes = (instant - start_time).num_minutes();
    if minutes < 0 {
        minutes + 24 * 60
    } else {
        minutes
    }
}

/// Percentage offset and width for a driver's bar, `None` when the ETA is
/// unknown (the driver is hidden from the axis, not an error).
pub fn place_bar(
    eta: &Eta,
    timeline: &TimelineConfig,
    config: &ScheduleConfig,
) -> Option<BarPlacement> {
    let instant = eta.instant()?;
    let offset = minutes_from_start(instant, timeline.start_time);
    let total = timeline.total_minutes as f64;
    Some(BarPlacement {
        left_pct: offset as f64 / total * 100.0,
        width_pct: config.unload_minutes as f64 / total * 100.0,
    })
}

fn empty_window(now: DateTime<Utc>, config: &ScheduleConfig) -> TimelineConfig {
    let start_time = top_of_hour(now);
    let end_time = start_time + Duration::hours(config.empty_window_hours);
    TimelineConfig {
        start_time,
        end_time,
        total_minutes: config.empty_window_hours * 60,
        time_slots: hourly_slots(start_time, end_time),
        pixels_per_minute: config.pixels_per_minute,
    }
}

/// Truncate to the top of the hour.
fn top_of_hour(dt: DateTime<Utc>) -> DateTime<Utc> {
    dt - Duration::minutes(dt.minute() as i64)
        - Duration::seconds(dt.second() as i64)
        - Duration::nanoseconds(dt.nanosecond() as i64)
}

/// Round up to the top of the hour; an instant already on the hour is kept.
fn ceil_to_hour(dt: DateTime<Utc>) -> DateTime<Utc> {
    let floored = top_of_hour(dt);
    if floored == dt {
        floored
    } else {
        floored + Duration::hours(1)
    }
}

fn hourly_slots(start: DateTime<Utc>, end: DateTime<Utc>) -> Vec<DateTime<Utc>> {
    let mut slots = Vec::new();
    let mut cursor = start;
    while cursor <= end {
        slots.push(cursor);
        cursor += Duration::hours(1);
    }
    slots
}
