//! WASM bindings for bayline-engine.
//!
//! Exposes overlap detection, swap detection, timeline configuration, and
//! unlocked-time metrics to JavaScript via `wasm-bindgen`. All complex types
//! cross the boundary as JSON strings; datetimes are RFC 3339. A driver's
//! `eta` may be `null` or unparsable — it comes back as `null` and the
//! driver is excluded from comparisons, never an error.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p bayline-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir pkg/ \
//!   target/wasm32-unknown-unknown/release/bayline_wasm.wasm
//! ```

use chrono::{DateTime, NaiveDateTime, Utc};
use wasm_bindgen::prelude::*;

use bayline_engine::{Driver, ScheduleConfig};

// ---------------------------------------------------------------------------
// Helpers: parse JSON payloads from JavaScript
// ---------------------------------------------------------------------------

/// Parse an ISO 8601 datetime string into `DateTime<Utc>`.
///
/// Accepts both RFC 3339 (with timezone offset, e.g., "2026-02-17T14:00:00Z")
/// and naive local time (e.g., "2026-02-17T14:00:00"), which is interpreted
/// as UTC.
fn parse_datetime(s: &str) -> Result<DateTime<Utc>, JsValue> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .map(|ndt| ndt.and_utc())
        .map_err(|e| JsValue::from_str(&format!("Invalid datetime '{}': {}", s, e)))
}

/// Parse a JSON array of driver objects.
fn parse_drivers_json(json: &str) -> Result<Vec<Driver>, JsValue> {
    serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid drivers JSON: {}", e)))
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Annotate every driver with the ids of other drivers whose unloading
/// windows intersect its own.
///
/// `drivers_json` must be a JSON array of driver objects. Returns a JSON
/// string of the same drivers, in order, each carrying an `overlapsWith`
/// array of ids. Drivers with a `null` or unparsable `eta` come back with an
/// empty `overlapsWith`.
#[wasm_bindgen(js_name = "computeOverlaps")]
pub fn compute_overlaps(drivers_json: &str) -> Result<String, JsValue> {
    let drivers = parse_drivers_json(drivers_json)?;
    let annotated = bayline_engine::find_overlaps(&drivers, &ScheduleConfig::default());
    to_json(&annotated)
}

/// Detect drivers who exchanged time slots between two rosters.
///
/// Both arguments are JSON arrays of driver objects. Returns a JSON object
/// keyed by driver id; a detected exchange appears under both participants'
/// ids, each entry carrying `originalId` and `newId`.
#[wasm_bindgen(js_name = "detectSwaps")]
pub fn detect_swaps(original_json: &str, current_json: &str) -> Result<String, JsValue> {
    let original = parse_drivers_json(original_json)?;
    let current = parse_drivers_json(current_json)?;
    let swaps = bayline_engine::detect_swaps(&original, &current, &ScheduleConfig::default());
    to_json(&swaps)
}

/// Compute the display window and hourly tick marks for a roster.
///
/// `drivers_json` is a JSON array of driver objects; `now` is an ISO 8601
/// datetime string anchoring the fallback window used when no driver has a
/// usable ETA. Returns a JSON `TimelineConfig` object with `startTime`,
/// `endTime`, `totalMinutes`, `timeSlots`, and `pixelsPerMinute`.
#[wasm_bindgen(js_name = "timelineConfig")]
pub fn timeline_config(drivers_json: &str, now: &str) -> Result<String, JsValue> {
    let drivers = parse_drivers_json(drivers_json)?;
    let anchor = parse_datetime(now)?;
    let config = ScheduleConfig::default();
    let annotated = bayline_engine::find_overlaps(&drivers, &config);
    let timeline = bayline_engine::timeline_config_at(&annotated, anchor, &config);
    to_json(&timeline)
}

/// Total minutes of advance notice gained by arrivals that slipped later,
/// matched by driver id between the two rosters.
///
/// Returns a JSON object `{ "totalMinutes": n, "formatted": "1h 45m" }`.
#[wasm_bindgen(js_name = "totalUnlockedMinutes")]
pub fn total_unlocked_minutes(
    original_json: &str,
    current_json: &str,
) -> Result<String, JsValue> {
    let original = parse_drivers_json(original_json)?;
    let current = parse_drivers_json(current_json)?;
    let total = bayline_engine::total_unlocked_minutes(&original, &current);
    to_json(&serde_json::json!({
        "totalMinutes": total,
        "formatted": bayline_engine::format_unlocked(total),
    }))
}
