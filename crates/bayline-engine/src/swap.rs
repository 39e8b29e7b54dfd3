//! Detect pairs of drivers who have exchanged time slots.
//!
//! Compares an original arrival-time assignment against the current
//! (possibly edited) one. Two drivers have swapped when each now sits within
//! tolerance of the other's original slot and both share a destination —
//! the destination guard keeps two unrelated drivers who coincidentally
//! landed near each other's old times from reading as a swap.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::config::ScheduleConfig;
use crate::driver::Driver;

/// Records that `original_id` now occupies the slot that historically
/// belonged to `new_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapInfo {
    pub original_id: String,
    pub new_id: String,
}

/// Find drivers who have exchanged time slots between the two assignments.
///
/// A current driver qualifies when its ETA moved at least
/// `swap_tolerance_seconds` from its original, and some other current driver
/// with the same destination sits within tolerance of its original slot
/// while it sits within tolerance of theirs (a true two-way exchange).
///
/// The returned map carries an entry under **both** participants' ids, so a
/// full pair is reachable from either side. Candidates are scanned in input
/// order and the first match wins; a driver already paired is skipped, so
/// each driver participates in at most one swap.
///
/// Drivers missing from either set, or with unknown ETAs, contribute
/// nothing.
pub fn detect_swaps(
    original: &[Driver],
    current: &[Driver],
    config: &ScheduleConfig,
) -> HashMap<String, SwapInfo> {
    let originals: HashMap<&str, &Driver> =
        original.iter().map(|d| (d.id.as_str(), d)).collect();

    let mut swaps: HashMap<String, SwapInfo> = HashMap::new();

    for driver in current {
        if swaps.contains_key(&driver.id) {
            continue;
        }
        let Some(current_eta) = driver.eta.instant() else {
            continue;
        };
        let Some(original_eta) = originals
            .get(driver.id.as_str())
            .and_then(|d| d.eta.instant())
        else {
            continue;
        };
        if within_tolerance(current_eta, original_eta, config.swap_tolerance_seconds) {
            // Hasn't moved far enough to have left its own slot.
            continue;
        }

        let partner = current.iter().find(|other| {
            if other.id == driver.id
                || swaps.contains_key(&other.id)
                || other.destination != driver.destination
            {
                return false;
            }
            let Some(other_eta) = other.eta.instant() else {
                return false;
            };
            let Some(other_original_eta) = originals
                .get(other.id.as_str())
                .and_then(|d| d.eta.instant())
            else {
                return false;
            };
            // Each driver must now sit in the other's original slot.
            within_tolerance(other_eta, original_eta, config.swap_tolerance_seconds)
                && within_tolerance(current_eta, other_original_eta, config.swap_tolerance_seconds)
        });

        if let Some(partner) = partner {
            swaps.insert(
                driver.id.clone(),
                SwapInfo {
                    original_id: driver.id.clone(),
                    new_id: partner.id.clone(),
                },
            );
            swaps.insert(
                partner.id.clone(),
                SwapInfo {
                    original_id: partner.id.clone(),
                    new_id: driver.id.clone(),
                },
            );
        }
    }

    swaps
}

fn within_tolerance(
    a: chrono::DateTime<chrono::Utc>,
    b: chrono::DateTime<chrono::Utc>,
    tolerance_seconds: i64,
) -> bool {
    (a - b).num_seconds().abs() < tolerance_seconds
}
