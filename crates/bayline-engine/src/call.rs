//! Reconcile a driver's spoken ETA report into a point in time.
//!
//! The outbound call integration itself is an external collaborator; what
//! lands here is the pure part — a driver reports a 4-digit wall-clock time
//! ("2200") with no date attached, and the engine anchors it to the date of
//! the ETA already on file, shifting a day when the raw reading would land
//! implausibly far from it.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::driver::Eta;
use crate::error::{Result, ScheduleError};

/// What the call service resolved for one driver. The engine only consumes
/// `updated_eta`; how it was obtained is opaque.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallOutcome {
    pub updated_eta: Eta,
    pub delay_reason: String,
}

impl CallOutcome {
    /// Build an outcome from a raw `"HHMM"` report, anchored to the
    /// previous ETA.
    pub fn from_report(reported: &str, previous: DateTime<Utc>) -> Result<Self> {
        Ok(Self {
            updated_eta: reconcile_reported_eta(reported, previous)?.into(),
            delay_reason: "Updated based on driver's response".to_string(),
        })
    }
}

/// Interpret a 4-digit `"HHMM"` wall-clock report relative to the previous
/// ETA.
///
/// The reported time is placed on the previous ETA's date, then shifted by
/// one day when it lands more than 12 hours before the previous ETA (the
/// driver means tomorrow) or more than 12 hours after it (the driver means
/// yesterday).
///
/// # Errors
///
/// `ScheduleError::InvalidTimestamp` when the report is not exactly four
/// digits or encodes an out-of-range hour or minute.
pub fn reconcile_reported_eta(reported: &str, previous: DateTime<Utc>) -> Result<DateTime<Utc>> {
    let reported = reported.trim();
    if reported.len() != 4 || !reported.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ScheduleError::InvalidTimestamp(reported.to_string()));
    }

    let hours: u32 = reported[..2]
        .parse()
        .map_err(|_| ScheduleError::InvalidTimestamp(reported.to_string()))?;
    let minutes: u32 = reported[2..]
        .parse()
        .map_err(|_| ScheduleError::InvalidTimestamp(reported.to_string()))?;

    let candidate = previous
        .date_naive()
        .and_hms_opt(hours, minutes, 0)
        .ok_or_else(|| ScheduleError::InvalidTimestamp(reported.to_string()))?
        .and_utc();

    let offset = candidate - previous;
    let half_day = Duration::hours(12);
    if offset < -half_day {
        Ok(candidate + Duration::days(1))
    } else if offset > half_day {
        Ok(candidate - Duration::days(1))
    } else {
        Ok(candidate)
    }
}
