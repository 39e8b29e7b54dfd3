//! Driver entities and the `Eta` validity type.
//!
//! An arrival time that fails to parse is data, not an error: it becomes
//! [`Eta::Unknown`] and every computation in this crate treats it as
//! "exclude from comparison, keep the driver visible". No comparison path
//! ever panics or returns an error over an unreadable ETA.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A driver's estimated arrival, or the absence of a usable one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Eta {
    /// A concrete point in time, UTC.
    At(DateTime<Utc>),
    /// Missing or unparsable. Excluded from overlap, timeline, and metric
    /// comparisons; the owning driver still appears in outputs.
    #[default]
    Unknown,
}

impl Eta {
    /// Parse a datetime string into an `Eta`.
    ///
    /// Accepts RFC 3339 (with timezone offset, e.g., "2026-02-17T14:00:00Z")
    /// and naive local time (e.g., "2026-02-17T14:00:00"), which is
    /// interpreted as UTC. Anything else is `Unknown` — never an error.
    pub fn parse(s: &str) -> Self {
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Eta::At(dt.with_timezone(&Utc));
        }
        match NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
            Ok(ndt) => Eta::At(ndt.and_utc()),
            Err(_) => Eta::Unknown,
        }
    }

    /// The underlying instant, if one is known.
    pub fn instant(&self) -> Option<DateTime<Utc>> {
        match self {
            Eta::At(dt) => Some(*dt),
            Eta::Unknown => None,
        }
    }
}

impl From<DateTime<Utc>> for Eta {
    fn from(dt: DateTime<Utc>) -> Self {
        Eta::At(dt)
    }
}

impl Serialize for Eta {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Eta::At(dt) => serializer.serialize_some(&dt.to_rfc3339()),
            Eta::Unknown => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for Eta {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // `null`, absent-with-default, and unparsable strings all land on
        // Unknown; deserialization of a roster never fails over a bad ETA.
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().map_or(Eta::Unknown, Eta::parse))
    }
}

/// A delivery driver as the dispatcher tracks them. Owned by the caller;
/// the engine only reads it and returns derived values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Driver {
    /// Opaque unique identifier, stable across edits.
    pub id: String,
    pub name: String,
    pub phone: String,
    /// Where the driver is headed. Used to disambiguate genuine slot swaps
    /// from coincidental time collisions.
    pub destination: String,
    #[serde(default)]
    pub eta: Eta,
}

/// A driver plus the ids of other drivers whose unloading windows intersect
/// its own, in the order they were encountered while scanning the input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverWithOverlap {
    #[serde(flatten)]
    pub driver: Driver,
    pub overlaps_with: Vec<String>,
}

impl DriverWithOverlap {
    pub fn has_conflict(&self) -> bool {
        !self.overlaps_with.is_empty()
    }
}
