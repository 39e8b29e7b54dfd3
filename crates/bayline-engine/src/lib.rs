//! # bayline-engine
//!
//! Schedule conflict and timeline engine for unloading-bay dispatch.
//!
//! Tracks delivery-driver arrivals at a limited number of unloading bays:
//! detects colliding unloading windows, recognizes when two drivers have
//! exchanged time slots, derives a renderable time axis, and measures the
//! advance notice gained when arrivals slip later. Every computation is a
//! pure, synchronous function over an immutable snapshot — callers re-run
//! them whenever the driver set changes.
//!
//! ## Modules
//!
//! - [`overlap`] — pairwise unloading-window collision detection
//! - [`swap`] — detect exchanged time slots between two assignments
//! - [`timeline`] — display window bounds, tick marks, bar geometry
//! - [`metrics`] — "time unlocked" advance-notice accounting
//! - [`interval`] — half-open window math
//! - [`call`] — reconcile spoken ETA reports into points in time
//! - [`roster`] — mutable original/live roster pair the views derive from
//! - [`driver`] — `Driver`, `DriverWithOverlap`, and the `Eta` validity type
//! - [`config`] — explicit tunables (unload duration, tolerances, floors)
//! - [`error`] — error types

pub mod call;
pub mod config;
pub mod driver;
pub mod error;
pub mod interval;
pub mod metrics;
pub mod overlap;
pub mod roster;
pub mod swap;
pub mod timeline;

pub use call::{reconcile_reported_eta, CallOutcome};
pub use config::ScheduleConfig;
pub use driver::{Driver, DriverWithOverlap, Eta};
pub use error::ScheduleError;
pub use interval::UnloadWindow;
pub use metrics::{format_unlocked, total_unlocked_minutes, unlocked_minutes};
pub use overlap::find_overlaps;
pub use roster::{NewDriver, ScheduleBoard};
pub use swap::{detect_swaps, SwapInfo};
pub use timeline::{
    minutes_from_start, place_bar, timeline_config, timeline_config_at, BarPlacement,
    TimelineConfig,
};
