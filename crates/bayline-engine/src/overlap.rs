//! Detect drivers whose unloading windows collide.
//!
//! Pairwise comparison over the full driver set. Output order matches input
//! order, and each driver's conflict list preserves the order in which the
//! colliding drivers were encountered during the scan.

use crate::config::ScheduleConfig;
use crate::driver::{Driver, DriverWithOverlap};
use crate::interval::UnloadWindow;

/// Annotate every driver with the ids of the other drivers whose unloading
/// windows intersect its own.
///
/// Drivers with an unknown ETA pass through unchanged with an empty conflict
/// list and are invisible to other drivers' scans. A driver never lists
/// itself. Windows that exactly touch are not conflicts.
pub fn find_overlaps(drivers: &[Driver], config: &ScheduleConfig) -> Vec<DriverWithOverlap> {
    drivers
        .iter()
        .map(|driver| {
            let overlaps_with = match driver.eta.instant() {
                Some(start) => {
                    let window = UnloadWindow::starting_at(start, config.unload_minutes);
                    drivers
                        .iter()
                        .filter(|other| other.id != driver.id)
                        .filter_map(|other| {
                            let other_start = other.eta.instant()?;
                            let other_window =
                                UnloadWindow::starting_at(other_start, config.unload_minutes);
                            window.intersects(&other_window).then(|| other.id.clone())
                        })
                        .collect()
                }
                None => Vec::new(),
            };

            DriverWithOverlap {
                driver: driver.clone(),
                overlaps_with,
            }
        })
        .collect()
}
