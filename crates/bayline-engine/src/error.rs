//! Error types for bayline-engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScheduleError {
    /// A value that should denote a point in time could not be read as one.
    ///
    /// Comparison paths never produce this — an unreadable ETA becomes
    /// [`Eta::Unknown`](crate::driver::Eta::Unknown) and is excluded from
    /// computation. Only parse boundaries (driver-call reports) surface it.
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
