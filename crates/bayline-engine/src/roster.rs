//! In-memory roster state for a dispatch session.
//!
//! Holds the original (planned) and live (current) driver sets side by side.
//! Edits mutate the board; every derived view — overlaps, swaps, timeline,
//! metrics — is recomputed from the current snapshots by the pure functions
//! in this crate, never cached here.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::call::CallOutcome;
use crate::driver::{Driver, Eta};

/// Driver fields supplied by the dispatcher; the board generates the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewDriver {
    pub name: String,
    pub phone: String,
    pub destination: String,
    #[serde(default)]
    pub eta: Eta,
}

/// The dispatcher's two rosters: the plan as it stood, and the plan as it is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleBoard {
    original: Vec<Driver>,
    live: Vec<Driver>,
}

impl ScheduleBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed both rosters, e.g. from a saved schedule.
    pub fn from_rosters(original: Vec<Driver>, live: Vec<Driver>) -> Self {
        Self { original, live }
    }

    pub fn original(&self) -> &[Driver] {
        &self.original
    }

    pub fn live(&self) -> &[Driver] {
        &self.live
    }

    /// Append to the live roster with a generated id; returns the id.
    pub fn add_live(&mut self, driver: NewDriver) -> String {
        Self::push(&mut self.live, driver)
    }

    /// Append to the original roster with a generated id; returns the id.
    pub fn add_original(&mut self, driver: NewDriver) -> String {
        Self::push(&mut self.original, driver)
    }

    /// Drop a live driver by id; unknown ids are a no-op.
    pub fn remove_live(&mut self, id: &str) {
        self.live.retain(|d| d.id != id);
    }

    /// Drop an original driver by id; unknown ids are a no-op.
    pub fn remove_original(&mut self, id: &str) {
        self.original.retain(|d| d.id != id);
    }

    /// Replace a live driver's ETA. Returns false when the id is unknown.
    pub fn update_live_eta(&mut self, id: &str, eta: Eta) -> bool {
        Self::set_eta(&mut self.live, id, eta)
    }

    /// Replace an original driver's ETA. Returns false when the id is unknown.
    pub fn update_original_eta(&mut self, id: &str, eta: Eta) -> bool {
        Self::set_eta(&mut self.original, id, eta)
    }

    /// Apply a call service result to the live roster. Returns false when
    /// the id is unknown.
    pub fn apply_call_outcome(&mut self, id: &str, outcome: &CallOutcome) -> bool {
        Self::set_eta(&mut self.live, id, outcome.updated_eta)
    }

    /// Start a new schedule: both rosters emptied.
    pub fn clear(&mut self) {
        self.original.clear();
        self.live.clear();
    }

    fn push(roster: &mut Vec<Driver>, driver: NewDriver) -> String {
        let id = Uuid::new_v4().to_string();
        roster.push(Driver {
            id: id.clone(),
            name: driver.name,
            phone: driver.phone,
            destination: driver.destination,
            eta: driver.eta,
        });
        id
    }

    fn set_eta(roster: &mut [Driver], id: &str, eta: Eta) -> bool {
        match roster.iter_mut().find(|d| d.id == id) {
            Some(driver) => {
                driver.eta = eta;
                true
            }
            None => false,
        }
    }
}
