//! Tests for the schedule board — the mutable roster pair the pure views
//! derive from.

use bayline_engine::{
    find_overlaps, CallOutcome, Eta, NewDriver, ScheduleBoard, ScheduleConfig,
};
use chrono::{TimeZone, Utc};

fn new_driver(name: &str, hour: u32, min: u32) -> NewDriver {
    NewDriver {
        name: name.to_string(),
        phone: "(555) 777-8888".to_string(),
        destination: "Dock D".to_string(),
        eta: Eta::At(Utc.with_ymd_and_hms(2026, 3, 1, hour, min, 0).unwrap()),
    }
}

#[test]
fn added_drivers_keep_insertion_order_and_unique_ids() {
    let mut board = ScheduleBoard::new();

    let first = board.add_live(new_driver("John Smith", 9, 0));
    let second = board.add_live(new_driver("Sarah Johnson", 9, 30));

    assert_ne!(first, second);
    assert_eq!(board.live().len(), 2);
    assert_eq!(board.live()[0].id, first);
    assert_eq!(board.live()[0].name, "John Smith");
    assert_eq!(board.live()[1].id, second);
    assert!(board.original().is_empty());
}

#[test]
fn rosters_are_independent() {
    let mut board = ScheduleBoard::new();

    board.add_original(new_driver("Mike Wilson", 10, 0));
    board.add_live(new_driver("Emily Davis", 11, 0));

    assert_eq!(board.original().len(), 1);
    assert_eq!(board.live().len(), 1);
    assert_eq!(board.original()[0].name, "Mike Wilson");
    assert_eq!(board.live()[0].name, "Emily Davis");
}

#[test]
fn remove_drops_by_id_and_ignores_unknown_ids() {
    let mut board = ScheduleBoard::new();
    let id = board.add_live(new_driver("John Smith", 9, 0));
    board.add_live(new_driver("Sarah Johnson", 9, 30));

    board.remove_live(&id);
    assert_eq!(board.live().len(), 1);
    assert_eq!(board.live()[0].name, "Sarah Johnson");

    board.remove_live("no-such-id");
    assert_eq!(board.live().len(), 1);
}

#[test]
fn eta_updates_report_whether_the_driver_exists() {
    let mut board = ScheduleBoard::new();
    let id = board.add_live(new_driver("John Smith", 9, 0));

    let new_eta = Eta::At(Utc.with_ymd_and_hms(2026, 3, 1, 10, 15, 0).unwrap());
    assert!(board.update_live_eta(&id, new_eta));
    assert_eq!(board.live()[0].eta, new_eta);

    assert!(!board.update_live_eta("no-such-id", new_eta));
}

#[test]
fn call_outcome_updates_the_live_eta() {
    let mut board = ScheduleBoard::new();
    let id = board.add_live(new_driver("John Smith", 21, 30));

    let previous = Utc.with_ymd_and_hms(2026, 3, 1, 21, 30, 0).unwrap();
    let outcome = CallOutcome::from_report("2215", previous).unwrap();

    assert!(board.apply_call_outcome(&id, &outcome));
    assert_eq!(
        board.live()[0].eta,
        Eta::At(Utc.with_ymd_and_hms(2026, 3, 1, 22, 15, 0).unwrap())
    );
}

#[test]
fn seeded_board_keeps_the_given_rosters() {
    let mut seed_board = ScheduleBoard::new();
    seed_board.add_original(new_driver("John Smith", 9, 0));
    seed_board.add_live(new_driver("Sarah Johnson", 9, 30));

    let board = ScheduleBoard::from_rosters(
        seed_board.original().to_vec(),
        seed_board.live().to_vec(),
    );

    assert_eq!(board, seed_board);
}

#[test]
fn clear_starts_a_new_schedule() {
    let mut board = ScheduleBoard::new();
    board.add_original(new_driver("John Smith", 9, 0));
    board.add_live(new_driver("Sarah Johnson", 9, 30));

    board.clear();

    assert!(board.original().is_empty());
    assert!(board.live().is_empty());
}

#[test]
fn views_recompute_from_the_current_snapshot() {
    // Two colliding arrivals; after one is pushed out, re-running the
    // overlap view on the fresh snapshot shows the conflict resolved.
    let mut board = ScheduleBoard::new();
    let first = board.add_live(new_driver("John Smith", 9, 0));
    board.add_live(new_driver("Sarah Johnson", 9, 15));

    let config = ScheduleConfig::default();
    let before = find_overlaps(board.live(), &config);
    assert!(before.iter().all(|d| d.has_conflict()));

    board.update_live_eta(
        &first,
        Eta::At(Utc.with_ymd_and_hms(2026, 3, 1, 13, 0, 0).unwrap()),
    );

    let after = find_overlaps(board.live(), &config);
    assert!(after.iter().all(|d| !d.has_conflict()));
}
