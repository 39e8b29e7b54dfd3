//! Tests for unloading-window overlap detection.

use bayline_engine::{find_overlaps, Driver, Eta, ScheduleConfig};
use chrono::{TimeZone, Utc};

/// Helper to create a driver arriving at the given time on a fixed day.
fn driver(id: &str, hour: u32, min: u32) -> Driver {
    Driver {
        id: id.to_string(),
        name: format!("Driver {}", id),
        phone: "(555) 123-4567".to_string(),
        destination: "Dock A".to_string(),
        eta: Eta::At(Utc.with_ymd_and_hms(2026, 3, 1, hour, min, 0).unwrap()),
    }
}

/// Helper for a driver whose ETA could not be parsed.
fn driver_without_eta(id: &str) -> Driver {
    Driver {
        id: id.to_string(),
        name: format!("Driver {}", id),
        phone: "(555) 123-4567".to_string(),
        destination: "Dock A".to_string(),
        eta: Eta::Unknown,
    }
}

#[test]
fn arrivals_fifteen_minutes_apart_overlap() {
    // 09:00 and 09:15 — 15 min apart, inside the 30 min unloading window.
    let drivers = vec![driver("1", 9, 0), driver("2", 9, 15)];

    let result = find_overlaps(&drivers, &ScheduleConfig::default());

    assert_eq!(result[0].overlaps_with, vec!["2".to_string()]);
    assert_eq!(result[1].overlaps_with, vec!["1".to_string()]);
}

#[test]
fn arrivals_exactly_thirty_minutes_apart_do_not_overlap() {
    // 09:00 and 09:30 — the first window ends exactly when the second
    // starts. Half-open windows: not a conflict, in either direction.
    let drivers = vec![driver("1", 9, 0), driver("2", 9, 30)];

    let result = find_overlaps(&drivers, &ScheduleConfig::default());

    assert!(
        result[0].overlaps_with.is_empty(),
        "exactly touching windows must not conflict"
    );
    assert!(
        result[1].overlaps_with.is_empty(),
        "exactly touching windows must not conflict from the later side either"
    );
}

#[test]
fn arrivals_twentynine_minutes_apart_overlap() {
    let drivers = vec![driver("1", 9, 0), driver("2", 9, 29)];

    let result = find_overlaps(&drivers, &ScheduleConfig::default());

    assert_eq!(result[0].overlaps_with, vec!["2".to_string()]);
    assert_eq!(result[1].overlaps_with, vec!["1".to_string()]);
}

#[test]
fn identical_arrival_times_overlap() {
    let drivers = vec![driver("1", 9, 0), driver("2", 9, 0)];

    let result = find_overlaps(&drivers, &ScheduleConfig::default());

    assert_eq!(result[0].overlaps_with, vec!["2".to_string()]);
    assert_eq!(result[1].overlaps_with, vec!["1".to_string()]);
}

#[test]
fn no_driver_lists_itself() {
    let drivers = vec![driver("1", 9, 0), driver("2", 9, 10), driver("3", 9, 20)];

    let result = find_overlaps(&drivers, &ScheduleConfig::default());

    for annotated in &result {
        assert!(
            !annotated.overlaps_with.contains(&annotated.driver.id),
            "driver {} lists itself",
            annotated.driver.id
        );
    }
}

#[test]
fn empty_and_single_driver_inputs() {
    let config = ScheduleConfig::default();

    assert!(find_overlaps(&[], &config).is_empty());

    let result = find_overlaps(&[driver("1", 9, 0)], &config);
    assert_eq!(result.len(), 1);
    assert!(result[0].overlaps_with.is_empty());
}

#[test]
fn output_preserves_input_order() {
    let drivers = vec![
        driver("c", 11, 0),
        driver("a", 9, 0),
        driver("b", 10, 0),
    ];

    let result = find_overlaps(&drivers, &ScheduleConfig::default());

    let ids: Vec<&str> = result.iter().map(|d| d.driver.id.as_str()).collect();
    assert_eq!(ids, vec!["c", "a", "b"]);
}

#[test]
fn conflict_list_preserves_scan_order() {
    // Driver "2" collides with "1" and "3"; the list follows input order,
    // not arrival order.
    let drivers = vec![
        driver("3", 9, 20),
        driver("1", 9, 0),
        driver("2", 9, 10),
    ];

    let result = find_overlaps(&drivers, &ScheduleConfig::default());

    let two = result.iter().find(|d| d.driver.id == "2").unwrap();
    assert_eq!(two.overlaps_with, vec!["3".to_string(), "1".to_string()]);
}

#[test]
fn unknown_eta_passes_through_with_empty_conflicts() {
    let drivers = vec![driver("1", 9, 0), driver_without_eta("x"), driver("2", 9, 15)];

    let result = find_overlaps(&drivers, &ScheduleConfig::default());

    assert_eq!(result.len(), 3, "every input driver appears in the output");

    let unknown = &result[1];
    assert_eq!(unknown.driver.id, "x");
    assert!(unknown.overlaps_with.is_empty());

    // The other drivers never discover the unknown-ETA driver.
    assert_eq!(result[0].overlaps_with, vec!["2".to_string()]);
    assert_eq!(result[2].overlaps_with, vec!["1".to_string()]);
}

#[test]
fn symmetry_across_a_mixed_roster() {
    let drivers = vec![
        driver("1", 8, 45),
        driver("2", 9, 10),
        driver("3", 9, 40),
        driver("4", 12, 0),
        driver_without_eta("5"),
    ];

    let result = find_overlaps(&drivers, &ScheduleConfig::default());

    for a in &result {
        for b in &result {
            let a_sees_b = a.overlaps_with.contains(&b.driver.id);
            let b_sees_a = b.overlaps_with.contains(&a.driver.id);
            assert_eq!(
                a_sees_b, b_sees_a,
                "overlap relation must be symmetric ({} vs {})",
                a.driver.id, b.driver.id
            );
        }
    }
}

#[test]
fn unload_duration_is_configurable() {
    // 15 minutes apart: conflicting under a 30 min window, clear under 10.
    let drivers = vec![driver("1", 9, 0), driver("2", 9, 15)];

    let short = find_overlaps(&drivers, &ScheduleConfig::with_unload_minutes(10));
    assert!(short[0].overlaps_with.is_empty());
    assert!(short[1].overlaps_with.is_empty());

    let long = find_overlaps(&drivers, &ScheduleConfig::with_unload_minutes(45));
    assert_eq!(long[0].overlaps_with, vec!["2".to_string()]);
}

#[test]
fn window_membership_is_half_open() {
    use bayline_engine::UnloadWindow;

    let start = Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap();
    let window = UnloadWindow::starting_at(start, 30);

    assert!(window.contains(start));
    assert!(window.contains(start + chrono::Duration::minutes(29)));
    assert!(
        !window.contains(window.end),
        "the end of a half-open window is outside it"
    );
}

#[test]
fn window_overlap_length_is_the_intersection() {
    use bayline_engine::UnloadWindow;

    let nine = Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap();
    let a = UnloadWindow::starting_at(nine, 30);
    let b = UnloadWindow::starting_at(nine + chrono::Duration::minutes(20), 30);
    let c = UnloadWindow::starting_at(nine + chrono::Duration::minutes(30), 30);

    assert_eq!(a.overlap_minutes(&b), 10);
    assert_eq!(b.overlap_minutes(&a), 10);
    assert_eq!(a.overlap_minutes(&c), 0, "touching windows share nothing");
}

#[test]
fn rerunning_produces_identical_output() {
    let drivers = vec![driver("1", 9, 0), driver("2", 9, 15), driver_without_eta("3")];
    let config = ScheduleConfig::default();

    let first = find_overlaps(&drivers, &config);
    let second = find_overlaps(&drivers, &config);

    assert_eq!(first, second, "overlap computation holds no hidden state");
}
