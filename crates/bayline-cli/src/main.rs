//! `bayline` CLI — inspect unloading-bay driver schedules from the command
//! line.
//!
//! ## Usage
//!
//! ```sh
//! # List colliding unloading windows (stdin → stdout)
//! cat roster.json | bayline conflicts
//!
//! # Same, from a file, as machine-readable JSON
//! bayline conflicts -i roster.json --json
//!
//! # Compute the display window and tick marks for a roster
//! bayline timeline -i roster.json
//!
//! # Detect drivers who exchanged time slots between two rosters
//! bayline swaps --original before.json --current after.json
//!
//! # Report advance notice gained by later arrivals
//! bayline unlocked --original before.json --current after.json
//! ```
//!
//! Rosters are JSON arrays of driver objects; an unparsable or `null` `eta`
//! keeps the driver visible but out of every comparison.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;
use std::io::{self, Read};

use bayline_engine::{
    detect_swaps, find_overlaps, format_unlocked, place_bar, timeline_config, unlocked_minutes,
    Driver, Eta, ScheduleConfig,
};

#[derive(Parser)]
#[command(
    name = "bayline",
    version,
    about = "Unloading-bay schedule inspector"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List drivers whose unloading windows collide
    Conflicts {
        /// Input roster file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Unloading window length in minutes
        #[arg(long, default_value_t = 30)]
        unload_minutes: i64,
        /// Emit machine-readable JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Compute the display window and tick marks for a roster
    Timeline {
        /// Input roster file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Unloading window length in minutes
        #[arg(long, default_value_t = 30)]
        unload_minutes: i64,
        /// Emit machine-readable JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Detect drivers who exchanged time slots between two rosters
    Swaps {
        /// The roster as originally planned
        #[arg(long)]
        original: String,
        /// The roster as it stands now
        #[arg(long)]
        current: String,
        /// Emit machine-readable JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Report advance notice gained by arrivals that slipped later
    Unlocked {
        /// The roster as originally planned
        #[arg(long)]
        original: String,
        /// The roster as it stands now
        #[arg(long)]
        current: String,
        /// Emit machine-readable JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Conflicts {
            input,
            unload_minutes,
            json,
        } => {
            let roster = load_roster(input.as_deref())?;
            let config = ScheduleConfig::with_unload_minutes(unload_minutes);
            let annotated = find_overlaps(&roster, &config);

            if json {
                println!("{}", serde_json::to_string_pretty(&annotated)?);
                return Ok(());
            }

            for driver in &annotated {
                if driver.has_conflict() {
                    let names: Vec<&str> = driver
                        .overlaps_with
                        .iter()
                        .filter_map(|id| {
                            annotated
                                .iter()
                                .find(|d| &d.driver.id == id)
                                .map(|d| d.driver.name.as_str())
                        })
                        .collect();
                    println!(
                        "{}  {}  overlaps with: {}",
                        driver.driver.name,
                        eta_label(&driver.driver.eta),
                        names.join(", ")
                    );
                } else {
                    println!(
                        "{}  {}  clear",
                        driver.driver.name,
                        eta_label(&driver.driver.eta)
                    );
                }
            }
            let conflicted = annotated.iter().filter(|d| d.has_conflict()).count();
            println!(
                "{} of {} drivers have conflicting windows",
                conflicted,
                annotated.len()
            );
        }
        Commands::Timeline {
            input,
            unload_minutes,
            json,
        } => {
            let roster = load_roster(input.as_deref())?;
            let config = ScheduleConfig::with_unload_minutes(unload_minutes);
            let annotated = find_overlaps(&roster, &config);
            let timeline = timeline_config(&annotated, &config);

            if json {
                let bars: Vec<serde_json::Value> = annotated
                    .iter()
                    .map(|d| {
                        json!({
                            "id": d.driver.id,
                            "name": d.driver.name,
                            "bar": place_bar(&d.driver.eta, &timeline, &config),
                        })
                    })
                    .collect();
                let output = json!({ "config": timeline, "bars": bars });
                println!("{}", serde_json::to_string_pretty(&output)?);
                return Ok(());
            }

            println!(
                "Window: {} to {} UTC ({} minutes)",
                timeline.start_time.format("%Y-%m-%d %H:%M"),
                timeline.end_time.format("%Y-%m-%d %H:%M"),
                timeline.total_minutes
            );
            let ticks: Vec<String> = timeline
                .time_slots
                .iter()
                .map(|t| t.format("%H:%M").to_string())
                .collect();
            println!("Ticks:  {}", ticks.join(" "));
            for driver in &annotated {
                match place_bar(&driver.driver.eta, &timeline, &config) {
                    Some(bar) => println!(
                        "{}  {}  at {:.1}% for {:.1}% of the axis",
                        driver.driver.name,
                        eta_label(&driver.driver.eta),
                        bar.left_pct,
                        bar.width_pct
                    ),
                    None => println!("{}  (no usable ETA)", driver.driver.name),
                }
            }
        }
        Commands::Swaps {
            original,
            current,
            json,
        } => {
            let original_roster = load_roster_file(&original)?;
            let current_roster = load_roster_file(&current)?;
            let swaps = detect_swaps(&original_roster, &current_roster, &ScheduleConfig::default());

            if json {
                println!("{}", serde_json::to_string_pretty(&swaps)?);
                return Ok(());
            }

            if swaps.is_empty() {
                println!("No swaps detected");
                return Ok(());
            }
            // Each pair appears under both keys; print it once.
            let mut pairs: Vec<(&str, &str)> = swaps
                .values()
                .filter(|info| info.original_id < info.new_id)
                .map(|info| (info.original_id.as_str(), info.new_id.as_str()))
                .collect();
            pairs.sort();
            for (a, b) in pairs {
                println!(
                    "{} <-> {}",
                    driver_name(&current_roster, a),
                    driver_name(&current_roster, b)
                );
            }
        }
        Commands::Unlocked {
            original,
            current,
            json,
        } => {
            let original_roster = load_roster_file(&original)?;
            let current_roster = load_roster_file(&current)?;

            let per_driver: Vec<(&Driver, i64)> = current_roster
                .iter()
                .map(|driver| {
                    let minutes = original_roster
                        .iter()
                        .find(|o| o.id == driver.id)
                        .map_or(0, |o| unlocked_minutes(o, driver));
                    (driver, minutes)
                })
                .collect();
            let total: i64 = per_driver.iter().map(|(_, m)| m).sum();

            if json {
                let drivers: Vec<serde_json::Value> = per_driver
                    .iter()
                    .map(|(driver, minutes)| {
                        json!({ "id": driver.id, "name": driver.name, "minutes": minutes })
                    })
                    .collect();
                let output = json!({
                    "drivers": drivers,
                    "totalMinutes": total,
                    "formatted": format_unlocked(total),
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
                return Ok(());
            }

            for (driver, minutes) in &per_driver {
                println!("{}: {}", driver.name, format_unlocked(*minutes));
            }
            println!("Total: {}", format_unlocked(total));
        }
    }

    Ok(())
}

fn eta_label(eta: &Eta) -> String {
    match eta.instant() {
        Some(instant) => instant.format("%H:%M").to_string(),
        None => "??:??".to_string(),
    }
}

fn driver_name<'a>(roster: &'a [Driver], id: &'a str) -> &'a str {
    roster
        .iter()
        .find(|d| d.id == id)
        .map_or(id, |d| d.name.as_str())
}

fn load_roster(path: Option<&str>) -> Result<Vec<Driver>> {
    let raw = read_input(path)?;
    serde_json::from_str(&raw).context("Failed to parse driver roster JSON")
}

fn load_roster_file(path: &str) -> Result<Vec<Driver>> {
    load_roster(Some(path))
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}
