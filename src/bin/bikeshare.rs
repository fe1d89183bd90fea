//! Interactive bikeshare data explorer.
//!
//! This binary is the driver for the analysis core: it prompts for a city and
//! a month/weekday filter, pages through raw records, prints the four
//! statistics reports, and restarts until told to stop. The core exposes only
//! pure request/response operations; every prompt loop and the pagination
//! offset live here.
//!
//! # Usage
//!
//! ```bash
//! # Data files next to the working directory
//! cargo run --bin bikeshare
//!
//! # Point at a config file mapping cities to CSV paths
//! cargo run --bin bikeshare -- explorer.toml
//!
//! # Non-interactive: dump one filtered run as JSON
//! cargo run --bin bikeshare -- --report chicago january monday
//! ```
//!
//! # Environment Variables
//!
//! - `BIKESHARE_DATA_DIR`: directory holding the per-city CSV files
//!   (default: current directory)
//! - `RUST_LOG`: log level (default: off)

use std::io::{self, Write};
use std::path::Path;

use anyhow::{bail, Result};
use log::info;
use serde::Serialize;

use bikeshare_rust::config::DataConfig;
use bikeshare_rust::error::AnalysisError;
use bikeshare_rust::models::{vocab, Dataset, TripFilter};
use bikeshare_rust::parsing::load_city_trips;
use bikeshare_rust::services::{
    compute_duration_stats, compute_station_stats, compute_time_stats, compute_user_stats, window,
    DurationStats, StationStats, TimeStats, UserStats, DEFAULT_PAGE_SIZE,
};

const DIVIDER: &str = "----------------------------------------";

/// All four reports for one filtered run, for the `--report` JSON dump.
#[derive(Debug, Serialize)]
struct RunReport {
    city: String,
    filter: TripFilter,
    trip_count: usize,
    time: TimeStats,
    stations: StationStats,
    durations: DurationStats,
    users: UserStats,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.first().map(String::as_str) == Some("--report") {
        return run_report(&args[1..]);
    }

    let config = match args.first() {
        Some(path) => DataConfig::from_file(Path::new(path))?,
        None => DataConfig::default(),
    };

    println!("Hello! Let's explore some US bikeshare data!");

    loop {
        let (city, month, day) = get_filters()?;
        info!("selected city={} month={} day={}", city, month, day);

        let dataset = match load_dataset(&config, &city) {
            Ok(dataset) => dataset,
            Err(e) => {
                println!("Error: {}", e);
                if !ask_yes_no("\nWould you like to choose new options? Enter yes or no.\n")? {
                    break;
                }
                continue;
            }
        };

        let filtered = dataset.filter(&TripFilter::from_selection(&month, &day));
        if filtered.is_empty() {
            if !ask_yes_no(
                "\nThere is no data available, would you like to choose new options? Enter yes or no.\n",
            )? {
                break;
            }
            continue;
        }

        show_raw_data(&filtered)?;
        show_time_stats(&filtered);
        show_station_stats(&filtered);
        show_duration_stats(&filtered);
        show_user_stats(&filtered);

        if !ask_yes_no("\nWould you like to restart? Enter yes or no.\n")? {
            break;
        }
    }

    Ok(())
}

fn load_dataset(config: &DataConfig, city: &str) -> Result<Dataset, AnalysisError> {
    let path = config.source_for(city)?;
    load_city_trips(city, &path)
}

/// `--report <city> [month] [day]`: run the full pipeline once and print the
/// combined report as JSON.
fn run_report(args: &[String]) -> Result<()> {
    let city = match args.first() {
        Some(city) => city.to_lowercase(),
        None => bail!("usage: bikeshare --report <city> [month] [day]"),
    };
    let month = args.get(1).map_or("all".to_string(), |s| s.to_lowercase());
    let day = args.get(2).map_or("all".to_string(), |s| s.to_lowercase());

    let config = DataConfig::default();
    let dataset = load_dataset(&config, &city)?;
    let filter = TripFilter::from_selection(&month, &day);
    let filtered = dataset.filter(&filter);
    if filtered.is_empty() {
        bail!(AnalysisError::EmptyResultSet);
    }

    let report = RunReport {
        city,
        filter,
        trip_count: filtered.len(),
        time: compute_time_stats(&filtered)?,
        stations: compute_station_stats(&filtered)?,
        durations: compute_duration_stats(&filtered)?,
        users: compute_user_stats(&filtered)?,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}

/// Ask for a city, month, and day, re-prompting until each answer belongs to
/// its fixed vocabulary.
fn get_filters() -> Result<(String, String, String)> {
    let city = loop {
        let answer = prompt("Please select Chicago, New York City, or Washington: ")?;
        if vocab::CITIES.contains(&answer.as_str()) {
            break answer;
        }
        println!("Error! Valid options are Chicago, New York City, or Washington.");
    };

    let month = loop {
        let answer = prompt("Please select a month or 'all': ")?;
        if answer == "all" || vocab::month_number(&answer).is_some() {
            break answer;
        }
        println!("Error! Valid options are months, or 'all'.");
    };

    let day = loop {
        let answer = prompt("Please select a day of the week, or 'all': ")?;
        if answer == "all" || vocab::weekday_number(&answer).is_some() {
            break answer;
        }
        println!("Error! Valid options are a day of the week or 'all'.");
    };

    println!("{}", DIVIDER);
    Ok((city, month, day))
}

/// Page through the filtered records, ten at a time, while the user says yes.
fn show_raw_data(dataset: &Dataset) -> Result<()> {
    println!("--------------------- Raw data display -------------------------");

    let mut start = 0;
    loop {
        let page = window(dataset, start, DEFAULT_PAGE_SIZE);
        for trip in page.records {
            println!(
                "{} -> {}  {:>6}s  {} -> {}  ({})",
                trip.start_time,
                trip.end_time,
                trip.duration_seconds,
                trip.start_station,
                trip.end_station,
                trip.user_type.as_deref().unwrap_or("-"),
            );
        }

        if !page.has_more {
            break;
        }
        if !ask_yes_no(&format!(
            "\nWould you like the next {} rows of raw data? Enter yes or no.\n",
            DEFAULT_PAGE_SIZE
        ))? {
            break;
        }
        start += DEFAULT_PAGE_SIZE;
    }

    Ok(())
}

fn show_time_stats(dataset: &Dataset) {
    println!("\nCalculating The Most Frequent Times of Travel...\n");
    match compute_time_stats(dataset) {
        Ok(stats) => {
            println!("Most common month is {}", stats.most_common_month_name);
            println!("Most common day is {}", stats.most_common_weekday_name);
            println!("Most popular starting hour is {}", stats.most_common_hour);
        }
        Err(e) => println!("Error: {}", e),
    }
    println!("{}", DIVIDER);
}

fn show_station_stats(dataset: &Dataset) {
    println!("\nCalculating The Most Popular Stations and Trip...\n");
    match compute_station_stats(dataset) {
        Ok(stats) => {
            println!("Most Popular Starting Station: {}", stats.top_start_station);
            println!("Most Popular Ending Station: {}", stats.top_end_station);
            println!(
                "Most Popular Starting/Ending Combination: {} -> {}",
                stats.top_trip_start, stats.top_trip_end
            );
        }
        Err(e) => println!("Error: {}", e),
    }
    println!("{}", DIVIDER);
}

fn show_duration_stats(dataset: &Dataset) {
    println!("\nCalculating Trip Duration...\n");
    match compute_duration_stats(dataset) {
        Ok(stats) => {
            println!(
                "Total travel time: {} hours, {} minutes, {} seconds",
                stats.total.hours, stats.total.minutes, stats.total.seconds
            );
            println!(
                "Average travel time: {} mins, {} secs",
                stats.mean.hours * 60 + stats.mean.minutes,
                stats.mean.seconds
            );
        }
        Err(e) => println!("Error: {}", e),
    }
    println!("{}", DIVIDER);
}

fn show_user_stats(dataset: &Dataset) {
    println!("\nCalculating User Stats...\n");
    match compute_user_stats(dataset) {
        Ok(stats) => {
            for (user_type, count) in &stats.user_types {
                println!("{}: {}", user_type, count);
            }
            println!("{}", DIVIDER);

            match &stats.gender_counts {
                Some(counts) => {
                    for (gender, count) in counts {
                        println!("{}: {}", gender, count);
                    }
                }
                None => println!("Gender is not present in this dataset."),
            }
            println!("{}", DIVIDER);

            match &stats.birth_years {
                Some(years) => {
                    println!("Earliest birth year: {}", years.earliest);
                    println!("Most recent birth year: {}", years.most_recent);
                    println!("Most common birth year: {}", years.most_common);
                }
                None => println!("Birth Year is not present in this dataset."),
            }
        }
        Err(e) => println!("Error: {}", e),
    }
    println!("{}", DIVIDER);
}

/// Print a prompt and return the trimmed, lowercased answer.
fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        bail!("input closed");
    }
    Ok(line.trim().to_lowercase())
}

fn ask_yes_no(message: &str) -> Result<bool> {
    Ok(prompt(message)? == "yes")
}
