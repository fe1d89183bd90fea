//! CSV row source to [`Dataset`] conversion.
//!
//! The required columns are the ones statistics depend on: timestamps,
//! duration, and station names. A missing required column or a malformed
//! required cell fails the load with a `DataSource` error naming the row.
//! The demographic columns are optional at two levels: a column missing from
//! the header clears the matching dataset capability flag, and an empty or
//! malformed cell leaves that one record's field absent.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDateTime;
use csv::StringRecord;
use log::debug;

use crate::error::{AnalysisError, AnalysisResult};
use crate::models::{Dataset, Trip};

const COL_START_TIME: &str = "Start Time";
const COL_END_TIME: &str = "End Time";
const COL_TRIP_DURATION: &str = "Trip Duration";
const COL_START_STATION: &str = "Start Station";
const COL_END_STATION: &str = "End Station";
const COL_USER_TYPE: &str = "User Type";
const COL_GENDER: &str = "Gender";
const COL_BIRTH_YEAR: &str = "Birth Year";

/// Accepted timestamp layouts, tried in order.
const TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%m/%d/%Y %H:%M"];

/// Header positions resolved once per source.
#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    start_time: usize,
    end_time: usize,
    duration: usize,
    start_station: usize,
    end_station: usize,
    user_type: Option<usize>,
    gender: Option<usize>,
    birth_year: Option<usize>,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> AnalysisResult<Self> {
        Ok(Self {
            start_time: require_column(headers, COL_START_TIME)?,
            end_time: require_column(headers, COL_END_TIME)?,
            duration: require_column(headers, COL_TRIP_DURATION)?,
            start_station: require_column(headers, COL_START_STATION)?,
            end_station: require_column(headers, COL_END_STATION)?,
            user_type: find_column(headers, COL_USER_TYPE),
            gender: find_column(headers, COL_GENDER),
            birth_year: find_column(headers, COL_BIRTH_YEAR),
        })
    }
}

fn find_column(headers: &StringRecord, name: &str) -> Option<usize> {
    headers.iter().position(|h| h.trim() == name)
}

fn require_column(headers: &StringRecord, name: &str) -> AnalysisResult<usize> {
    find_column(headers, name)
        .ok_or_else(|| AnalysisError::data_source(format!("missing required column '{}'", name)))
}

/// Non-empty trimmed cell for a required column.
fn required_cell<'a>(
    record: &'a StringRecord,
    index: usize,
    column: &str,
    row: usize,
) -> AnalysisResult<&'a str> {
    record
        .get(index)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| {
            AnalysisError::data_source(format!("row {}: missing value for '{}'", row, column))
        })
}

/// Trimmed cell for an optional column; empty cells count as absent.
fn optional_cell<'a>(record: &'a StringRecord, index: Option<usize>) -> Option<&'a str> {
    index
        .and_then(|i| record.get(i))
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

fn parse_timestamp(raw: &str, column: &str, row: usize) -> AnalysisResult<NaiveDateTime> {
    for format in TIMESTAMP_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(dt);
        }
    }
    Err(AnalysisError::data_source(format!(
        "row {}: invalid {} '{}'",
        row, column, raw
    )))
}

/// Duration cells arrive as integers or float-formatted integers ("691.0").
fn parse_duration(raw: &str, row: usize) -> AnalysisResult<u32> {
    let value: f64 = raw.parse().map_err(|_| {
        AnalysisError::data_source(format!("row {}: invalid {} '{}'", row, COL_TRIP_DURATION, raw))
    })?;
    if !value.is_finite() || value < 0.0 || value > f64::from(u32::MAX) {
        return Err(AnalysisError::data_source(format!(
            "row {}: {} out of range: '{}'",
            row, COL_TRIP_DURATION, raw
        )));
    }
    Ok(value as u32)
}

/// Birth-year cells arrive float-formatted ("1992.0"); a malformed cell is
/// treated as absent for that record, not as a load failure.
fn parse_birth_year(raw: &str) -> Option<u32> {
    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0 && *v <= f64::from(u32::MAX))
        .map(|v| v as u32)
}

/// Load the trips for a city from a CSV file on disk.
pub fn load_city_trips(city: &str, path: &Path) -> AnalysisResult<Dataset> {
    let file = File::open(path).map_err(|e| {
        AnalysisError::data_source(format!("cannot open '{}': {}", path.display(), e))
    })?;
    read_trips(city, file)
}

/// Parse an ordered sequence of trips from any CSV row source.
///
/// Calendar fields are derived from the start timestamp at record
/// construction; the dataset capability flags come from the header row.
pub fn read_trips<R: Read>(city: &str, reader: R) -> AnalysisResult<Dataset> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let columns = ColumnIndex::from_headers(&headers)?;

    let mut trips = Vec::new();
    for (i, result) in csv_reader.records().enumerate() {
        let record = result?;
        // 1-based row number counting the header line.
        let row = i + 2;

        let start_time = parse_timestamp(
            required_cell(&record, columns.start_time, COL_START_TIME, row)?,
            COL_START_TIME,
            row,
        )?;
        let end_time = parse_timestamp(
            required_cell(&record, columns.end_time, COL_END_TIME, row)?,
            COL_END_TIME,
            row,
        )?;
        let duration = parse_duration(
            required_cell(&record, columns.duration, COL_TRIP_DURATION, row)?,
            row,
        )?;
        let start_station =
            required_cell(&record, columns.start_station, COL_START_STATION, row)?.to_string();
        let end_station =
            required_cell(&record, columns.end_station, COL_END_STATION, row)?.to_string();

        let trip = Trip::new(start_time, end_time, duration, start_station, end_station)
            .with_user_type(optional_cell(&record, columns.user_type).map(str::to_string))
            .with_gender(optional_cell(&record, columns.gender).map(str::to_string))
            .with_birth_year(optional_cell(&record, columns.birth_year).and_then(parse_birth_year));

        trips.push(trip);
    }

    debug!("loaded {} trips for city '{}'", trips.len(), city);

    Ok(Dataset::new(
        city,
        trips,
        columns.gender.is_some(),
        columns.birth_year.is_some(),
    ))
}
