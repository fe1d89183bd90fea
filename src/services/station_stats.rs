//! Most popular stations and station combinations.

use serde::Serialize;

use super::{frequency_table, most_frequent};
use crate::error::{AnalysisError, AnalysisResult};
use crate::models::Dataset;

/// Report on the most frequent start station, end station, and ordered
/// (start, end) combination. A start-to-end pair is directional: A to B is a
/// different trip than B to A.
#[derive(Debug, Clone, Serialize)]
pub struct StationStats {
    pub top_start_station: String,
    pub top_start_count: u64,
    pub top_end_station: String,
    pub top_end_count: u64,
    pub top_trip_start: String,
    pub top_trip_end: String,
    pub top_trip_count: u64,
}

/// Compute the station statistics. Ties break lexicographically, for the
/// pair by start station then end station.
pub fn compute_station_stats(dataset: &Dataset) -> AnalysisResult<StationStats> {
    if dataset.is_empty() {
        return Err(AnalysisError::EmptyResultSet);
    }

    let starts = frequency_table(dataset.trips().iter().map(|t| t.start_station.as_str()));
    let ends = frequency_table(dataset.trips().iter().map(|t| t.end_station.as_str()));
    let pairs = frequency_table(
        dataset
            .trips()
            .iter()
            .map(|t| (t.start_station.as_str(), t.end_station.as_str())),
    );

    let (top_start, top_start_count) =
        most_frequent(&starts).ok_or(AnalysisError::EmptyResultSet)?;
    let (top_end, top_end_count) = most_frequent(&ends).ok_or(AnalysisError::EmptyResultSet)?;
    let ((trip_start, trip_end), top_trip_count) =
        most_frequent(&pairs).ok_or(AnalysisError::EmptyResultSet)?;

    Ok(StationStats {
        top_start_station: top_start.to_string(),
        top_start_count,
        top_end_station: top_end.to_string(),
        top_end_count,
        top_trip_start: trip_start.to_string(),
        top_trip_end: trip_end.to_string(),
        top_trip_count,
    })
}
