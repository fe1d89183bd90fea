//! Total and mean trip duration.

use serde::Serialize;

use crate::error::{AnalysisError, AnalysisResult};
use crate::models::Dataset;

/// Whole-second display breakdown: floor division base 3600, then base 60.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HmsBreakdown {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl HmsBreakdown {
    pub fn from_seconds(total: u64) -> Self {
        let hours = total / 3600;
        let remainder = total % 3600;
        Self {
            hours,
            minutes: remainder / 60,
            seconds: remainder % 60,
        }
    }
}

/// Report on trip-duration aggregates.
///
/// `total_seconds` is an exact integer sum; u64 keeps it exact well past the
/// hundreds of thousands of records a city file holds. `mean_seconds` is true
/// division; its fractional part is dropped only in the display breakdown.
#[derive(Debug, Clone, Serialize)]
pub struct DurationStats {
    pub trip_count: usize,
    pub total_seconds: u64,
    pub total: HmsBreakdown,
    pub mean_seconds: f64,
    pub mean: HmsBreakdown,
}

/// Compute the duration statistics over all filtered records.
pub fn compute_duration_stats(dataset: &Dataset) -> AnalysisResult<DurationStats> {
    if dataset.is_empty() {
        return Err(AnalysisError::EmptyResultSet);
    }

    let total_seconds: u64 = dataset
        .trips()
        .iter()
        .map(|t| u64::from(t.duration_seconds))
        .sum();
    let trip_count = dataset.len();
    let mean_seconds = total_seconds as f64 / trip_count as f64;

    Ok(DurationStats {
        trip_count,
        total_seconds,
        total: HmsBreakdown::from_seconds(total_seconds),
        mean_seconds,
        mean: HmsBreakdown::from_seconds(mean_seconds.floor() as u64),
    })
}
