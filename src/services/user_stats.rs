//! User-demographic breakdowns: rider categories, gender, birth years.

use std::collections::BTreeMap;

use serde::Serialize;

use super::{frequency_table, most_frequent};
use crate::error::{AnalysisError, AnalysisResult};
use crate::models::Dataset;

/// Category used for records whose gender cell is empty when the column
/// itself exists. Distinct from dataset-level absence of the column.
pub const NOT_SPECIFIED: &str = "Not specified";

/// Birth-year aggregates, reported only when the dataset carries the column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BirthYearStats {
    pub earliest: u32,
    pub most_recent: u32,
    /// Mode over all recorded years; ties break to the smallest year.
    pub most_common: u32,
    pub most_common_count: u64,
}

/// Report on bikeshare users.
///
/// The demographic fields are `None` when the matching column is absent from
/// the dataset (`FieldNotAvailable`), which the driver reports as "not
/// present in this dataset" rather than as a zero count. Gender and
/// birth-year availability are independent.
#[derive(Debug, Clone, Serialize)]
pub struct UserStats {
    /// Count per distinct rider category; every value reported, no top-N.
    pub user_types: BTreeMap<String, u64>,
    pub gender_counts: Option<BTreeMap<String, u64>>,
    pub birth_years: Option<BirthYearStats>,
}

/// Gender frequency table. Records with an empty cell merge into the
/// `"Not specified"` category; a dataset without the column yields
/// `FieldNotAvailable`.
pub fn gender_counts(dataset: &Dataset) -> AnalysisResult<BTreeMap<String, u64>> {
    if !dataset.has_gender() {
        return Err(AnalysisError::field_not_available("gender"));
    }

    Ok(frequency_table(dataset.trips().iter().map(|t| {
        t.gender
            .clone()
            .unwrap_or_else(|| NOT_SPECIFIED.to_string())
    })))
}

/// Earliest, most recent, and most common birth year. A dataset without the
/// column yields `FieldNotAvailable`; so does a column with no usable values,
/// since no integer statistics exist for it.
pub fn birth_year_stats(dataset: &Dataset) -> AnalysisResult<BirthYearStats> {
    if !dataset.has_birth_year() {
        return Err(AnalysisError::field_not_available("birth year"));
    }

    let years = frequency_table(dataset.trips().iter().filter_map(|t| t.birth_year));
    let earliest = years
        .keys()
        .next()
        .copied()
        .ok_or_else(|| AnalysisError::field_not_available("birth year"))?;
    let most_recent = years.keys().last().copied().unwrap_or(earliest);
    let (most_common, most_common_count) =
        most_frequent(&years).ok_or_else(|| AnalysisError::field_not_available("birth year"))?;

    Ok(BirthYearStats {
        earliest,
        most_recent,
        most_common,
        most_common_count,
    })
}

/// Compute the full user-statistics report. Per-field unavailability is
/// folded into the report as `None`; other errors propagate.
pub fn compute_user_stats(dataset: &Dataset) -> AnalysisResult<UserStats> {
    if dataset.is_empty() {
        return Err(AnalysisError::EmptyResultSet);
    }

    // Empty user-type cells carry no category and are left out of the table.
    let user_types = frequency_table(dataset.trips().iter().filter_map(|t| t.user_type.clone()));

    let gender = match gender_counts(dataset) {
        Ok(counts) => Some(counts),
        Err(AnalysisError::FieldNotAvailable { .. }) => None,
        Err(e) => return Err(e),
    };
    let birth_years = match birth_year_stats(dataset) {
        Ok(stats) => Some(stats),
        Err(AnalysisError::FieldNotAvailable { .. }) => None,
        Err(e) => return Err(e),
    };

    Ok(UserStats {
        user_types,
        gender_counts: gender,
        birth_years,
    })
}
