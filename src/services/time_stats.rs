//! Most frequent travel times over a filtered dataset.

use serde::Serialize;

use super::{frequency_table, most_frequent};
use crate::error::{AnalysisError, AnalysisResult};
use crate::models::{vocab, Dataset};

/// Report on the most frequent month, weekday, and start hour.
///
/// Each statistic carries its numeric value, its display name where one
/// exists, and how many trips produced it.
#[derive(Debug, Clone, Serialize)]
pub struct TimeStats {
    pub most_common_month: u32,
    pub most_common_month_name: &'static str,
    pub month_count: u64,
    pub most_common_weekday: u32,
    pub most_common_weekday_name: &'static str,
    pub weekday_count: u64,
    pub most_common_hour: u32,
    pub hour_count: u64,
}

/// Compute the time statistics. Ties break to the smallest month number,
/// weekday index, or hour.
pub fn compute_time_stats(dataset: &Dataset) -> AnalysisResult<TimeStats> {
    if dataset.is_empty() {
        return Err(AnalysisError::EmptyResultSet);
    }

    let months = frequency_table(dataset.trips().iter().map(|t| t.month()));
    let weekdays = frequency_table(dataset.trips().iter().map(|t| t.weekday()));
    let hours = frequency_table(dataset.trips().iter().map(|t| t.hour()));

    let (most_common_month, month_count) =
        most_frequent(&months).ok_or(AnalysisError::EmptyResultSet)?;
    let (most_common_weekday, weekday_count) =
        most_frequent(&weekdays).ok_or(AnalysisError::EmptyResultSet)?;
    let (most_common_hour, hour_count) =
        most_frequent(&hours).ok_or(AnalysisError::EmptyResultSet)?;

    Ok(TimeStats {
        most_common_month,
        most_common_month_name: vocab::month_name(most_common_month),
        month_count,
        most_common_weekday,
        most_common_weekday_name: vocab::weekday_name(most_common_weekday),
        weekday_count,
        most_common_hour,
        hour_count,
    })
}

#[cfg(test)]
mod tests {
    use super::compute_time_stats;
    use crate::error::AnalysisError;
    use crate::models::{Dataset, Trip};
    use chrono::NaiveDateTime;

    fn trip_on(start: &str) -> Trip {
        let start = NaiveDateTime::parse_from_str(start, "%Y-%m-%d %H:%M:%S").unwrap();
        Trip::new(
            start,
            start + chrono::Duration::minutes(5),
            300,
            "A".to_string(),
            "B".to_string(),
        )
    }

    fn dataset(trips: Vec<Trip>) -> Dataset {
        Dataset::new("chicago", trips, true, true)
    }

    #[test]
    fn test_most_common_values() {
        let stats = compute_time_stats(&dataset(vec![
            trip_on("2017-01-02 08:00:00"), // Jan, Monday, 8
            trip_on("2017-01-09 08:30:00"), // Jan, Monday, 8
            trip_on("2017-06-11 17:00:00"), // Jun, Sunday, 17
        ]))
        .unwrap();

        assert_eq!(stats.most_common_month, 1);
        assert_eq!(stats.most_common_month_name, "January");
        assert_eq!(stats.month_count, 2);
        assert_eq!(stats.most_common_weekday, 0);
        assert_eq!(stats.most_common_weekday_name, "Monday");
        assert_eq!(stats.most_common_hour, 8);
        assert_eq!(stats.hour_count, 2);
    }

    #[test]
    fn test_month_tie_breaks_to_smallest() {
        // March and May tie at two trips each: March wins.
        let stats = compute_time_stats(&dataset(vec![
            trip_on("2017-05-03 10:00:00"),
            trip_on("2017-03-01 10:00:00"),
            trip_on("2017-05-10 10:00:00"),
            trip_on("2017-03-08 10:00:00"),
        ]))
        .unwrap();

        assert_eq!(stats.most_common_month, 3);
        assert_eq!(stats.most_common_month_name, "March");
    }

    #[test]
    fn test_hour_tie_breaks_to_smallest() {
        let stats = compute_time_stats(&dataset(vec![
            trip_on("2017-01-02 23:00:00"),
            trip_on("2017-01-02 00:30:00"),
        ]))
        .unwrap();

        assert_eq!(stats.most_common_hour, 0);
    }

    #[test]
    fn test_empty_dataset_refused() {
        let err = compute_time_stats(&dataset(vec![])).unwrap_err();
        assert!(matches!(err, AnalysisError::EmptyResultSet));
    }
}
