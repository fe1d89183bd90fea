use serde::Serialize;

use crate::models::filter::TripFilter;
use crate::models::trip::Trip;

/// An ordered collection of trips for one city, immutable after load.
///
/// Dataset-level absence of the demographic columns is a property of the
/// whole collection: the capability flags are set once at load time from the
/// source headers, never inferred by scanning rows for empty values. The user
/// statistics check them before aggregating.
#[derive(Debug, Clone, Serialize)]
pub struct Dataset {
    city: String,
    trips: Vec<Trip>,
    has_gender: bool,
    has_birth_year: bool,
}

impl Dataset {
    /// Create a dataset with its capability flags.
    pub fn new(
        city: impl Into<String>,
        trips: Vec<Trip>,
        has_gender: bool,
        has_birth_year: bool,
    ) -> Self {
        Self {
            city: city.into(),
            trips,
            has_gender,
            has_birth_year,
        }
    }

    /// City key this dataset was loaded for.
    pub fn city(&self) -> &str {
        &self.city
    }

    /// Trips in original source order.
    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    /// Whether the dataset holds no trips. The driver checks this before
    /// invoking any computator; an empty filtered dataset is the
    /// `EmptyResultSet` outcome.
    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    /// Whether the source carried a gender column at all.
    pub fn has_gender(&self) -> bool {
        self.has_gender
    }

    /// Whether the source carried a birth-year column at all.
    pub fn has_birth_year(&self) -> bool {
        self.has_birth_year
    }

    /// Apply a (month, weekday) filter, producing a new dataset.
    ///
    /// Single pass; both axes combine with AND, and a `None` axis is a no-op.
    /// The result preserves original order and the capability flags. An empty
    /// result is a valid outcome, never an error here.
    pub fn filter(&self, filter: &TripFilter) -> Dataset {
        let trips = self
            .trips
            .iter()
            .filter(|t| filter.matches(t))
            .cloned()
            .collect();

        Dataset {
            city: self.city.clone(),
            trips,
            has_gender: self.has_gender,
            has_birth_year: self.has_birth_year,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Dataset;
    use crate::models::filter::TripFilter;
    use crate::models::trip::Trip;
    use chrono::NaiveDateTime;

    fn trip_on(start: &str, station: &str) -> Trip {
        let start = NaiveDateTime::parse_from_str(start, "%Y-%m-%d %H:%M:%S").unwrap();
        Trip::new(
            start,
            start + chrono::Duration::minutes(5),
            300,
            station.to_string(),
            "End".to_string(),
        )
    }

    fn sample_dataset() -> Dataset {
        Dataset::new(
            "chicago",
            vec![
                trip_on("2017-01-02 08:00:00", "first"),  // January, Monday
                trip_on("2017-02-03 09:00:00", "second"), // February, Friday
                trip_on("2017-01-09 10:00:00", "third"),  // January, Monday
                trip_on("2017-01-10 11:00:00", "fourth"), // January, Tuesday
            ],
            true,
            true,
        )
    }

    #[test]
    fn test_filter_all_is_identity() {
        let dataset = sample_dataset();
        let filtered = dataset.filter(&TripFilter::ALL);

        assert_eq!(filtered.len(), dataset.len());
        assert_eq!(filtered.trips(), dataset.trips());
        assert_eq!(filtered.city(), "chicago");
    }

    #[test]
    fn test_filter_by_month_preserves_order() {
        let dataset = sample_dataset();
        let january = dataset.filter(&TripFilter {
            month: Some(1),
            weekday: None,
        });

        assert_eq!(january.len(), 3);
        let stations: Vec<&str> = january
            .trips()
            .iter()
            .map(|t| t.start_station.as_str())
            .collect();
        assert_eq!(stations, vec!["first", "third", "fourth"]);
    }

    #[test]
    fn test_filter_combines_axes_with_and() {
        let dataset = sample_dataset();
        let january_mondays = dataset.filter(&TripFilter {
            month: Some(1),
            weekday: Some(0),
        });

        assert_eq!(january_mondays.len(), 2);
        assert!(january_mondays
            .trips()
            .iter()
            .all(|t| t.month() == 1 && t.weekday() == 0));
    }

    #[test]
    fn test_filter_empty_result_is_valid() {
        let dataset = sample_dataset();
        let june = dataset.filter(&TripFilter {
            month: Some(6),
            weekday: None,
        });

        assert!(june.is_empty());
        assert_eq!(june.len(), 0);
    }

    #[test]
    fn test_filter_preserves_capability_flags() {
        let dataset = Dataset::new(
            "washington",
            vec![trip_on("2017-01-02 08:00:00", "a")],
            false,
            false,
        );
        let filtered = dataset.filter(&TripFilter::ALL);

        assert!(!filtered.has_gender());
        assert!(!filtered.has_birth_year());
    }

    #[test]
    fn test_filter_is_pure() {
        let dataset = sample_dataset();
        let filter = TripFilter {
            month: Some(1),
            weekday: None,
        };

        let first = dataset.filter(&filter);
        let second = dataset.filter(&filter);
        assert_eq!(first.trips(), second.trips());
        // The source is untouched.
        assert_eq!(dataset.len(), 4);
    }
}
