use serde::{Deserialize, Serialize};

use crate::models::trip::Trip;
use crate::models::vocab;

/// A (month, weekday) constraint pair. `None` on an axis applies no
/// constraint; both axes combine with logical AND.
///
/// Filters are stateless value objects built from already-validated driver
/// selections; the core does not re-validate free-form text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripFilter {
    /// Month number 1-12, or `None` for all months.
    pub month: Option<u32>,
    /// Weekday index 0 = Monday .. 6 = Sunday, or `None` for all days.
    pub weekday: Option<u32>,
}

impl TripFilter {
    /// The unconstrained filter.
    pub const ALL: TripFilter = TripFilter {
        month: None,
        weekday: None,
    };

    /// Build a filter from driver vocabulary selections: a month name or
    /// "all", and a weekday name or "all". The driver guarantees membership
    /// in the fixed vocabularies before calling.
    pub fn from_selection(month: &str, weekday: &str) -> Self {
        Self {
            month: vocab::month_number(month),
            weekday: vocab::weekday_number(weekday),
        }
    }

    /// Whether a trip satisfies both axes of the filter.
    pub fn matches(&self, trip: &Trip) -> bool {
        self.month.map_or(true, |m| trip.month() == m)
            && self.weekday.map_or(true, |d| trip.weekday() == d)
    }

    /// Whether the filter constrains neither axis.
    pub fn is_unconstrained(&self) -> bool {
        self.month.is_none() && self.weekday.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::TripFilter;
    use crate::models::trip::Trip;
    use chrono::NaiveDateTime;

    fn trip_on(start: &str) -> Trip {
        let start = NaiveDateTime::parse_from_str(start, "%Y-%m-%d %H:%M:%S").unwrap();
        Trip::new(
            start,
            start + chrono::Duration::minutes(10),
            600,
            "A".to_string(),
            "B".to_string(),
        )
    }

    #[test]
    fn test_from_selection() {
        let filter = TripFilter::from_selection("march", "friday");
        assert_eq!(filter.month, Some(3));
        assert_eq!(filter.weekday, Some(4));

        let filter = TripFilter::from_selection("all", "all");
        assert_eq!(filter, TripFilter::ALL);
        assert!(filter.is_unconstrained());
    }

    #[test]
    fn test_matches_single_axis() {
        // 2017-01-02 was a Monday.
        let trip = trip_on("2017-01-02 08:00:00");

        let january = TripFilter {
            month: Some(1),
            weekday: None,
        };
        assert!(january.matches(&trip));

        let february = TripFilter {
            month: Some(2),
            weekday: None,
        };
        assert!(!february.matches(&trip));

        let monday = TripFilter {
            month: None,
            weekday: Some(0),
        };
        assert!(monday.matches(&trip));
    }

    #[test]
    fn test_matches_combines_with_and() {
        let trip = trip_on("2017-01-02 08:00:00");

        let january_monday = TripFilter {
            month: Some(1),
            weekday: Some(0),
        };
        assert!(january_monday.matches(&trip));

        let january_tuesday = TripFilter {
            month: Some(1),
            weekday: Some(1),
        };
        assert!(!january_tuesday.matches(&trip));
    }

    #[test]
    fn test_all_matches_everything() {
        assert!(TripFilter::ALL.matches(&trip_on("2017-12-31 23:59:59")));
        assert!(TripFilter::ALL.matches(&trip_on("2017-01-01 00:00:00")));
    }
}
