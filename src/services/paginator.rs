//! Fixed-size windows over the filtered records for interactive inspection.

use serde::Serialize;

use crate::models::{Dataset, Trip};

/// Default number of records per raw-data window.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// One window into a dataset's records, in original order.
#[derive(Debug, Clone, Serialize)]
pub struct Page<'a> {
    pub records: &'a [Trip],
    /// Whether records remain past this window.
    pub has_more: bool,
}

/// Return up to `page_size` records starting at offset `start`.
///
/// Stateless with respect to the dataset: the caller holds the running offset
/// across "show more" requests and advances it by `page_size`. A `start` at
/// or beyond the dataset length yields an empty window with `has_more` false,
/// never an error.
pub fn window(dataset: &Dataset, start: usize, page_size: usize) -> Page<'_> {
    let trips = dataset.trips();
    let begin = start.min(trips.len());
    let end = begin.saturating_add(page_size).min(trips.len());

    Page {
        records: &trips[begin..end],
        has_more: end < trips.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::{window, DEFAULT_PAGE_SIZE};
    use crate::models::{Dataset, Trip};
    use chrono::NaiveDateTime;

    fn dataset_of(count: usize) -> Dataset {
        let start =
            NaiveDateTime::parse_from_str("2017-01-02 08:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
        let trips = (0..count)
            .map(|i| {
                Trip::new(
                    start + chrono::Duration::minutes(i as i64),
                    start + chrono::Duration::minutes(i as i64 + 5),
                    300,
                    format!("start {}", i),
                    format!("end {}", i),
                )
            })
            .collect();
        Dataset::new("chicago", trips, true, true)
    }

    #[test]
    fn test_successive_windows_over_25_records() {
        let dataset = dataset_of(25);

        let first = window(&dataset, 0, DEFAULT_PAGE_SIZE);
        assert_eq!(first.records.len(), 10);
        assert_eq!(first.records[0].start_station, "start 0");
        assert!(first.has_more);

        let second = window(&dataset, 10, DEFAULT_PAGE_SIZE);
        assert_eq!(second.records.len(), 10);
        assert_eq!(second.records[0].start_station, "start 10");
        assert!(second.has_more);

        let third = window(&dataset, 20, DEFAULT_PAGE_SIZE);
        assert_eq!(third.records.len(), 5);
        assert_eq!(third.records[4].start_station, "start 24");
        assert!(!third.has_more);
    }

    #[test]
    fn test_start_at_length_is_empty_not_an_error() {
        let dataset = dataset_of(25);
        let page = window(&dataset, 25, DEFAULT_PAGE_SIZE);

        assert!(page.records.is_empty());
        assert!(!page.has_more);
    }

    #[test]
    fn test_start_far_past_length() {
        let dataset = dataset_of(3);
        let page = window(&dataset, 1000, DEFAULT_PAGE_SIZE);

        assert!(page.records.is_empty());
        assert!(!page.has_more);
    }

    #[test]
    fn test_empty_dataset_window() {
        let dataset = dataset_of(0);
        let page = window(&dataset, 0, DEFAULT_PAGE_SIZE);

        assert!(page.records.is_empty());
        assert!(!page.has_more);
    }

    #[test]
    fn test_exact_multiple_has_no_more_on_last_page() {
        let dataset = dataset_of(20);

        assert!(window(&dataset, 0, 10).has_more);
        assert!(!window(&dataset, 10, 10).has_more);
    }
}
