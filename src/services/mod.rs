//! Statistics computators and the raw-data paginator.
//!
//! Each service is read-only over a filtered [`crate::models::Dataset`] and
//! produces one serializable report. Computators refuse to run on an empty
//! dataset (`AnalysisError::EmptyResultSet`); the driver is expected to check
//! emptiness before invoking them.

pub mod duration_stats;
pub mod paginator;
pub mod station_stats;
pub mod time_stats;
pub mod user_stats;

pub use duration_stats::{compute_duration_stats, DurationStats, HmsBreakdown};
pub use paginator::{window, Page, DEFAULT_PAGE_SIZE};
pub use station_stats::{compute_station_stats, StationStats};
pub use time_stats::{compute_time_stats, TimeStats};
pub use user_stats::{compute_user_stats, BirthYearStats, UserStats, NOT_SPECIFIED};

use std::collections::BTreeMap;

/// Count occurrences of each key. A `BTreeMap` keeps the table in ascending
/// key order, which makes every report deterministic regardless of input
/// order.
pub(crate) fn frequency_table<K, I>(items: I) -> BTreeMap<K, u64>
where
    K: Ord,
    I: IntoIterator<Item = K>,
{
    let mut counts = BTreeMap::new();
    for key in items {
        *counts.entry(key).or_insert(0) += 1;
    }
    counts
}

/// Most frequent key with its count. Ties break to the smallest key in its
/// natural order: the ascending map iteration combined with a strict `>`
/// update guarantees it.
pub(crate) fn most_frequent<K: Ord + Clone>(counts: &BTreeMap<K, u64>) -> Option<(K, u64)> {
    let mut best: Option<(&K, u64)> = None;
    for (key, &count) in counts {
        match best {
            Some((_, best_count)) if count <= best_count => {}
            _ => best = Some((key, count)),
        }
    }
    best.map(|(key, count)| (key.clone(), count))
}

#[cfg(test)]
mod tests {
    use super::{frequency_table, most_frequent};

    #[test]
    fn test_frequency_table_counts() {
        let counts = frequency_table(vec![3u32, 5, 3, 5, 3]);
        assert_eq!(counts.get(&3), Some(&3));
        assert_eq!(counts.get(&5), Some(&2));
    }

    #[test]
    fn test_most_frequent_tie_breaks_to_smallest() {
        // Months {3, 3, 5, 5} tie at frequency 2: pick 3, not 5.
        let counts = frequency_table(vec![5u32, 3, 5, 3]);
        assert_eq!(most_frequent(&counts), Some((3, 2)));
    }

    #[test]
    fn test_most_frequent_string_tie_breaks_lexicographically() {
        let counts = frequency_table(vec!["b", "a", "b", "a"]);
        assert_eq!(most_frequent(&counts), Some(("a", 2)));
    }

    #[test]
    fn test_most_frequent_empty() {
        let counts = frequency_table(Vec::<u32>::new());
        assert_eq!(most_frequent(&counts), None);
    }
}
