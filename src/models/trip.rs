use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::Serialize;

/// One bike-share trip.
///
/// The calendar fields (`hour`, `weekday`, `month`) are derived from
/// `start_time` exactly once at construction and are not independently
/// settable, so they can never drift out of sync with the timestamp.
///
/// `duration_seconds` is carried as supplied by the source; it is never
/// re-derived from the timestamps.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trip {
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub duration_seconds: u32,
    pub start_station: String,
    pub end_station: String,
    /// Rider category as it appears in the source (e.g. "Subscriber").
    pub user_type: Option<String>,
    /// Per-record value; dataset-level absence lives on the `Dataset`.
    pub gender: Option<String>,
    pub birth_year: Option<u32>,
    hour: u32,
    weekday: u32,
    month: u32,
}

impl Trip {
    /// Create a trip and derive its calendar fields from `start_time`.
    pub fn new(
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
        duration_seconds: u32,
        start_station: String,
        end_station: String,
    ) -> Self {
        Self {
            hour: start_time.hour(),
            weekday: start_time.weekday().num_days_from_monday(),
            month: start_time.month(),
            start_time,
            end_time,
            duration_seconds,
            start_station,
            end_station,
            user_type: None,
            gender: None,
            birth_year: None,
        }
    }

    /// Set the rider category.
    pub fn with_user_type(mut self, user_type: Option<String>) -> Self {
        self.user_type = user_type;
        self
    }

    /// Set the per-record gender value.
    pub fn with_gender(mut self, gender: Option<String>) -> Self {
        self.gender = gender;
        self
    }

    /// Set the per-record birth year.
    pub fn with_birth_year(mut self, birth_year: Option<u32>) -> Self {
        self.birth_year = birth_year;
        self
    }

    /// Start hour, 0-23.
    pub fn hour(&self) -> u32 {
        self.hour
    }

    /// Start weekday, 0 = Monday .. 6 = Sunday.
    pub fn weekday(&self) -> u32 {
        self.weekday
    }

    /// Start month, 1-12.
    pub fn month(&self) -> u32 {
        self.month
    }
}
