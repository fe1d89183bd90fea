//! Loading and normalization of raw trip rows into typed records.

pub mod csv_parser;

pub use csv_parser::{load_city_trips, read_trips};
