//! # Bikeshare Trip Analytics Engine
//!
//! Rust engine for exploring historical US bikeshare trip logs. It loads
//! per-city trip records from CSV sources, applies optional month/weekday
//! filters, and computes descriptive statistics over the filtered collection.
//!
//! ## Features
//!
//! - **Data Loading**: Parse per-city trip CSV files into typed records with
//!   calendar fields derived from the start timestamp
//! - **Filtering**: Reduce a dataset to the trips matching a month and/or
//!   weekday constraint, preserving original order
//! - **Analysis**: Popular travel times, popular stations, trip-duration
//!   aggregates, and user-demographic breakdowns
//! - **Raw Data Paging**: Fixed-size windows over the filtered records for
//!   interactive inspection
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`models`]: Trip record, dataset, filter, and the fixed vocabularies
//! - [`parsing`]: CSV row source to [`models::Dataset`] conversion
//! - [`services`]: Statistics computators and the raw-data paginator
//! - [`config`]: City-to-source mapping, external to the analysis core
//! - [`error`]: Error taxonomy shared across the pipeline
//!
//! The pipeline is single-threaded and synchronous: load, filter, then each
//! computator runs independently over the same filtered dataset. The
//! interactive driver (see the `bikeshare` binary) owns every prompt loop and
//! pagination offset; the core exposes only pure request/response operations.

pub mod config;
pub mod error;
pub mod models;
pub mod parsing;
pub mod services;
