//! Domain model: trip records, datasets, filters, and fixed vocabularies.

pub mod dataset;
pub mod filter;
pub mod trip;
pub mod vocab;

pub use dataset::Dataset;
pub use filter::TripFilter;
pub use trip::Trip;
