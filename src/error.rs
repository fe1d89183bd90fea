//! Error taxonomy for the analysis pipeline.
//!
//! Every variant is recoverable at the driver level: the core classifies and
//! reports, the driver decides whether to re-prompt, skip a statistic, or
//! stop. Nothing here terminates the process.

use thiserror::Error;

/// Result type for analysis operations.
pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Error type shared by the loader, filter engine, and computators.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The source for the requested city is missing or structurally invalid
    /// (unreadable file, missing required column, malformed required cell).
    /// Fatal to the current run; the driver may prompt for new options.
    #[error("data source error: {message}")]
    DataSource { message: String },

    /// Filtering yielded zero records. A first-class outcome rather than a
    /// failure: computators refuse to run on an empty dataset, and the driver
    /// checks emptiness before invoking them.
    #[error("no trips match the selected filters")]
    EmptyResultSet,

    /// A dataset-level optional column is absent, so one specific statistic
    /// cannot be produced. Non-fatal: other statistics for the same run still
    /// compute normally.
    #[error("{field} is not present in this dataset")]
    FieldNotAvailable { field: &'static str },

    /// Configuration problem: unknown city key or an unreadable/invalid
    /// configuration file.
    #[error("configuration error: {message}")]
    Config { message: String },
}

impl AnalysisError {
    /// Create a data source error.
    pub fn data_source(message: impl Into<String>) -> Self {
        Self::DataSource {
            message: message.into(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a field-not-available error for a named statistic field.
    pub fn field_not_available(field: &'static str) -> Self {
        Self::FieldNotAvailable { field }
    }
}

impl From<csv::Error> for AnalysisError {
    fn from(err: csv::Error) -> Self {
        AnalysisError::data_source(err.to_string())
    }
}

impl From<std::io::Error> for AnalysisError {
    fn from(err: std::io::Error) -> Self {
        AnalysisError::data_source(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::AnalysisError;

    #[test]
    fn test_field_not_available_message() {
        let err = AnalysisError::field_not_available("gender");
        assert_eq!(err.to_string(), "gender is not present in this dataset");
    }

    #[test]
    fn test_data_source_message() {
        let err = AnalysisError::data_source("missing required column 'Start Time'");
        assert!(err.to_string().contains("Start Time"));
    }
}
