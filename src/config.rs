//! City data configuration.
//!
//! Maps each supported city to its CSV source. The built-in table mirrors the
//! stock dataset filenames; a TOML file or the `BIKESHARE_DATA_DIR` variable
//! can point the loader somewhere else without touching the analysis core.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, AnalysisResult};

/// Built-in city-to-file table, shared read-only across the process.
static CITY_FILES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("chicago", "chicago.csv"),
        ("new york city", "new_york_city.csv"),
        ("washington", "washington.csv"),
    ])
});

/// Data source configuration, loadable from a TOML file.
///
/// ```toml
/// data_dir = "/srv/bikeshare"
///
/// [city_files]
/// chicago = "chicago_2017.csv"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Directory holding the per-city CSV files.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Overrides for the built-in city-to-file table.
    #[serde(default)]
    pub city_files: HashMap<String, String>,
}

fn default_data_dir() -> PathBuf {
    std::env::var_os("BIKESHARE_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            city_files: HashMap::new(),
        }
    }
}

impl DataConfig {
    /// Read configuration from a TOML file.
    pub fn from_file(path: &Path) -> AnalysisResult<Self> {
        let raw = fs::read_to_string(path).map_err(|e| {
            AnalysisError::config(format!("cannot read '{}': {}", path.display(), e))
        })?;
        toml::from_str(&raw)
            .map_err(|e| AnalysisError::config(format!("invalid config '{}': {}", path.display(), e)))
    }

    /// Resolve the CSV path for a city from the fixed vocabulary.
    pub fn source_for(&self, city: &str) -> AnalysisResult<PathBuf> {
        if let Some(file) = self.city_files.get(city) {
            return Ok(self.data_dir.join(file));
        }
        CITY_FILES
            .get(city)
            .map(|file| self.data_dir.join(file))
            .ok_or_else(|| AnalysisError::config(format!("unknown city '{}'", city)))
    }
}
