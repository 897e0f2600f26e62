//! CSV Data Loader Module
//! Reads a source CSV with Polars and hands back a cleaned Dataset.

use super::processor::{CleanError, DataProcessor, REQUIRED_COLUMNS};
use super::record::Dataset;
use crate::config::AppConfig;
use polars::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("{} not found", .0.display())]
    NotFound(PathBuf),
    #[error("Failed to load CSV {}: {source}", .path.display())]
    CsvError {
        path: PathBuf,
        #[source]
        source: PolarsError,
    },
    #[error("{} is missing required column '{column}'", .path.display())]
    MissingColumn { path: PathBuf, column: String },
    #[error("Failed to clean {}: {source}", .path.display())]
    CleanError {
        path: PathBuf,
        #[source]
        source: CleanError,
    },
}

/// Handles CSV file loading with Polars.
pub struct DataLoader;

impl DataLoader {
    /// Load and clean one source file.
    pub fn load(path: &Path, label: &str) -> Result<Dataset, LoadError> {
        if !path.is_file() {
            return Err(LoadError::NotFound(path.to_path_buf()));
        }

        let df = Self::read_csv(path)?;

        let columns: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();
        if let Some(missing) = REQUIRED_COLUMNS
            .iter()
            .find(|required| !columns.iter().any(|c| c.as_str() == **required))
        {
            return Err(LoadError::MissingColumn {
                path: path.to_path_buf(),
                column: missing.to_string(),
            });
        }

        let row_count = df.height();
        let clean_err = |source: CleanError| LoadError::CleanError {
            path: path.to_path_buf(),
            source,
        };
        let cleaned = DataProcessor::clean_ratings(df).map_err(clean_err)?;
        let records = DataProcessor::to_records(&cleaned).map_err(clean_err)?;
        let dropped = row_count - records.len();

        info!(
            source = label,
            path = %path.display(),
            rows = records.len(),
            dropped,
            "loaded dataset"
        );

        Ok(Dataset {
            label: label.to_string(),
            path: path.to_path_buf(),
            records,
            dropped,
        })
    }

    /// Every column is read as text; ratings are coerced by the processor.
    /// Rows with more fields than the header are a load error.
    fn read_csv(path: &Path) -> Result<DataFrame, LoadError> {
        let csv_err = |source: PolarsError| LoadError::CsvError {
            path: path.to_path_buf(),
            source,
        };

        LazyCsvReader::new(path)
            .with_infer_schema_length(Some(0))
            .finish()
            .and_then(|lazy| lazy.collect())
            .map_err(csv_err)
    }
}

/// Both source datasets. Either both load or neither is available.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub source_a: Dataset,
    pub source_b: Dataset,
}

impl Catalog {
    pub fn load(config: &AppConfig) -> Result<Self, LoadError> {
        let load = |source: &crate::config::SourceConfig| {
            DataLoader::load(&source.path, &source.label).inspect_err(|e| {
                warn!(source = %source.label, error = %e, "dataset failed to load");
            })
        };

        Ok(Self {
            source_a: load(&config.source_a)?,
            source_b: load(&config.source_b)?,
        })
    }
}
