//! Error types for loading trip datasets.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading or decoding a city's trip data.
///
/// All of these are fatal for the session: there is nothing sensible to
/// report on when the dataset itself cannot be read.
#[derive(Debug, Error)]
pub enum DataError {
    /// The dataset file could not be opened or read.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent from the header row.
    #[error("Missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("Invalid timestamp in record {row}, column '{column}': '{value}'")]
    Timestamp {
        row: usize,
        column: &'static str,
        value: String,
    },

    #[error("Invalid trip duration in record {row}: {value}")]
    Duration { row: usize, value: f64 },
}

pub type Result<T> = std::result::Result<T, DataError>;
