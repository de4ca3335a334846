use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading the launch dataset.
///
/// All of them are fatal at startup; the dashboard never reloads.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to open {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid outcome {value} on row {row}: expected 0 or 1")]
    InvalidOutcome { row: usize, value: u8 },
}
