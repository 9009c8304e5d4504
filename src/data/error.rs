//! Error type definition.

use thiserror::Error;

/// Error type for data.
#[derive(Error, Debug)]
pub enum Error {
    #[error("could not open file: {0}")]
    FileOpen(String),
    #[error("problem reading tabular data")]
    Csv(#[from] csv::Error),
    #[error("problem reading input")]
    Io(#[from] std::io::Error),
    #[error("missing column {0} in header")]
    MissingColumn(String),
    #[error("could not parse domain overrides: {0}")]
    OverridesParse(String),
    #[error("invalid pathogenicity class: {0}")]
    InvalidPathogenicity(String),
    #[error("domains failed validation")]
    Validation(#[from] crate::validator::Error),
}
