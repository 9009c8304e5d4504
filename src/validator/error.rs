//! Error type definition.

use thiserror::Error;

/// Error type for validation of domain intervals.
#[derive(Error, Debug, PartialEq)]
pub enum Error {
    #[error("start is unknown in {0}")]
    UnknownStart(String),
    #[error("end is unknown in {0}")]
    UnknownEnd(String),
    #[error("start must be >=1 in {0}")]
    StartMustBePositive(String),
    #[error("end must be >=1 in {0}")]
    EndMustBePositive(String),
    #[error("start <= end must hold in {0}")]
    StartMustBeLessThanEnd(String),

    #[error("sequence length must be >=1 but is {0}")]
    SequenceLengthNotPositive(i32),
    #[error("no domains to cover sequence of length {0}")]
    NoDomains(i32),
    #[error("{domain} must start at {expected}")]
    GapOrOverlap { domain: String, expected: i64 },
    #[error("last domain {domain} must end at sequence length {sequence_length}")]
    SequenceEndNotCovered {
        domain: String,
        sequence_length: i32,
    },
}
