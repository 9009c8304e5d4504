//! Error type definition.

use thiserror::Error;

/// Error type for parsing of variant notations.
#[derive(Error, Debug, PartialEq)]
pub enum Error {
    /// No `<letters><digits><letters>` run in the input.
    #[error("{0} does not contain a variant notation")]
    InvalidVariantNotation(String),
}
