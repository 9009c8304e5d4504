//! Readers for the tabular inputs of the domain parser and variant extractor.

pub mod alphamissense;
pub mod error;
pub mod overrides;
pub mod uniprot;

pub use crate::data::error::Error;
