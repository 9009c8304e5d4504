//! Implementation of validation.

mod error;

use std::sync::Arc;

use log::{error, warn};

pub use crate::validator::error::Error;
use crate::parser::DomainInterval;

/// Trait for validating of domain intervals.
pub trait Validateable {
    fn validate(&self) -> Result<(), Error>;
}

impl Validateable for DomainInterval {
    fn validate(&self) -> Result<(), Error> {
        let start = self.start.ok_or_else(|| Error::UnknownStart(self.to_string()))?;
        let end = self.end.ok_or_else(|| Error::UnknownEnd(self.to_string()))?;
        if start < 1 {
            return Err(Error::StartMustBePositive(self.to_string()));
        }
        if end < 1 {
            return Err(Error::EndMustBePositive(self.to_string()));
        }
        if start > end {
            return Err(Error::StartMustBeLessThanEnd(self.to_string()));
        }
        Ok(())
    }
}

/// Check that `domains` are valid and tile `[1, sequence_length]` in order.
pub fn validate_tiling(domains: &[DomainInterval], sequence_length: i32) -> Result<(), Error> {
    if sequence_length < 1 {
        return Err(Error::SequenceLengthNotPositive(sequence_length));
    }
    let last = domains
        .last()
        .ok_or(Error::NoDomains(sequence_length))?;

    let mut expected = 1i64;
    for domain in domains {
        domain.validate()?;
        if domain.start.map(i64::from) != Some(expected) {
            return Err(Error::GapOrOverlap {
                domain: domain.to_string(),
                expected,
            });
        }
        // Bounds are known after `validate()`.
        expected = domain.end.map(i64::from).unwrap_or(expected) + 1;
    }

    if last.end != Some(sequence_length) {
        return Err(Error::SequenceEndNotCovered {
            domain: last.to_string(),
            sequence_length,
        });
    }
    Ok(())
}

/// Validation level.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum ValidationLevel {
    /// No validation.
    Null,
    /// Check every interval on its own.
    Intrinsic,
    /// Check intervals and that they tile the whole sequence.
    Full,
}

impl ValidationLevel {
    pub fn validator(&self, strict: bool) -> Arc<dyn Validator + Send + Sync> {
        match self {
            ValidationLevel::Null => Arc::new(NullValidator::new()),
            ValidationLevel::Intrinsic => Arc::new(IntrinsicValidator::new(strict)),
            ValidationLevel::Full => Arc::new(FullValidator::new(strict)),
        }
    }
}

/// Trait for validators.
pub trait Validator {
    /// Return whether validation is strict.
    ///
    /// Validation is strict if errors cause `Err` results rather than just logging a warning.
    fn is_strict(&self) -> bool;

    /// Validate the domains of a sequence with `sequence_length` residues.
    fn validate(&self, domains: &[DomainInterval], sequence_length: i32) -> Result<(), Error>;
}

/// Log `res` according to strictness and pass it on only if strict.
fn report(res: Result<(), Error>, strict: bool) -> Result<(), Error> {
    match (&res, strict) {
        (Ok(_), _) => Ok(()),
        (Err(e), false) => {
            warn!("Validation of domains failed: {}", e);
            Ok(())
        }
        (Err(e), true) => {
            error!("Validation of domains failed: {}", e);
            res
        }
    }
}

/// A validator that performs no validation.
pub struct NullValidator {}

impl NullValidator {
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for NullValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for NullValidator {
    fn is_strict(&self) -> bool {
        false
    }

    fn validate(&self, _domains: &[DomainInterval], _sequence_length: i32) -> Result<(), Error> {
        Ok(())
    }
}

/// A validator that checks each interval but not how they fit together.
pub struct IntrinsicValidator {
    strict: bool,
}

impl IntrinsicValidator {
    pub fn new(strict: bool) -> Self {
        Self { strict }
    }
}

impl Validator for IntrinsicValidator {
    fn is_strict(&self) -> bool {
        self.strict
    }

    fn validate(&self, domains: &[DomainInterval], _sequence_length: i32) -> Result<(), Error> {
        let res = domains.iter().try_for_each(|domain| domain.validate());
        report(res, self.is_strict())
    }
}

/// A validator that also requires the intervals to tile the sequence.
pub struct FullValidator {
    strict: bool,
}

impl FullValidator {
    pub fn new(strict: bool) -> Self {
        Self { strict }
    }
}

impl Validator for FullValidator {
    fn is_strict(&self) -> bool {
        self.strict
    }

    fn validate(&self, domains: &[DomainInterval], sequence_length: i32) -> Result<(), Error> {
        report(validate_tiling(domains, sequence_length), self.is_strict())
    }
}
