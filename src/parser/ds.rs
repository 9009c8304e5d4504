//! Data structures for representing domain annotations and variant notations.

use serde::{Deserialize, Serialize};

/// Label of the synthetic intervals that fill gaps between annotated domains.
pub const OTHER_DOMAIN: &str = "Other";

/// A labeled, 1-based inclusive stretch of a protein sequence.
///
/// Bounds that could not be parsed from the annotation are kept as `None`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DomainInterval {
    /// Domain name, e.g., `ARM`; `"Other"` for filler intervals.
    pub domain: String,
    /// 1-based inclusive start position.
    pub start: Option<i32>,
    /// 1-based inclusive end position.
    pub end: Option<i32>,
}

impl DomainInterval {
    pub fn new(domain: &str, start: Option<i32>, end: Option<i32>) -> Self {
        Self {
            domain: domain.to_owned(),
            start,
            end,
        }
    }

    /// Filler interval for an unannotated region.
    pub fn other(start: i32, end: i32) -> Self {
        Self::new(OTHER_DOMAIN, Some(start), Some(end))
    }

    pub fn is_other(&self) -> bool {
        self.domain == OTHER_DOMAIN
    }

    /// Return whether the 1-based `position` falls into the interval.
    ///
    /// Intervals with an unknown bound contain no position.
    pub fn contains(&self, position: i32) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) => start <= position && position <= end,
            _ => false,
        }
    }

    /// Number of residues covered, `None` if a bound is unknown or `end < start`.
    pub fn len(&self) -> Option<usize> {
        match (self.start, self.end) {
            (Some(start), Some(end)) if start <= end => {
                usize::try_from(i64::from(end) - i64::from(start) + 1).ok()
            }
            _ => None,
        }
    }
}

/// Compact point mutation notation such as `A123B`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VariantNotation {
    /// 1-based residue position.
    pub position: i32,
    /// Original residue(s), copied verbatim.
    pub original: String,
    /// Mutated residue(s), copied verbatim.
    pub mutated: String,
}

/// Span of a `DOMAIN <start>..<end>` feature token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct DomainSpan {
    pub start: Option<i32>,
    pub end: Option<i32>,
}

/// One `;`-separated token of a UniProt `Domain [FT]` field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FeatureToken {
    /// `DOMAIN 1..50`
    Domain(DomainSpan),
    /// `/note="ARM"`, quotes stripped.
    Note(String),
    /// Any other qualifier, e.g., `/evidence="ECO:0000255"`.
    Other,
}
