//! Hand-curated domain lists that take precedence over parsed annotations.
//!
//! Overrides are read from JSON objects mapping a UniProt accession to a list of
//! `{"domain": ..., "start": ..., "end": ...}` records.

use std::collections::HashMap;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::data::error::Error;
use crate::parser::DomainInterval;

/// Curated domains of LRRK2 (`Q5S007`).
const LRRK2_DOMAINS: &[(&str, i32, i32)] = &[
    ("ARM", 1, 705),
    ("ANK", 706, 800),
    ("LRR", 801, 1335),
    ("ROC", 1336, 1511),
    ("COR", 1512, 1879),
    ("KIN", 1880, 2142),
    ("WD40", 2143, 2498),
];

/// Domain lists by UniProt accession.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DomainOverrides {
    inner: HashMap<String, Vec<DomainInterval>>,
}

impl DomainOverrides {
    /// Overrides shipped with the crate.
    pub fn builtin() -> Self {
        let mut result = Self::default();
        result.insert(
            "Q5S007",
            LRRK2_DOMAINS
                .iter()
                .map(|(domain, start, end)| DomainInterval::new(domain, Some(*start), Some(*end)))
                .collect(),
        );
        result
    }

    pub fn from_json(json: &str) -> Result<Self, Error> {
        serde_json::from_str(json).map_err(|e| Error::OverridesParse(e.to_string()))
    }

    pub fn from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref().to_string_lossy().to_string();
        debug!("Loading domain overrides from {:?}", &path);
        let json = std::fs::read_to_string(&path).map_err(|_e| Error::FileOpen(path.clone()))?;
        Self::from_json(&json)
    }

    pub fn get(&self, accession: &str) -> Option<&[DomainInterval]> {
        self.inner.get(accession).map(Vec::as_slice)
    }

    /// Set the domains of `accession`, replacing any previous entry.
    pub fn insert(&mut self, accession: &str, domains: Vec<DomainInterval>) {
        self.inner.insert(accession.to_owned(), domains);
    }

    /// Add all entries of `other`, which win on conflict.
    pub fn extend(&mut self, other: DomainOverrides) {
        self.inner.extend(other.inner);
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
