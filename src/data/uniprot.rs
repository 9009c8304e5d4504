//! Reading of UniProt TSV exports with domain feature tables.
//!
//! The export must carry a header row.  The accession is taken from the `From`
//! column of ID mapping results or, failing that, from `Entry`.

use std::io::Read;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::data::error::Error;
use crate::data::overrides::DomainOverrides;
use crate::parser::{parse_domains, DomainInterval};
use crate::validator::Validator;

/// Accepted names of the accession column, in order of preference.
pub const ACCESSION_COLUMNS: &[&str] = &["From", "Entry"];
pub const ENTRY_NAME_COLUMN: &str = "Entry Name";
pub const DOMAIN_COLUMN: &str = "Domain [FT]";
pub const SEQUENCE_COLUMN: &str = "Sequence";

/// One row of a UniProt export.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProteinRecord {
    pub accession: String,
    /// E.g., `LRRK2_HUMAN`.
    pub entry_name: Option<String>,
    /// Raw `Domain [FT]` value, `None` if the cell is empty.
    pub domain_annotation: Option<String>,
    pub sequence: String,
}

/// Domains of one protein, ready for display along its sequence.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProteinDomains {
    pub accession: String,
    pub entry_name: Option<String>,
    pub sequence_length: i32,
    pub domains: Vec<DomainInterval>,
}

impl ProteinRecord {
    pub fn sequence_length(&self) -> i32 {
        self.sequence.chars().count() as i32
    }

    /// Domains from `overrides` if present for the accession, otherwise parsed
    /// from the annotation.
    pub fn domains(&self, overrides: &DomainOverrides) -> ProteinDomains {
        let sequence_length = self.sequence_length();
        let domains = match overrides.get(&self.accession) {
            Some(domains) => {
                debug!("Using curated domains for {}", &self.accession);
                domains.to_vec()
            }
            None => parse_domains(self.domain_annotation.as_deref(), sequence_length),
        };
        ProteinDomains {
            accession: self.accession.clone(),
            entry_name: self.entry_name.clone(),
            sequence_length,
            domains,
        }
    }

    /// Like [`ProteinRecord::domains`], with the result checked by `validator`.
    ///
    /// A non-strict validator only logs problems, so this returns `Ok`.
    pub fn validated_domains(
        &self,
        overrides: &DomainOverrides,
        validator: &dyn Validator,
    ) -> Result<ProteinDomains, Error> {
        let result = self.domains(overrides);
        validator.validate(&result.domains, result.sequence_length)?;
        Ok(result)
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_owned)
}

/// Read all records of a tab-separated UniProt export.
pub fn read_records<R: Read>(read: R) -> Result<Vec<ProteinRecord>, Error> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .quoting(false)
        .flexible(true)
        .from_reader(read);

    let headers = reader.headers()?.clone();
    let column = |name: &str| headers.iter().position(|header| header == name);
    let accession_idx = ACCESSION_COLUMNS
        .iter()
        .find_map(|name| column(*name))
        .ok_or_else(|| Error::MissingColumn(ACCESSION_COLUMNS.join("/")))?;
    let sequence_idx =
        column(SEQUENCE_COLUMN).ok_or_else(|| Error::MissingColumn(SEQUENCE_COLUMN.to_owned()))?;
    let entry_name_idx = column(ENTRY_NAME_COLUMN);
    let domain_idx = column(DOMAIN_COLUMN);

    let mut result = Vec::new();
    for record in reader.records() {
        let record = record?;
        result.push(ProteinRecord {
            accession: record.get(accession_idx).unwrap_or_default().trim().to_owned(),
            entry_name: non_empty(entry_name_idx.and_then(|idx| record.get(idx))),
            domain_annotation: non_empty(domain_idx.and_then(|idx| record.get(idx))),
            sequence: record.get(sequence_idx).unwrap_or_default().trim().to_owned(),
        });
    }
    debug!("Read {} UniProt records", result.len());
    Ok(result)
}
