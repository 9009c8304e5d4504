//! Relating variants to the domains of their protein.

use std::collections::HashMap;

use bio::data_structures::interval_tree::ArrayBackedIntervalTree;
use serde::{Deserialize, Serialize};

use crate::data::alphamissense::{Pathogenicity, ScoredVariant};
use crate::parser::{extract_variant, DomainInterval, VariantNotation};

/// Type alias for interval trees; values index into the domain list.
type IntervalTree = ArrayBackedIntervalTree<i32, usize>;

/// Looks up the domain of residue positions.
pub struct DomainMapper {
    domains: Vec<DomainInterval>,
    tree: IntervalTree,
    /// Number of intervals in `tree`.
    indexed: usize,
}

impl DomainMapper {
    /// Index `domains`; intervals with unknown or inverted bounds are not indexed.
    pub fn new(domains: &[DomainInterval]) -> Self {
        let mut tree = IntervalTree::new();
        let mut indexed = 0;
        for (idx, domain) in domains.iter().enumerate() {
            if let (Some(start), Some(end)) = (domain.start, domain.end) {
                if start <= end {
                    // 1-based inclusive to half-open
                    tree.insert(start..end.saturating_add(1), idx);
                    indexed += 1;
                }
            }
        }
        tree.index();

        Self {
            domains: domains.to_vec(),
            tree,
            indexed,
        }
    }

    pub fn domains(&self) -> &[DomainInterval] {
        &self.domains
    }

    /// First domain, in input order, containing the 1-based `position`.
    pub fn domain_at(&self, position: i32) -> Option<&DomainInterval> {
        if self.indexed == 0 || position == i32::MAX {
            return None;
        }
        self.tree
            .find(position..(position + 1))
            .iter()
            .map(|entry| *entry.data())
            .min()
            .map(|idx| &self.domains[idx])
    }

    /// Pair each variant with the name of the domain it falls into.
    pub fn annotate(&self, variants: &[ScoredVariant]) -> Vec<AnnotatedVariant> {
        variants
            .iter()
            .map(|variant| AnnotatedVariant {
                domain: self
                    .domain_at(variant.notation.position)
                    .map(|domain| domain.domain.clone()),
                variant: variant.clone(),
            })
            .collect()
    }
}

/// A scored variant with the domain containing its position.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedVariant {
    pub variant: ScoredVariant,
    pub domain: Option<String>,
}

/// A variant from a clinical variant browser.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClinicalVariant {
    pub protein: String,
    pub notation: VariantNotation,
    /// E.g., `Pathogenic` or `Uncertain significance`.
    pub significance: String,
}

impl ClinicalVariant {
    /// Build from an amino acid change such as `p.G2019S`; `None` if there is no notation.
    pub fn from_change(protein: &str, change: &str, significance: &str) -> Option<Self> {
        Some(Self {
            protein: protein.to_owned(),
            notation: extract_variant(change)?,
            significance: significance.to_owned(),
        })
    }
}

/// A clinical variant together with its AlphaMissense prediction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClinicalAssessment {
    pub clinical: ClinicalVariant,
    pub score: f64,
    pub pathogenicity: Pathogenicity,
}

/// Inner join of clinical and scored variants on protein, position, and residues.
///
/// The order of `clinical` is kept; clinical variants without a score are dropped.
pub fn join_clinical(
    clinical: &[ClinicalVariant],
    scored: &[ScoredVariant],
) -> Vec<ClinicalAssessment> {
    let by_key: HashMap<(&str, &VariantNotation), &ScoredVariant> = scored
        .iter()
        .map(|variant| ((variant.protein.as_str(), &variant.notation), variant))
        .collect();

    clinical
        .iter()
        .filter_map(|variant| {
            by_key
                .get(&(variant.protein.as_str(), &variant.notation))
                .map(|scored| ClinicalAssessment {
                    clinical: variant.clone(),
                    score: scored.score,
                    pathogenicity: scored.pathogenicity,
                })
        })
        .collect()
}
