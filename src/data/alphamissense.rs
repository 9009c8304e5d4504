//! Reading of AlphaMissense amino acid substitution tables.
//!
//! The table is tab-separated with the columns `uniprot_id`, `protein_variant`,
//! `am_pathogenicity`, and `am_class`, preceded by a fixed number of header
//! lines.  It may be gzip-compressed.

use std::{
    collections::HashSet,
    fmt::Display,
    io::{BufRead, BufReader, Read},
    str::FromStr,
    time::Instant,
};

use indexmap::IndexMap;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::data::error::Error;
use crate::parser::VariantNotation;

/// AlphaMissense pathogenicity class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pathogenicity {
    #[serde(alias = "benign")]
    LikelyBenign,
    Ambiguous,
    #[serde(alias = "pathogenic")]
    LikelyPathogenic,
}

impl Pathogenicity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Pathogenicity::LikelyBenign => "likely_benign",
            Pathogenicity::Ambiguous => "ambiguous",
            Pathogenicity::LikelyPathogenic => "likely_pathogenic",
        }
    }
}

impl FromStr for Pathogenicity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "likely_benign" | "benign" => Ok(Pathogenicity::LikelyBenign),
            "ambiguous" => Ok(Pathogenicity::Ambiguous),
            "likely_pathogenic" | "pathogenic" => Ok(Pathogenicity::LikelyPathogenic),
            _ => Err(Error::InvalidPathogenicity(s.to_owned())),
        }
    }
}

impl Display for Pathogenicity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A missense variant of a protein with its AlphaMissense score.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoredVariant {
    /// UniProt accession, e.g., `Q5S007`.
    pub protein: String,
    pub notation: VariantNotation,
    /// `am_pathogenicity`, between 0 and 1.
    pub score: f64,
    pub pathogenicity: Pathogenicity,
}

/// Configuration for the `alphamissense::Reader`.
#[derive(Debug, PartialEq, Clone)]
pub struct Config {
    /// Number of lines to skip before the first record.
    pub header_lines: usize,
    /// Only yield records of these UniProt accessions; all if `None`.
    pub proteins: Option<HashSet<String>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            header_lines: 4,
            proteins: None,
        }
    }
}

impl Config {
    /// Restrict the reader to the given accessions.
    pub fn with_proteins<I, S>(self, proteins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            proteins: Some(proteins.into_iter().map(Into::into).collect()),
            ..self
        }
    }
}

/// Iterator over the records of an AlphaMissense table.
///
/// Records that cannot be interpreted are skipped and logged; only I/O and
/// framing problems are returned as errors.
pub struct Reader<R: Read> {
    config: Config,
    records: csv::StringRecordsIntoIter<BufReader<R>>,
}

impl Reader<Box<dyn Read>> {
    /// Open the table at `path`, decompressing if the path ends with `.gz`.
    pub fn from_path<P: AsRef<std::path::Path>>(path: P, config: Config) -> Result<Self, Error> {
        let path = path.as_ref().to_string_lossy().to_string();
        debug!("Opening AlphaMissense table {:?}", &path);
        let file = std::fs::File::open(&path).map_err(|_e| Error::FileOpen(path.clone()))?;
        let read: Box<dyn Read> = if path.ends_with(".gz") {
            Box::new(flate2::read::GzDecoder::new(file))
        } else {
            Box::new(file)
        };
        Self::new(read, config)
    }
}

impl<R: Read> Reader<R> {
    pub fn new(read: R, config: Config) -> Result<Self, Error> {
        let mut read = BufReader::new(read);
        let mut line = String::new();
        for _ in 0..config.header_lines {
            line.clear();
            if read.read_line(&mut line)? == 0 {
                break;
            }
        }

        let records = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .from_reader(read)
            .into_records();
        Ok(Self { config, records })
    }

    fn convert(&self, record: &csv::StringRecord) -> Option<ScoredVariant> {
        let protein = record.get(0).map(str::trim).unwrap_or_default();
        if let Some(proteins) = &self.config.proteins {
            if !proteins.contains(protein) {
                return None;
            }
        }

        let Some(notation) = record.get(1).and_then(VariantNotation::extract) else {
            debug!("Skipping record without variant notation: {:?}", record);
            return None;
        };
        let score = match record.get(2).map(|s| s.trim().parse::<f64>()) {
            Some(Ok(score)) => score,
            _ => {
                warn!("Skipping record with invalid score: {:?}", record);
                return None;
            }
        };
        let pathogenicity = match record.get(3).map(str::parse::<Pathogenicity>) {
            Some(Ok(pathogenicity)) => pathogenicity,
            _ => {
                warn!("Skipping record with invalid class: {:?}", record);
                return None;
            }
        };

        Some(ScoredVariant {
            protein: protein.to_owned(),
            notation,
            score,
            pathogenicity,
        })
    }
}

impl<R: Read> Iterator for Reader<R> {
    type Item = Result<ScoredVariant, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let record = match self.records.next()? {
                Ok(record) => record,
                Err(e) => return Some(Err(e.into())),
            };
            if let Some(variant) = self.convert(&record) {
                return Some(Ok(variant));
            }
        }
    }
}

/// Group variants by protein, keeping the order in which proteins first appear.
pub fn group_by_protein<I>(variants: I) -> Result<IndexMap<String, Vec<ScoredVariant>>, Error>
where
    I: IntoIterator<Item = Result<ScoredVariant, Error>>,
{
    let start = Instant::now();
    let mut result: IndexMap<String, Vec<ScoredVariant>> = IndexMap::new();
    for variant in variants {
        let variant = variant?;
        result
            .entry(variant.protein.clone())
            .or_default()
            .push(variant);
    }
    debug!(
        "grouping variants of {} proteins took {:?}",
        result.len(),
        start.elapsed()
    );
    Ok(result)
}

#[cfg(test)]
mod test {
    use std::io::Write;

    use anyhow::Error;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use test_log::test;

    use super::*;

    const HEADER: &str = "# Copyright 2023 DeepMind Technologies Limited\n#\n\
                          # Licensed under CC BY-NC-SA 4.0 license\n\
                          uniprot_id\tprotein_variant\tam_pathogenicity\tam_class\n";

    fn table(body: &str) -> String {
        format!("{HEADER}{body}")
    }

    fn notation(original: &str, position: i32, mutated: &str) -> VariantNotation {
        VariantNotation {
            position,
            original: original.to_owned(),
            mutated: mutated.to_owned(),
        }
    }

    #[rstest]
    #[test_log::test]
    #[case("likely_benign", Pathogenicity::LikelyBenign)]
    #[case("benign", Pathogenicity::LikelyBenign)]
    #[case("ambiguous", Pathogenicity::Ambiguous)]
    #[case(" likely_pathogenic ", Pathogenicity::LikelyPathogenic)]
    #[case("pathogenic", Pathogenicity::LikelyPathogenic)]
    fn pathogenicity_from_str(#[case] input: &str, #[case] expected: Pathogenicity) {
        assert_eq!(input.parse::<Pathogenicity>().ok(), Some(expected));
    }

    #[test]
    fn pathogenicity_invalid() {
        assert!("VUS".parse::<Pathogenicity>().is_err());
    }

    #[test]
    fn pathogenicity_serde() -> Result<(), Error> {
        assert_eq!(
            serde_json::to_string(&Pathogenicity::LikelyPathogenic)?,
            r#""likely_pathogenic""#
        );
        assert_eq!(
            serde_json::from_str::<Pathogenicity>(r#""benign""#)?,
            Pathogenicity::LikelyBenign
        );
        Ok(())
    }

    #[test]
    fn read_records() -> Result<(), Error> {
        let input = table(
            "Q5S007\tM1A\t0.2551\tlikely_benign\n\
             Q5S007\tG2019S\t0.9787\tlikely_pathogenic\n",
        );
        let variants = Reader::new(input.as_bytes(), Config::default())?
            .collect::<Result<Vec<_>, _>>()?;

        assert_eq!(
            variants,
            vec![
                ScoredVariant {
                    protein: "Q5S007".to_owned(),
                    notation: notation("M", 1, "A"),
                    score: 0.2551,
                    pathogenicity: Pathogenicity::LikelyBenign,
                },
                ScoredVariant {
                    protein: "Q5S007".to_owned(),
                    notation: notation("G", 2019, "S"),
                    score: 0.9787,
                    pathogenicity: Pathogenicity::LikelyPathogenic,
                },
            ]
        );

        Ok(())
    }

    #[test]
    fn skip_malformed_records() -> Result<(), Error> {
        let input = table(
            "Q5S007\tdel\t0.5\tambiguous\n\
             Q5S007\tR1441C\tn/a\tlikely_pathogenic\n\
             Q5S007\tR1441G\t0.9\tunknown\n\
             Q5S007\tR1441H\n\
             Q5S007\tY1699C\t0.8\tlikely_pathogenic\n",
        );
        let variants = Reader::new(input.as_bytes(), Config::default())?
            .collect::<Result<Vec<_>, _>>()?;

        assert_eq!(variants.len(), 1);
        assert_eq!(variants[0].notation, notation("Y", 1699, "C"));

        Ok(())
    }

    #[test]
    fn filter_proteins() -> Result<(), Error> {
        let input = table(
            "P37840\tA30P\t0.7\tlikely_pathogenic\n\
             Q5S007\tG2019S\t0.9787\tlikely_pathogenic\n\
             Q99497\tL166P\t0.95\tlikely_pathogenic\n",
        );
        let config = Config::default().with_proteins(["Q5S007", "P37840"]);
        let proteins = Reader::new(input.as_bytes(), config)?
            .map(|variant| variant.map(|variant| variant.protein))
            .collect::<Result<Vec<_>, _>>()?;

        assert_eq!(proteins, vec!["P37840", "Q5S007"]);

        Ok(())
    }

    #[test]
    fn header_lines_are_skipped_verbatim() -> Result<(), Error> {
        // The first record would be read if fewer header lines were skipped.
        let input = "X\tA1B\t0.1\tambiguous\nY\tC2D\t0.2\tambiguous\n";
        let config = Config {
            header_lines: 1,
            ..Config::default()
        };
        let proteins = Reader::new(input.as_bytes(), config)?
            .map(|variant| variant.map(|variant| variant.protein))
            .collect::<Result<Vec<_>, _>>()?;

        assert_eq!(proteins, vec!["Y"]);

        Ok(())
    }

    #[test]
    fn short_input() -> Result<(), Error> {
        let variants = Reader::new("# only a comment\n".as_bytes(), Config::default())?
            .collect::<Result<Vec<_>, _>>()?;
        assert!(variants.is_empty());
        Ok(())
    }

    #[test]
    fn grouping_keeps_file_order() -> Result<(), Error> {
        let input = table(
            "Q9BXM7\tA168P\t0.9\tlikely_pathogenic\n\
             Q5S007\tG2019S\t0.9787\tlikely_pathogenic\n\
             Q9BXM7\tG309D\t0.8\tlikely_pathogenic\n",
        );
        let groups = group_by_protein(Reader::new(input.as_bytes(), Config::default())?)?;

        assert_eq!(
            groups.keys().cloned().collect::<Vec<_>>(),
            vec!["Q9BXM7", "Q5S007"]
        );
        assert_eq!(groups["Q9BXM7"].len(), 2);
        assert_eq!(groups["Q5S007"].len(), 1);

        Ok(())
    }

    #[test]
    fn from_gzip_path() -> Result<(), Error> {
        let mut encoder =
            flate2::write::GzEncoder::new(Vec::new(), flate2::Compression::default());
        encoder.write_all(table("Q5S007\tG2019S\t0.9787\tlikely_pathogenic\n").as_bytes())?;
        let compressed = encoder.finish()?;

        let tmp_dir = tempfile::tempdir()?;
        let path = tmp_dir.path().join("AlphaMissense_aa_substitutions.tsv.gz");
        std::fs::write(&path, compressed)?;

        let variants =
            Reader::from_path(&path, Config::default())?.collect::<Result<Vec<_>, _>>()?;
        assert_eq!(variants.len(), 1);
        assert_eq!(variants[0].notation, notation("G", 2019, "S"));

        Ok(())
    }

    #[test]
    fn from_fixture() -> Result<(), Error> {
        let variants = Reader::from_path(
            "tests/data/alphamissense/excerpt.tsv",
            Config::default().with_proteins(["Q5S007"]),
        )?
        .collect::<Result<Vec<_>, _>>()?;

        insta::assert_compact_debug_snapshot!(
            variants.iter().map(|v| v.notation.to_string()).collect::<Vec<_>>(),
            @r#"["M1A", "R1441C", "G2019S"]"#
        );

        Ok(())
    }

    #[test]
    fn missing_file() {
        assert!(matches!(
            Reader::from_path("tests/data/does-not-exist.tsv", Config::default()),
            Err(super::Error::FileOpen(_))
        ));
    }
}
