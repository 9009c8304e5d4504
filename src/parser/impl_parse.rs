//! Provide implementation of parsing to data structures.

use std::str::FromStr;

use nom::{branch::alt, IResult, Parser};
use regex::Regex;

use crate::parser::ds::*;
use crate::parser::parse_funcs::*;
use crate::parser::Error;

lazy_static::lazy_static! {
    /// Letters, then digits, then letters; searched anywhere in the input.
    static ref VARIANT_NOTATION: Regex =
        Regex::new(r"([A-Z]+)([0-9]+)([A-Z]+)").expect("should not happen; invalid regex");
}

impl FeatureToken {
    pub fn parse(input: &str) -> IResult<&str, Self> {
        alt((feature::domain, feature::note, feature::other)).parse(input)
    }
}

impl VariantNotation {
    /// Extract the first `<letters><digits><letters>` run found in `text`.
    ///
    /// Returns `None` if there is no such run or the position of the first run does not fit
    /// into `i32`; later runs are not tried.
    pub fn extract(text: &str) -> Option<Self> {
        let captures = VARIANT_NOTATION.captures(text)?;
        let position = captures[2].parse::<i32>().ok()?;
        Some(Self {
            position,
            original: captures[1].to_owned(),
            mutated: captures[3].to_owned(),
        })
    }
}

impl FromStr for VariantNotation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::extract(s).ok_or_else(|| Error::InvalidVariantNotation(s.to_owned()))
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn feature_token_parse() {
        assert_eq!(
            FeatureToken::parse("DOMAIN 60..100"),
            Ok((
                "",
                FeatureToken::Domain(DomainSpan {
                    start: Some(60),
                    end: Some(100)
                })
            ))
        );
        assert_eq!(
            FeatureToken::parse("/note=\"ANK\""),
            Ok(("", FeatureToken::Note("ANK".to_owned())))
        );
        assert_eq!(
            FeatureToken::parse("REGION 5..9"),
            Ok(("", FeatureToken::Other))
        );
        assert_eq!(FeatureToken::parse(""), Ok(("", FeatureToken::Other)));
    }

    #[rstest]
    #[case("p.A123B", 123, "A", "B")]
    #[case("A123B", 123, "A", "B")]
    #[case("G2019S", 2019, "G", "S")]
    #[case("Q5S007:R1441C", 5, "Q", "S")]
    #[case("p.Gly12Asp is not matched but VAL600GLU is", 600, "VAL", "GLU")]
    #[case("M007K", 7, "M", "K")]
    fn extract_cases(
        #[case] text: &str,
        #[case] position: i32,
        #[case] original: &str,
        #[case] mutated: &str,
    ) {
        assert_eq!(
            VariantNotation::extract(text),
            Some(VariantNotation {
                position,
                original: original.to_owned(),
                mutated: mutated.to_owned(),
            })
        );
    }

    #[rstest]
    #[case("c.45del")]
    #[case("")]
    #[case("a123b")]
    #[case("A123")]
    #[case("123B")]
    // Positions are bounded by `i32`; only the first run is considered, so an
    // oversized first run hides any later one.
    #[case("A99999999999B")]
    #[case("A99999999999B G2019S")]
    fn extract_no_match(#[case] text: &str) {
        assert_eq!(VariantNotation::extract(text), None);
    }

    #[test]
    fn from_str() {
        assert_eq!(
            "p.A123B".parse::<VariantNotation>(),
            Ok(VariantNotation {
                position: 123,
                original: "A".to_owned(),
                mutated: "B".to_owned(),
            })
        );
        assert_eq!(
            "c.45del".parse::<VariantNotation>(),
            Err(Error::InvalidVariantNotation("c.45del".to_owned()))
        );
    }
}
