//! Implementation of parser functions.

/// Code for parsing tokens of UniProt `Domain [FT]` feature tables.
pub mod feature {
    use nom::{
        bytes::complete::tag,
        character::complete::{digit1, multispace0, one_of},
        combinator::{all_consuming, map, map_res, opt, recognize, rest},
        sequence::{delimited, pair, preceded},
        IResult, Parser,
    };

    use crate::parser::ds::{DomainSpan, FeatureToken};

    pub static DOMAIN_KEY: &str = "DOMAIN";
    pub static NOTE_QUALIFIER: &str = "/note=";

    /// A signed integer with optional surrounding whitespace and nothing else.
    pub fn bound(input: &str) -> IResult<&str, i32> {
        all_consuming(delimited(
            multispace0,
            map_res(recognize(pair(opt(one_of("+-")), digit1)), |s: &str| {
                s.parse::<i32>()
            }),
            multispace0,
        ))
        .parse(input)
    }

    /// Parse `<start>..<end>`; each side falls back to `None` on its own.
    pub fn span(input: &str) -> DomainSpan {
        let mut parts = input.split("..");
        let mut next_bound = || {
            parts
                .next()
                .and_then(|text| bound(text).ok())
                .map(|(_, value)| value)
        };
        let start = next_bound();
        let end = next_bound();
        DomainSpan { start, end }
    }

    pub fn domain(input: &str) -> IResult<&str, FeatureToken> {
        map(preceded(tag(DOMAIN_KEY), rest), |text: &str| {
            FeatureToken::Domain(span(text))
        })
        .parse(input)
    }

    pub fn note(input: &str) -> IResult<&str, FeatureToken> {
        map(preceded(tag(NOTE_QUALIFIER), rest), |text: &str| {
            FeatureToken::Note(text.replace('"', "").trim().to_owned())
        })
        .parse(input)
    }

    pub fn other(input: &str) -> IResult<&str, FeatureToken> {
        map(rest, |_: &str| FeatureToken::Other).parse(input)
    }
}
