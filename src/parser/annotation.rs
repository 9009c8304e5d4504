//! Turning a UniProt `Domain [FT]` field into gap-filled domain intervals.
//!
//! In the UniProt export the name of a domain (`/note="..."`) follows its span
//! (`DOMAIN 1..50`), so a span is only emitted once the next span opens or the
//! input ends.  Tokens are folded into a [`State`] that moves between three
//! phases: awaiting a domain, span open without a name, span open with a name.

use crate::parser::ds::{DomainInterval, DomainSpan, FeatureToken};

/// Separator between feature table tokens.
pub const TOKEN_SEPARATOR: char = ';';

/// Accumulator of the token fold.
#[derive(Debug, Default)]
struct State {
    /// Intervals emitted so far.
    intervals: Vec<DomainInterval>,
    /// Name from the last `/note=`, empty if none is pending.
    current_name: String,
    current_start: Option<i32>,
    current_end: Option<i32>,
    /// Last successfully parsed end bound.
    previous_end: Option<i32>,
}

impl State {
    fn step(mut self, token: FeatureToken) -> Self {
        match token {
            FeatureToken::Domain(span) => self.open_span(span),
            FeatureToken::Note(name) => self.current_name = name,
            FeatureToken::Other => (),
        }
        self
    }

    /// Emit the pending span if it has been named.
    fn flush(&mut self) {
        if !self.current_name.is_empty() {
            let name = std::mem::take(&mut self.current_name);
            self.intervals.push(DomainInterval {
                domain: name,
                start: self.current_start,
                end: self.current_end,
            });
        }
    }

    fn open_span(&mut self, span: DomainSpan) {
        self.flush();
        self.current_start = span.start;
        self.current_end = span.end;

        if let Some(start) = span.start {
            match self.previous_end {
                None if start > 1 => self.intervals.push(DomainInterval::other(1, start - 1)),
                Some(previous_end) if i64::from(start) - i64::from(previous_end) > 1 => self
                    .intervals
                    .push(DomainInterval::other(previous_end + 1, start - 1)),
                _ => (),
            }
        }

        if span.end.is_some() {
            self.previous_end = span.end;
        }
    }

    fn finish(mut self, sequence_length: i32) -> Vec<DomainInterval> {
        self.flush();
        match self.previous_end {
            // Nothing parsed: the whole sequence is unannotated.
            None => self
                .intervals
                .push(DomainInterval::other(1, sequence_length)),
            Some(previous_end) if previous_end < sequence_length => self
                .intervals
                .push(DomainInterval::other(previous_end + 1, sequence_length)),
            Some(_) => (),
        }
        self.intervals
    }
}

/// Parse the `Domain [FT]` field of a protein of `sequence_length` residues.
///
/// Returns an empty vector if `annotation` is `None`.  Otherwise the result is
/// ordered as the tokens appear, with one `"Other"` interval inserted for each
/// gap before, between, and after the annotated domains.  Bounds that do not
/// parse as integers are recorded as `None` and parsing continues.
///
/// `sequence_length` is expected to be positive; this is not checked here (see
/// [`crate::validator`]).
pub fn parse_domains(annotation: Option<&str>, sequence_length: i32) -> Vec<DomainInterval> {
    let Some(annotation) = annotation else {
        return Vec::new();
    };

    annotation
        .split(TOKEN_SEPARATOR)
        .map(str::trim)
        .filter_map(|token| FeatureToken::parse(token).ok().map(|(_, token)| token))
        .fold(State::default(), State::step)
        .finish(sequence_length)
}
