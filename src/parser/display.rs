//! Implementation of Display trait.

use std::fmt::Display;

use crate::parser::ds::*;

/// Newtype for printing a possibly unknown bound, `?` if unknown.
struct Bound(Option<i32>);

impl Display for Bound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(value) => write!(f, "{value}"),
            None => write!(f, "?"),
        }
    }
}

impl Display for DomainInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}-{}",
            self.domain,
            Bound(self.start),
            Bound(self.end)
        )
    }
}

impl Display for VariantNotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.original, self.position, self.mutated)
    }
}
