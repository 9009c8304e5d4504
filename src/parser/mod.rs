//! Parsing of UniProt domain annotations and compact variant notation.

mod annotation;
mod display;
mod ds;
mod error;
mod impl_parse;
mod parse_funcs;

pub use crate::parser::annotation::{parse_domains, TOKEN_SEPARATOR};
pub use crate::parser::ds::*;
pub use crate::parser::error::Error;

/// Extract `(position, original, mutated)` from notation such as `p.A123B`.
///
/// The first run of uppercase letters, digits, and uppercase letters found
/// anywhere in `text` is used.  Returns `None` if there is none; callers should
/// leave the variant fields unset rather than fail.
pub fn extract_variant(text: &str) -> Option<VariantNotation> {
    VariantNotation::extract(text)
}
