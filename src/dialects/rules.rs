//! Dialect markers.
//!
//! - Demonstratives: `aquest`/`aquell` (central), `eixe`/`este`/`ese` (valencian)
//! - Inchoative verbs ending in `-isc`, as in `preferisc` (valencian)
//! - Clitic pronouns: `em`, `et`, `ens`, `us` (central), proclitic `me`, `te`, `nos`, `vos` (valencian)
//! - Salat article: `es`, `sa` (balearic) rather than `el`, `la` (central)
use itertools::Itertools;
use lazy_static::lazy_static;
use regex::RegexSet;

use crate::tagging::{Pos, Token};

lazy_static! {
    static ref CENTRAL: RegexSet = RegexSet::new([
        r"(?i)\b(aquest|aquell)\b",
        r"(?i)\b(em|et|ens|us)\b",
        r"(?i)\b(el|la)\b",
    ])
    .unwrap();
}

const VALENCIAN_DEMONSTRATIVES: [&str; 3] = ["eixe", "este", "ese"];
const VALENCIAN_PRONOUNS: [&str; 4] = ["me", "te", "nos", "vos"];
const INCHOATIVE_SUFFIX: &str = "isc";
const SALAT_ARTICLES: [&str; 2] = ["es", "sa"];

/// Central markers, matched on raw text.
pub fn is_central(sentence: &str) -> bool {
    CENTRAL.is_match(sentence)
}

pub fn is_valencian(tokens: &[Token]) -> bool {
    tokens.iter().any(|token| {
        let word = token.folded();
        VALENCIAN_DEMONSTRATIVES.contains(&word.as_str())
            || (token.pos() == Pos::Verb && word.ends_with(INCHOATIVE_SUFFIX))
            || VALENCIAN_PRONOUNS.contains(&word.as_str())
    })
}

/// `es`/`sa` immediately followed by a noun.
pub fn is_balearic(tokens: &[Token]) -> bool {
    tokens.iter().tuple_windows().any(|(article, next)| {
        SALAT_ARTICLES.contains(&article.folded().as_str()) && next.pos() == Pos::Noun
    })
}
