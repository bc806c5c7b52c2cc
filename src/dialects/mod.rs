/*! Dialect classification

Sentences are checked against the dialect rules in a fixed order:

1. central markers, on raw text (no tagging needed)
1. valencian markers, on tagged tokens
1. balearic markers, on tagged tokens

The first matching rule wins. Central markers are the most frequent and least ambiguous ones,
so a sentence holding both central and valencian/balearic markers is central.
!*/
mod rules;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{error::Error, tagging::Tagger};

pub use rules::{is_balearic, is_central, is_valencian};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    Central,
    Valencian,
    Balearic,
    Unknown,
}

impl Dialect {
    /// Dialects that get a dedicated output file.
    pub const KNOWN: [Dialect; 3] = [Dialect::Central, Dialect::Valencian, Dialect::Balearic];

    pub fn as_str(&self) -> &'static str {
        match self {
            Dialect::Central => "central",
            Dialect::Valencian => "valencian",
            Dialect::Balearic => "balearic",
            Dialect::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Rule-based dialect classifier.
///
/// The tagger is only called when the central rule does not match,
/// and at most once per sentence.
pub struct Classifier<T: Tagger> {
    tagger: T,
}

impl<T: Tagger> Classifier<T> {
    pub fn new(tagger: T) -> Self {
        Self { tagger }
    }

    pub fn classify(&self, sentence: &str) -> Result<Dialect, Error> {
        if is_central(sentence) {
            return Ok(Dialect::Central);
        }

        let tokens = self.tagger.tag(sentence)?;
        let dialect = if is_valencian(&tokens) {
            Dialect::Valencian
        } else if is_balearic(&tokens) {
            Dialect::Balearic
        } else {
            Dialect::Unknown
        };

        Ok(dialect)
    }
}
