/*! Language identification models

Holds an [Identifier] trait for implementing other ones,
and a [LanguageGate] that keeps sentences of a given language.

The current identifier used is [fasttext](https://fasttext.cc) !*/
mod fasttext;
mod identification;
mod identifier;

pub use self::fasttext::FastText;
pub use identification::Identification;
pub use identifier::{Identifier, LanguageGate, DEFAULT_THRESHOLD};
