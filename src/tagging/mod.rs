/*! Part-of-speech tagging

Holds a [Tagger] trait for implementing other taggers.
The provided one is a [LexiconTagger], backed by a word → tag lexicon.
!*/
mod lexicon;
mod pos;

pub use lexicon::LexiconTagger;
pub use pos::{Pos, Token};

use crate::error::Error;

/// Splits a sentence into words and gives each one a part-of-speech.
pub trait Tagger {
    fn tag(&self, sentence: &str) -> Result<Vec<Token>, Error>;
}

impl<T: Tagger + ?Sized> Tagger for &T {
    fn tag(&self, sentence: &str) -> Result<Vec<Token>, Error> {
        (**self).tag(sentence)
    }
}
