/*! Sentence segmentation

Splits record text into sentences.

[UnicodeSegmenter] uses the Unicode sentence boundaries ([UAX #29](https://unicode.org/reports/tr29/)),
and does not break after common Catalan abbreviations.
!*/
use std::collections::HashSet;

use lazy_static::lazy_static;
use unicode_segmentation::UnicodeSegmentation;

lazy_static! {
    /// Abbreviations that are usually followed by a capitalized word (names, numbers).
    static ref ABBREVIATIONS: HashSet<&'static str> = [
        "sr.", "sra.", "srs.", "srta.", "dr.", "dra.", "prof.", "profa.", "núm.", "pàg.",
        "av.", "c.", "pl.", "art.", "cap.", "vol.", "st.", "sta.", "ex.", "p.",
    ]
    .into_iter()
    .collect();
}

/// Sentence splitter.
///
/// Sentences are yielded in text order, and an empty text yields no sentence.
pub trait Segmenter {
    fn segment<'t>(&self, text: &'t str) -> Vec<&'t str>;
}

impl<S: Segmenter + ?Sized> Segmenter for &S {
    fn segment<'t>(&self, text: &'t str) -> Vec<&'t str> {
        (**self).segment(text)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct UnicodeSegmenter;

impl UnicodeSegmenter {
    fn ends_with_abbreviation(piece: &str) -> bool {
        piece
            .split_whitespace()
            .last()
            .map(|word| ABBREVIATIONS.contains(word.to_lowercase().as_str()))
            .unwrap_or(false)
    }
}

impl Segmenter for UnicodeSegmenter {
    fn segment<'t>(&self, text: &'t str) -> Vec<&'t str> {
        let mut sentences = Vec::new();
        let mut start = None;

        for (idx, piece) in text.split_sentence_bound_indices() {
            let begin = *start.get_or_insert(idx);

            if Self::ends_with_abbreviation(piece) {
                continue;
            }

            let sentence = text[begin..idx + piece.len()].trim();
            if !sentence.is_empty() {
                sentences.push(sentence);
            }
            start = None;
        }

        // trailing abbreviation
        if let Some(begin) = start {
            let sentence = text[begin..].trim();
            if !sentence.is_empty() {
                sentences.push(sentence);
            }
        }

        sentences
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert!(UnicodeSegmenter.segment("").is_empty());
        assert!(UnicodeSegmenter.segment("   \n ").is_empty());
    }

    #[test]
    fn test_order() {
        let text = "Aquest llibre és molt bo. M'agrada molt! Tu què en penses?";
        let sentences = UnicodeSegmenter.segment(text);
        assert_eq!(
            sentences,
            vec![
                "Aquest llibre és molt bo.",
                "M'agrada molt!",
                "Tu què en penses?"
            ]
        );
    }

    #[test]
    fn test_abbreviation() {
        let text = "Ha vingut el Sr. Puig. Demà marxa.";
        let sentences = UnicodeSegmenter.segment(text);
        assert_eq!(sentences, vec!["Ha vingut el Sr. Puig.", "Demà marxa."]);
    }

    #[test]
    fn test_newlines() {
        let text = "Primera frase.\n\nSegona frase.";
        let sentences = UnicodeSegmenter.segment(text);
        assert_eq!(sentences, vec!["Primera frase.", "Segona frase."]);
    }

    #[test]
    fn test_no_final_punctuation() {
        let sentences = UnicodeSegmenter.segment("una frase sense punt");
        assert_eq!(sentences, vec!["una frase sense punt"]);
    }
}
