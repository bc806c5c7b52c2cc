//! Stub models and helpers shared by integration tests.
#![allow(dead_code)]
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use catdialects::{
    error::Error,
    identifiers::{Identification, Identifier, LanguageGate},
    io::SentenceRecord,
    pipelines::Models,
    segmentation::UnicodeSegmenter,
    tagging::{LexiconTagger, Pos},
};

/// Identifies sentences from a few keywords, Catalan otherwise.
pub struct KeywordIdentifier;

impl Identifier for KeywordIdentifier {
    fn identify(&self, sentence: &str) -> Result<Option<Identification>, Error> {
        let lower = sentence.to_lowercase();
        let identification = if lower.contains("hello") || lower.contains("the ") {
            Some(Identification::new("en", 0.98))
        } else if lower.contains("bonjour") {
            Some(Identification::new("fr", 0.95))
        } else if lower.contains("potser") {
            // catalan, but not confidently
            Some(Identification::new("ca", 0.55))
        } else {
            Some(Identification::new("ca", 0.93))
        };
        Ok(identification)
    }
}

pub fn tagger() -> LexiconTagger {
    LexiconTagger::from_entries([
        ("me", Pos::Pron),
        ("te", Pos::Pron),
        ("diguis", Pos::Verb),
        ("preferisc", Pos::Verb),
        ("llibre", Pos::Noun),
        ("taula", Pos::Noun),
        ("casa", Pos::Noun),
        ("es", Pos::Det),
        ("sa", Pos::Det),
    ])
}

pub fn models() -> Models<KeywordIdentifier, UnicodeSegmenter, LexiconTagger> {
    Models::new(
        KeywordIdentifier,
        UnicodeSegmenter,
        tagger(),
        LanguageGate::catalan(),
    )
}

/// Read back a JSON lines output file.
pub fn read_records(path: &Path) -> Vec<SentenceRecord> {
    let file = File::open(path).unwrap_or_else(|e| panic!("could not open {:?}: {}", path, e));
    BufReader::new(file)
        .lines()
        .map(|line| serde_json::from_str(&line.unwrap()).unwrap())
        .collect()
}

/// Names of the files in `dir`, sorted.
pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    names
}
