//! Per-record processing: segmentation, language gate, classification, writing.
use log::{debug, info};

use crate::{
    dialects::{Classifier, Dialect},
    error::Error,
    identifiers::{Identifier, LanguageGate},
    io::{writer::DialectFiles, Record, SentenceRecord},
    segmentation::Segmenter,
    stats::DialectStats,
    tagging::Tagger,
};

/// Language code used when the identifier gives no prediction for a sentence of unknown dialect.
pub const UNKNOWN_LANGUAGE: &str = "unk";

/// Models used to process sentences.
pub struct Models<I, S, T>
where
    I: Identifier,
    S: Segmenter,
    T: Tagger,
{
    pub identifier: I,
    pub segmenter: S,
    pub classifier: Classifier<T>,
    pub gate: LanguageGate,
}

impl<I, S, T> Models<I, S, T>
where
    I: Identifier,
    S: Segmenter,
    T: Tagger,
{
    pub fn new(identifier: I, segmenter: S, tagger: T, gate: LanguageGate) -> Self {
        Self {
            identifier,
            segmenter,
            classifier: Classifier::new(tagger),
            gate,
        }
    }
}

/// Stable sentence identifier: `file::doc{record}::sent{sentence}`
pub fn sentence_id(file_name: &str, record_id: usize, sentence_idx: usize) -> String {
    format!("{file_name}::doc{record_id}::sent{sentence_idx}")
}

/// Owns the output files and counters of a single input file.
pub struct Dispatcher<'m, I, S, T>
where
    I: Identifier,
    S: Segmenter,
    T: Tagger,
{
    models: &'m Models<I, S, T>,
    file_name: String,
    files: DialectFiles,
    stats: DialectStats,
}

impl<'m, I, S, T> Dispatcher<'m, I, S, T>
where
    I: Identifier,
    S: Segmenter,
    T: Tagger,
{
    pub fn new(models: &'m Models<I, S, T>, file_name: &str, files: DialectFiles) -> Self {
        Self {
            models,
            file_name: file_name.to_string(),
            files,
            stats: DialectStats::default(),
        }
    }

    /// Segment, filter, classify and write sentences of a record.
    pub fn process(&mut self, record: &Record) -> Result<(), Error> {
        let sentences = self.models.segmenter.segment(record.text());

        for (sentence_idx, sentence) in sentences.into_iter().enumerate() {
            if !self
                .models
                .gate
                .accepts(&self.models.identifier, sentence)?
            {
                continue;
            }

            let dialect = self.models.classifier.classify(sentence)?;
            self.stats.increment(dialect);

            let id = sentence_id(&self.file_name, record.id(), sentence_idx);
            let line = SentenceRecord::new(id, sentence);

            match dialect {
                Dialect::Unknown => {
                    let lang = self
                        .models
                        .identifier
                        .identify(sentence)?
                        .map(|identification| identification.label().to_string())
                        .unwrap_or_else(|| UNKNOWN_LANGUAGE.to_string());

                    if !self.files.contains(&lang) {
                        info!("{}: first sentence in language {}", self.file_name, lang);
                    }
                    self.files.write_language(&lang, &line)?;
                }
                known => self.files.write_dialect(known, &line)?,
            }
        }

        Ok(())
    }

    pub fn stats(&self) -> &DialectStats {
        &self.stats
    }

    /// Give back the output files and counters, so that they can be closed and saved.
    pub fn finish(self) -> (DialectFiles, DialectStats) {
        debug!("{}: {:?}", self.file_name, self.stats);
        (self.files, self.stats)
    }
}
