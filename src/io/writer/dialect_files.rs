/*! Dialect-separated sentence writers for a single input file.

Each known dialect gets a [SentenceWriter] at creation time (`<stem>_<dialect>.jsonl`).
Sentences of unknown dialect are separated by language,
with writers (`<stem>_<lang>.jsonl`) created on first use.

[DialectFiles::close] has to be called once every write is done.
!*/
use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use log::{debug, error, info};

use crate::{dialects::Dialect, error::Error};

use super::{SentenceRecord, SentenceWriter};

pub struct DialectFiles {
    dst: PathBuf,
    stem: String,
    central: SentenceWriter,
    valencian: SentenceWriter,
    balearic: SentenceWriter,
    languages: BTreeMap<String, SentenceWriter>,
}

impl DialectFiles {
    /// Create the three dialect files in `dst`.
    pub fn new(dst: &Path, stem: &str) -> Result<Self, Error> {
        let create =
            |dialect: Dialect| SentenceWriter::create(&Self::path_for(dst, stem, dialect.as_str()));

        Ok(Self {
            dst: dst.to_path_buf(),
            stem: stem.to_string(),
            central: create(Dialect::Central)?,
            valencian: create(Dialect::Valencian)?,
            balearic: create(Dialect::Balearic)?,
            languages: BTreeMap::new(),
        })
    }

    /// `dst/<stem>_<suffix>.jsonl`
    pub fn path_for(dst: &Path, stem: &str, suffix: &str) -> PathBuf {
        dst.join(format!("{stem}_{suffix}.jsonl"))
    }

    pub fn contains(&self, lang: &str) -> bool {
        self.languages.contains_key(lang)
    }

    /// Create the writer for `lang` if it doesn't exist yet.
    pub fn insert_writer(&mut self, lang: &str) -> Result<(), Error> {
        if !self.contains(lang) {
            let path = Self::path_for(&self.dst, &self.stem, lang);
            info!("Creating writer {:?}", path);
            self.languages
                .insert(lang.to_string(), SentenceWriter::create(&path)?);
        }
        Ok(())
    }

    /// Write a sentence of a known dialect.
    ///
    /// # Errors
    /// Fails on [Dialect::Unknown], that has to be written with [DialectFiles::write_language].
    pub fn write_dialect(&mut self, dialect: Dialect, record: &SentenceRecord) -> Result<(), Error> {
        let writer = match dialect {
            Dialect::Central => &mut self.central,
            Dialect::Valencian => &mut self.valencian,
            Dialect::Balearic => &mut self.balearic,
            Dialect::Unknown => {
                return Err(Error::Custom(
                    "unknown dialect sentences are written by language".to_string(),
                ))
            }
        };
        writer.write(record)
    }

    /// Write a sentence of unknown dialect in its language file, creating it if needed.
    pub fn write_language(&mut self, lang: &str, record: &SentenceRecord) -> Result<(), Error> {
        self.insert_writer(lang)?;
        match self.languages.get_mut(lang) {
            Some(writer) => writer.write(record),
            None => Err(Error::Custom(format!("no writer for language {lang}"))),
        }
    }

    /// Languages that got a writer, in lexicographic order.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.languages.keys().map(String::as_str)
    }

    /// Close every file.
    ///
    /// All files are closed even if some fail; the first error is returned.
    pub fn close(self) -> Result<(), Error> {
        let writers = [self.central, self.valencian, self.balearic]
            .into_iter()
            .chain(self.languages.into_values());

        let mut first_error = None;
        for writer in writers {
            let path = writer.path().to_path_buf();
            debug!("closing {:?} ({} sentences)", path, writer.nb_records());
            if let Err(e) = writer.close() {
                error!("could not close {:?}: {}", path, e);
                first_error.get_or_insert(e);
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
