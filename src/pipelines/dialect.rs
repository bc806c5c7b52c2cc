//! Dialect classification of a single input file.
//!
//! # Processing
//! 1. The input format is checked from the file extension. Unsupported formats stop everything before any output is created.
//! 1. Dialect files (`<stem>_{central,valencian,balearic}.jsonl`) are created in the destination folder.
//! 1. Each record is split in sentences, each sentence goes through the language gate and is classified.
//! 1. Sentences are written in their dialect file, or in a per-language file if the dialect is unknown.
//! 1. Files are closed and stats are saved in `<stem>_stats.json`, even if processing failed midway.
use std::path::{Path, PathBuf};

use log::{debug, error, info};

use crate::{
    error::Error,
    identifiers::Identifier,
    io::{writer::DialectFiles, RecordReader},
    segmentation::Segmenter,
    stats::DialectStats,
    tagging::Tagger,
};

use super::{
    dispatch::{Dispatcher, Models},
    Pipeline,
};

/// Number of records between two progress messages.
const PROGRESS_EVERY: usize = 10_000;

pub struct DialectPipeline<'m, I, S, T>
where
    I: Identifier,
    S: Segmenter,
    T: Tagger,
{
    src: PathBuf,
    dst: PathBuf,
    models: &'m Models<I, S, T>,
}

impl<'m, I, S, T> DialectPipeline<'m, I, S, T>
where
    I: Identifier,
    S: Segmenter,
    T: Tagger,
{
    pub fn new(src: PathBuf, dst: PathBuf, models: &'m Models<I, S, T>) -> Self {
        Self { src, dst, models }
    }

    /// Input file stem, used to name output files.
    fn stem(src: &Path) -> Result<String, Error> {
        src.file_stem()
            .map(|stem| stem.to_string_lossy().to_string())
            .ok_or_else(|| Error::Custom(format!("no file name in {:?}", src)))
    }

    pub fn stats_path(dst: &Path, stem: &str) -> PathBuf {
        dst.join(format!("{stem}_stats.json"))
    }

    /// Feed every record to the dispatcher.
    ///
    /// Malformed records are logged and skipped, other errors stop processing.
    fn process_records(
        &self,
        reader: RecordReader,
        dispatcher: &mut Dispatcher<I, S, T>,
    ) -> Result<(), Error> {
        let mut nb_records = 0;
        for record in reader.records() {
            nb_records += 1;
            if nb_records % PROGRESS_EVERY == 0 {
                debug!(
                    "{:?}: {} records, {:?}",
                    self.src,
                    nb_records,
                    dispatcher.stats()
                );
            }

            match record {
                Ok(record) => dispatcher.process(&record)?,
                Err(e) if e.is_record() => error!("{:?}: {}", self.src, e),
                Err(e) => return Err(e),
            }
        }

        info!("{:?}: processed {} records", self.src, nb_records);
        Ok(())
    }
}

impl<I, S, T> Pipeline<DialectStats> for DialectPipeline<'_, I, S, T>
where
    I: Identifier,
    S: Segmenter,
    T: Tagger,
{
    fn run(&self) -> Result<DialectStats, Error> {
        info!("Processing file {:?}", self.src);

        let reader = RecordReader::from_path(&self.src)?;
        let stem = Self::stem(&self.src)?;

        std::fs::create_dir_all(&self.dst)?;
        let files = DialectFiles::new(&self.dst, &stem)?;

        // ids carry the input path as given
        let file_name = self.src.to_string_lossy();
        let mut dispatcher = Dispatcher::new(self.models, &file_name, files);
        let result = self.process_records(reader, &mut dispatcher);
        if let Err(e) = &result {
            error!("{:?}: processing stopped: {}", self.src, e);
        }

        // cleanup runs whatever the processing result is
        let (files, stats) = dispatcher.finish();
        info!("Closing files");
        let closed = files.close();
        info!("Finished closing files");

        let saved = stats.write_to(&Self::stats_path(&self.dst, &stem));
        info!("Finished saving stats: {:?}", stats);

        result?;
        closed?;
        saved?;
        Ok(stats)
    }
}
