//! Comma/tab separated readers.
//!
//! The first row holds the column names. Text is taken from the first column present
//! among a list of candidates: `text`, `content` for CSV, plus `sentence` for TSV.
use std::{fs::File, io::Read, path::Path};

use csv::StringRecordsIntoIter;
use log::warn;

use crate::error::Error;

const CSV_COLUMNS: [&str; 2] = ["text", "content"];
const TSV_COLUMNS: [&str; 3] = ["text", "content", "sentence"];

pub struct DelimitedReader<T: Read> {
    records: StringRecordsIntoIter<T>,
    /// `None` if no candidate column exists: every record is then empty.
    column: Option<usize>,
    position: usize,
    done: bool,
}

impl DelimitedReader<File> {
    pub fn open_csv(src: &Path) -> Result<Self, Error> {
        Self::new(File::open(src)?, b',', &CSV_COLUMNS)
    }

    pub fn open_tsv(src: &Path) -> Result<Self, Error> {
        Self::new(File::open(src)?, b'\t', &TSV_COLUMNS)
    }
}

impl<T: Read> DelimitedReader<T> {
    pub fn new(inner: T, delimiter: u8, candidates: &[&str]) -> Result<Self, Error> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .flexible(true)
            .from_reader(inner);

        let headers = reader.headers()?;
        let column = candidates
            .iter()
            .find_map(|name| headers.iter().position(|header| header == *name));

        if column.is_none() {
            warn!(
                "none of the columns {:?} found in {:?}: all records will be empty",
                candidates, headers
            );
        }

        Ok(Self {
            records: reader.into_records(),
            column,
            position: 0,
            done: false,
        })
    }
}

impl<T: Read> Iterator for DelimitedReader<T> {
    type Item = Result<String, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let result = match self.records.next()? {
            Ok(record) => Ok(self
                .column
                .and_then(|idx| record.get(idx))
                .unwrap_or_default()
                .to_string()),
            // io errors are not local to a single row
            Err(e) if e.is_io_error() => {
                self.done = true;
                Err(Error::Csv(e))
            }
            Err(e) => Err(Error::MalformedRecord {
                id: self.position,
                reason: e.to_string(),
            }),
        };

        self.position += 1;
        Some(result)
    }
}
