/*! Record reading

Each supported format has its own reader yielding the raw text of each record.
[RecordReader] holds one of them, chosen once from the file extension,
and numbers records from 0 in file order.

Malformed records are yielded as [crate::error::Error::MalformedRecord] and still get a number.
!*/
mod delimited;
mod format;
mod jsonl;
mod parquet;

use std::{fs::File, path::Path};

pub use self::parquet::ParquetReader;
pub use delimited::DelimitedReader;
pub use format::Format;
pub use jsonl::JsonlReader;

use crate::error::Error;

/// A unit of input text, numbered by its position in the source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    id: usize,
    text: String,
}

impl Record {
    pub fn new(id: usize, text: String) -> Self {
        Self { id, text }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Holds different kinds of readers
pub enum RecordReader {
    Jsonl(JsonlReader<File>),
    Csv(DelimitedReader<File>),
    Tsv(DelimitedReader<File>),
    Parquet(ParquetReader),
}

impl RecordReader {
    pub fn open(src: &Path, format: Format) -> Result<Self, Error> {
        let reader = match format {
            Format::Jsonl => RecordReader::Jsonl(JsonlReader::open(src)?),
            Format::Csv => RecordReader::Csv(DelimitedReader::open_csv(src)?),
            Format::Tsv => RecordReader::Tsv(DelimitedReader::open_tsv(src)?),
            Format::Parquet => RecordReader::Parquet(ParquetReader::open(src)?),
        };
        Ok(reader)
    }

    /// Open a file, guessing the format from its extension.
    pub fn from_path(src: &Path) -> Result<Self, Error> {
        Self::open(src, Format::from_path(src)?)
    }

    fn next_text(&mut self) -> Option<Result<String, Error>> {
        match self {
            RecordReader::Jsonl(r) => r.next(),
            RecordReader::Csv(r) | RecordReader::Tsv(r) => r.next(),
            RecordReader::Parquet(r) => r.next(),
        }
    }

    /// Iterate over records, numbering them.
    pub fn records(self) -> Records {
        Records {
            inner: self,
            position: 0,
        }
    }
}

/// Numbered records of a [RecordReader].
pub struct Records {
    inner: RecordReader,
    position: usize,
}

impl Iterator for Records {
    type Item = Result<Record, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let text = self.inner.next_text()?;
        let id = self.position;
        self.position += 1;
        Some(text.map(|text| Record::new(id, text)))
    }
}
