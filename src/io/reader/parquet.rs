//! Parquet reader.
//!
//! Text is read from the `text` column. Null values are empty records.
use std::{fs::File, path::Path};

use parquet::{
    file::reader::{FileReader, SerializedFileReader},
    record::{reader::RowIter, Field, Row},
};

use crate::error::Error;

const TEXT_COLUMN: &str = "text";

pub struct ParquetReader {
    rows: RowIter<'static>,
    position: usize,
}

impl ParquetReader {
    /// Open a parquet file.
    ///
    /// # Errors
    /// Fails if the file can't be read or has no `text` column.
    pub fn open(src: &Path) -> Result<Self, Error> {
        let reader = SerializedFileReader::new(File::open(src)?)?;

        let has_text = reader
            .metadata()
            .file_metadata()
            .schema_descr()
            .root_schema()
            .get_fields()
            .iter()
            .any(|field| field.name() == TEXT_COLUMN);

        if !has_text {
            return Err(Error::Custom(format!(
                "no {TEXT_COLUMN} column in {:?}",
                src
            )));
        }

        Ok(Self {
            rows: RowIter::from_file_into(Box::new(reader)),
            position: 0,
        })
    }

    fn text(&self, row: &Row) -> Result<String, Error> {
        let field = row
            .get_column_iter()
            .find(|(name, _)| name.as_str() == TEXT_COLUMN)
            .map(|(_, field)| field);

        match field {
            Some(Field::Str(text)) => Ok(text.clone()),
            Some(Field::Bytes(bytes)) => bytes
                .as_utf8()
                .map(str::to_string)
                .map_err(|e| self.malformed(e.to_string())),
            Some(Field::Null) | None => Ok(String::new()),
            Some(other) => Err(self.malformed(format!("{TEXT_COLUMN} is not a string: {other}"))),
        }
    }

    fn malformed(&self, reason: String) -> Error {
        Error::MalformedRecord {
            id: self.position,
            reason,
        }
    }
}

impl Iterator for ParquetReader {
    type Item = Result<String, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let result = match self.rows.next()? {
            Ok(row) => self.text(&row),
            Err(e) => Err(self.malformed(e.to_string())),
        };

        self.position += 1;
        Some(result)
    }
}
