//! JSON lines reader.
use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
};

use serde_json::Value;

use crate::error::Error;

/// Fields holding the text, by order of preference.
const TEXT_FIELDS: [&str; 2] = ["text", "content"];

/// Yields the text of each line.
///
/// Lines that are not valid JSON objects are yielded as [Error::MalformedRecord].
#[derive(Debug)]
pub struct JsonlReader<T: Read> {
    br: BufReader<T>,
    position: usize,
    done: bool,
}

impl JsonlReader<File> {
    pub fn open(src: &Path) -> Result<Self, Error> {
        Ok(Self::new(File::open(src)?))
    }
}

impl<T: Read> JsonlReader<T> {
    pub fn new(inner: T) -> Self {
        Self {
            br: BufReader::new(inner),
            position: 0,
            done: false,
        }
    }

    fn parse(&self, line: &[u8]) -> Result<String, Error> {
        let malformed = |reason: String| Error::MalformedRecord {
            id: self.position,
            reason,
        };

        let value: Value = serde_json::from_slice(line).map_err(|e| {
            malformed(format!(
                "Error decoding JSON line: {} ({e})",
                String::from_utf8_lossy(line).trim()
            ))
        })?;

        match value {
            Value::Object(fields) => {
                let text = TEXT_FIELDS
                    .iter()
                    .find_map(|name| fields.get(*name))
                    .and_then(Value::as_str)
                    .unwrap_or_default();
                Ok(text.to_string())
            }
            other => Err(malformed(format!("not a JSON object: {other}"))),
        }
    }
}

impl<T: Read> Iterator for JsonlReader<T> {
    type Item = Result<String, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut line = Vec::new();
        let result = match self.br.read_until(b'\n', &mut line) {
            Ok(0) => return None,
            Ok(_) => self.parse(&line),
            Err(e) => {
                self.done = true;
                Err(Error::Io(e))
            }
        };

        self.position += 1;
        Some(result)
    }
}
