//! JSON lines sentence writer.
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Line record: sentence identifier and text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceRecord {
    pub id: String,
    pub text: String,
}

impl SentenceRecord {
    pub fn new(id: String, text: &str) -> Self {
        Self {
            id,
            text: text.to_string(),
        }
    }
}

/// Appends [SentenceRecord]s to a file, one JSON object per line.
///
/// Each write is flushed.
#[derive(Debug)]
pub struct SentenceWriter {
    path: PathBuf,
    handle: BufWriter<File>,
    nb_records: u64,
}

impl SentenceWriter {
    /// Create (or truncate) the file at `path`.
    pub fn create(path: &Path) -> Result<Self, Error> {
        let handle = BufWriter::new(File::create(path)?);
        Ok(Self {
            path: path.to_path_buf(),
            handle,
            nb_records: 0,
        })
    }

    pub fn write(&mut self, record: &SentenceRecord) -> Result<(), Error> {
        serde_json::to_writer(&mut self.handle, record)?;
        self.handle.write_all(b"\n")?;
        self.handle.flush()?;
        self.nb_records += 1;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn nb_records(&self) -> u64 {
        self.nb_records
    }

    /// Flush and close the file.
    pub fn close(mut self) -> Result<(), Error> {
        self.handle.flush()?;
        let file = self
            .handle
            .into_inner()
            .map_err(|e| Error::Io(e.into_error()))?;
        file.sync_all()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_lines() {
        let dst = tempfile::tempdir().unwrap();
        let path = dst.path().join("out.jsonl");
        let mut w = SentenceWriter::create(&path).unwrap();

        w.write(&SentenceRecord::new("f::doc0::sent0".into(), "Això és tot."))
            .unwrap();

        // flushed before close
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "{\"id\":\"f::doc0::sent0\",\"text\":\"Això és tot.\"}\n");

        w.write(&SentenceRecord::new("f::doc0::sent1".into(), "\"cometes\""))
            .unwrap();
        assert_eq!(w.nb_records(), 2);
        w.close().unwrap();

        let lines: Vec<SentenceRecord> = std::fs::read_to_string(&path)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines[1].text, "\"cometes\"");
    }
}
