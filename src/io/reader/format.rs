//! Supported input formats.
use std::{fmt, path::Path};

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// one JSON object per line
    Jsonl,
    Csv,
    Tsv,
    Parquet,
}

impl Format {
    /// Get the format from the file extension (case insensitive).
    ///
    /// # Errors
    /// Returns [Error::UnsupportedFormat] for any other extension.
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let ext = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "jsonl" => Ok(Format::Jsonl),
            "csv" => Ok(Format::Csv),
            "tsv" => Ok(Format::Tsv),
            "parquet" => Ok(Format::Parquet),
            _ => Err(Error::UnsupportedFormat(format!(".{ext}"))),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Format::Jsonl => "jsonl",
            Format::Csv => "csv",
            Format::Tsv => "tsv",
            Format::Parquet => "parquet",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn test_extensions() {
        let cases = [
            ("a.jsonl", Format::Jsonl),
            ("dir/b.CSV", Format::Csv),
            ("c.Tsv", Format::Tsv),
            ("/abs/d.parquet", Format::Parquet),
        ];
        for (path, expected) in cases {
            assert_eq!(Format::from_path(&PathBuf::from(path)).unwrap(), expected);
        }
    }

    #[test]
    fn test_unsupported() {
        for path in ["a.json", "b.txt.gz", "noext"] {
            let err = Format::from_path(&PathBuf::from(path)).unwrap_err();
            assert!(err.is_configuration());
        }
    }
}
