//! Error enum
use std::fmt;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Serde(serde_json::Error),
    Csv(csv::Error),
    Parquet(parquet::errors::ParquetError),
    Glob(glob::GlobError),
    GlobPattern(glob::PatternError),
    FastText(String),
    /// Input file extension is not one of the supported record formats.
    UnsupportedFormat(String),
    /// A single record could not be decoded. Processing can go on with the next one.
    MalformedRecord { id: usize, reason: String },
    Custom(String),
}

impl Error {
    /// Configuration errors are caller mistakes and are never recovered from.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Error::UnsupportedFormat(_))
    }

    /// Record errors are local to one record and never abort a file.
    pub fn is_record(&self) -> bool {
        matches!(self, Error::MalformedRecord { .. })
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "io error: {e}"),
            Error::Serde(e) => write!(f, "json error: {e}"),
            Error::Csv(e) => write!(f, "csv error: {e}"),
            Error::Parquet(e) => write!(f, "parquet error: {e}"),
            Error::Glob(e) => write!(f, "glob error: {e}"),
            Error::GlobPattern(e) => write!(f, "invalid glob pattern: {e}"),
            Error::FastText(e) => write!(f, "fasttext error: {e}"),
            Error::UnsupportedFormat(ext) => write!(f, "Unsupported file type: {ext}"),
            Error::MalformedRecord { id, reason } => write!(f, "malformed record {id}: {reason}"),
            Error::Custom(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Serde(e)
    }
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Error {
        Error::Csv(e)
    }
}

impl From<parquet::errors::ParquetError> for Error {
    fn from(e: parquet::errors::ParquetError) -> Error {
        Error::Parquet(e)
    }
}

impl From<glob::GlobError> for Error {
    fn from(e: glob::GlobError) -> Error {
        Error::Glob(e)
    }
}

impl From<glob::PatternError> for Error {
    fn from(e: glob::PatternError) -> Error {
        Error::GlobPattern(e)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}
