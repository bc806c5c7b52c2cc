/*!
# IO utilities

Record reading from the supported input formats, and dialect/language separated sentence writing.
!*/
pub mod reader;
pub mod writer;

pub use reader::{Format, Record, RecordReader};
pub use writer::{DialectFiles, SentenceRecord};
