/*!
# Sentence writing

[SentenceWriter] appends JSON lines to a single file, flushing on every write.

The user-facing object is [DialectFiles], which holds a [SentenceWriter] for each dialect,
and a lazily populated one for each language of sentences whose dialect is unknown.
!*/
mod dialect_files;
mod sentence_writer;

pub use dialect_files::DialectFiles;
pub use sentence_writer::{SentenceRecord, SentenceWriter};
