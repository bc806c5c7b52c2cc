/*! # catdialects

Sentence-level Catalan dialect classification.

Records are read from JSONL, CSV, TSV or Parquet files and split in sentences.
Sentences identified as Catalan are classified as Central, Valencian or Balearic
and written in per-dialect JSONL files, along with per-file stats.

See [pipelines] for the processing steps.
!*/
pub mod dialects;
pub mod error;
pub mod identifiers;
pub mod io;
pub mod pipelines;
pub mod segmentation;
pub mod stats;
pub mod tagging;
