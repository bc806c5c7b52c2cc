//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "catdialects",
    about = "Sentence-level Catalan dialect classification."
)]
/// Holds every command that is callable by the `catdialects` command.
pub enum Catdialects {
    #[structopt(about = "Classify the sentences of a single file")]
    Classify(Classify),
    #[structopt(about = "Classify the sentences of every file matching a glob pattern")]
    Batch(Batch),
}

#[derive(Debug, StructOpt)]
/// Models and thresholds shared by every command.
pub struct ModelOpts {
    #[structopt(
        parse(from_os_str),
        long = "lid-path",
        help = "Path to lid.176.bin",
        default_value = "lid.176.bin"
    )]
    pub lid_path: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "lexicon",
        help = "Tab-separated form/pos lexicon used by the tagger"
    )]
    pub lexicon: Option<PathBuf>,
    #[structopt(
        long = "threshold",
        help = "Minimum (exclusive) Catalan identification confidence. Default is the gate's own threshold."
    )]
    pub threshold: Option<f32>,
}

#[derive(Debug, StructOpt)]
/// Classify command and parameters.
///
/// ```sh
/// catdialects-classify 0.1.0
/// Classify the sentences of a single file
///
/// USAGE:
///     catdialects classify [OPTIONS] <src> <dst>
///
/// OPTIONS:
///         --lexicon <lexicon>        Tab-separated form/pos lexicon used by the tagger
///         --lid-path <lid-path>      Path to lid.176.bin [default: lid.176.bin]
///         --threshold <threshold>    Minimum (exclusive) Catalan identification confidence
///
/// ARGS:
///     <src>    input file (.jsonl, .csv, .tsv or .parquet)
///     <dst>    output folder
/// ```
pub struct Classify {
    #[structopt(
        parse(from_os_str),
        help = "input file (.jsonl, .csv, .tsv or .parquet)"
    )]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "output folder")]
    pub dst: PathBuf,
    #[structopt(flatten)]
    pub models: ModelOpts,
}

#[derive(Debug, StructOpt)]
/// Batch command and parameters.
pub struct Batch {
    #[structopt(help = "glob pattern of input files (quote it to avoid shell expansion)")]
    pub pattern: String,
    #[structopt(parse(from_os_str), help = "output folder")]
    pub dst: PathBuf,
    #[structopt(flatten)]
    pub models: ModelOpts,
}
