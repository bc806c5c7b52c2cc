//! # catdialects
//!
//! Splits Catalan text corpora by dialect.
//!
//! ## Getting started
//!
//! ```sh
//! catdialects 0.1.0
//! Sentence-level Catalan dialect classification.
//!
//! USAGE:
//!     catdialects <SUBCOMMAND>
//!
//! SUBCOMMANDS:
//!     batch       Classify the sentences of every file matching a glob pattern
//!     classify    Classify the sentences of a single file
//!     help        Prints this message or the help of the given subcommand(s)
//! ```
//!
//! Logging is configured with `RUST_LOG` (e.g. `RUST_LOG=catdialects=info`).
use catdialects::{
    error::Error,
    identifiers::{FastText, LanguageGate},
    io::Format,
    pipelines::{Batch, DialectPipeline, Models, Pipeline},
    segmentation::UnicodeSegmenter,
    tagging::LexiconTagger,
};
use structopt::StructOpt;

#[macro_use]
extern crate log;

mod cli;

/// Load the identifier and tagger, build the language gate.
fn load_models(
    opts: &cli::ModelOpts,
) -> Result<Models<FastText, UnicodeSegmenter, LexiconTagger>, Error> {
    info!("loading language identification model {:?}", opts.lid_path);
    let identifier = FastText::new(&opts.lid_path, 0.0)?;

    let tagger = match &opts.lexicon {
        Some(path) => LexiconTagger::from_path(path)?,
        None => {
            warn!("no lexicon provided, every word will be tagged from its shape only");
            LexiconTagger::default()
        }
    };

    let mut gate = LanguageGate::catalan();
    if let Some(threshold) = opts.threshold {
        gate = gate.with_threshold(threshold);
    }
    debug!("language gate: {:?}", gate);
    Ok(Models::new(identifier, UnicodeSegmenter, tagger, gate))
}

fn run(opt: cli::Catdialects) -> Result<(), Error> {
    match opt {
        cli::Catdialects::Classify(c) => {
            // fail before the (slow) model loading
            Format::from_path(&c.src)?;
            let models = load_models(&c.models)?;
            let p = DialectPipeline::new(c.src, c.dst, &models);
            let stats = p.run()?;
            info!("done: {:?}", stats);
        }
        cli::Catdialects::Batch(b) => {
            let models = load_models(&b.models)?;
            let p = Batch::new(b.pattern, b.dst, &models);
            let stats = p.run()?;
            info!("done: {:?}", stats);
        }
    };
    Ok(())
}

fn main() {
    env_logger::init();

    let opt = cli::Catdialects::from_args();
    debug!("cli args\n{:#?}", opt);

    if let Err(e) = run(opt) {
        if e.is_configuration() {
            error!("{} (supported: .jsonl, .csv, .tsv, .parquet)", e);
        } else {
            error!("{}", e);
        }
        std::process::exit(1);
    }
}
