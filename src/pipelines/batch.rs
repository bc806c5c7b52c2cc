//! Sequential classification of every file matching a glob pattern.
use std::{collections::HashMap, path::PathBuf};

use log::{error, info, warn};

use crate::{
    error::Error, identifiers::Identifier, io::Format, segmentation::Segmenter,
    stats::DialectStats, tagging::Tagger,
};

use super::{dispatch::Models, DialectPipeline, Pipeline};

pub struct Batch<'m, I, S, T>
where
    I: Identifier,
    S: Segmenter,
    T: Tagger,
{
    pattern: String,
    dst: PathBuf,
    models: &'m Models<I, S, T>,
}

impl<'m, I, S, T> Batch<'m, I, S, T>
where
    I: Identifier,
    S: Segmenter,
    T: Tagger,
{
    pub fn new(pattern: String, dst: PathBuf, models: &'m Models<I, S, T>) -> Self {
        Self {
            pattern,
            dst,
            models,
        }
    }

    /// list matching files, checking that they all have a supported format.
    fn get_paths(&self) -> Result<Vec<PathBuf>, Error> {
        let paths = glob::glob(&self.pattern)?.collect::<Result<Vec<_>, _>>()?;

        for path in &paths {
            Format::from_path(path)?;
        }

        // outputs are named after file stems
        let mut stems: HashMap<_, Vec<&PathBuf>> = HashMap::new();
        for path in &paths {
            stems.entry(path.file_stem()).or_default().push(path);
        }
        for (stem, colliding) in stems.iter().filter(|(_, p)| p.len() > 1) {
            warn!(
                "{:?} share the stem {:?}: their outputs will overwrite each other",
                colliding, stem
            );
        }

        Ok(paths)
    }
}

impl<I, S, T> Pipeline<DialectStats> for Batch<'_, I, S, T>
where
    I: Identifier,
    S: Segmenter,
    T: Tagger,
{
    /// Returns the sum of every file's stats.
    ///
    /// A file failing does not stop the batch, but the batch fails once every file has been processed.
    fn run(&self) -> Result<DialectStats, Error> {
        let paths = self.get_paths()?;
        if paths.is_empty() {
            warn!("no file matches {}", self.pattern);
        }
        info!("{} files found using {}", paths.len(), self.pattern);

        let mut total = DialectStats::default();
        let mut failures = Vec::new();
        for path in paths {
            let pipeline = DialectPipeline::new(path.clone(), self.dst.clone(), self.models);
            match pipeline.run() {
                Ok(stats) => total += stats,
                Err(e) => {
                    error!("{:?}: {}", path, e);
                    failures.push(path);
                }
            }
        }

        info!("batch stats: {:?}", total);
        if failures.is_empty() {
            Ok(total)
        } else {
            Err(Error::Custom(format!(
                "{} file(s) failed: {:?}",
                failures.len(),
                failures
            )))
        }
    }
}
