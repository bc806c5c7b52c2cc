//! Fasttext identifier
use std::path::Path;

use crate::error::Error;
use fasttext::FastText as FastTextLib;

use super::{Identification, Identifier};

/// Holds a [fasttext::FastText] instance and its prediction threshold.
///
/// Only the top-1 prediction is used.
pub struct FastText {
    predictor: FastTextLib,
    pub threshold: f32,
}

impl FastText {
    /// Create a new fasttext classifier.
    ///
    /// filename has to be a path to a `bin` file (usually `lid.176.bin`).
    /// Predictions whose probability is below `threshold` are discarded by fasttext itself.
    ///
    /// # Errors
    /// Propagates [fasttext::FastText] errors.
    pub fn new(filename: &Path, threshold: f32) -> Result<Self, Error> {
        let mut predictor = FastTextLib::new();
        let filename_str = filename.to_str();
        match filename_str {
            None => Err(Error::Custom(format!(
                "invalid filepath for lid: {:?}",
                filename
            ))),
            Some(filename) => {
                predictor.load_model(filename).map_err(Error::FastText)?;
                Ok(Self {
                    predictor,
                    threshold,
                })
            }
        }
    }
}

/// Detection models are sensitive to embedded newlines,
/// and the C++ backend chokes on null chars.
pub(crate) fn clean_input(sentence: &str) -> String {
    sentence.replace('\n', " ").replace(char::from(0), "")
}

impl Identifier for FastText {
    fn identify(&self, sentence: &str) -> Result<Option<Identification>, Error> {
        let sentence = clean_input(sentence);
        let prediction = self
            .predictor
            .predict(&sentence, 1, self.threshold)
            .map_err(Error::FastText)?;

        Ok(prediction.into_iter().next().map(Identification::from))
    }
}
