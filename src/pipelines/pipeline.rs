//! Pipeline trait.
use crate::error::Error;

/// A runnable processing step over files.
///
/// Generic over the returned value, so that pipelines can report
/// what they did (e.g. [crate::stats::DialectStats]).
pub trait Pipeline<T> {
    fn run(&self) -> Result<T, Error>;
}
