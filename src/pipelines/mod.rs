//! Pipelines.
//!
//! [DialectPipeline] classifies the sentences of a single file, [Batch] runs it on every file matching a pattern.
//! The module provides a light [pipeline::Pipeline] trait that enables easy and flexible pipeline creation.
mod batch;
mod dialect;
pub mod dispatch;
#[allow(clippy::module_inception)]
pub mod pipeline;

pub use batch::Batch;
pub use dialect::DialectPipeline;
pub use dispatch::{Dispatcher, Models};
pub use pipeline::Pipeline;
