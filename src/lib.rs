//! Encdet: concurrent text-encoding scanner.
//!
//! Walks configured scan roots (merged into a minimal non-overlapping set),
//! classifies files by type and encoding through a pluggable [`Classifier`],
//! and appends every considered file to exactly one of two CSV outputs:
//! accepted records or excluded records.

pub mod classify;
pub mod engine;
pub mod exclude;
pub mod pathset;
pub mod pipeline;
pub mod sink;
pub mod types;
pub mod utils;

/// Re-export types for the API
pub use types::*;

pub use classify::{Classifier, FileToolClassifier};
pub use pipeline::{ScanSummary, run_scan};

use std::sync::Arc;

/// Result alias used by the public encdet API
pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, Error>;

/// Single library entry point: run a full scan with `config`, classifying
/// through `classifier`. Blocks until every work unit is drained.
pub fn scan(config: &ScanConfig, classifier: Arc<dyn Classifier>) -> Result<ScanSummary> {
    pipeline::run_scan(config, classifier)
}
