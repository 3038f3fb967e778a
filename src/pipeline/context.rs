//! Shared state for the scan pipeline, passed into the walk thread and every
//! worker.

use std::sync::{Arc, Mutex};

use crate::classify::Classifier;
use crate::exclude::ExclusionMatcher;
use crate::sink::ResultSink;
use crate::types::ScanTypes;

/// Read-only collaborators plus the shared first-error slot. Cloning is cheap:
/// everything mutable sits behind an `Arc`.
#[derive(Clone)]
pub struct ScanContext {
    pub scan_types: ScanTypes,
    pub matcher: Arc<ExclusionMatcher>,
    pub classifier: Arc<dyn Classifier>,
    pub sink: Arc<ResultSink>,
    /// First fatal error (output write failure). Workers and the walk stop
    /// once it is set; the orchestrator bails after the drain barrier.
    pub first_error: Arc<Mutex<Option<String>>>,
}

impl ScanContext {
    pub fn record_fatal(&self, msg: String) {
        let _ = self.first_error.lock().unwrap().get_or_insert(msg);
    }

    pub fn has_fatal(&self) -> bool {
        self.first_error.lock().unwrap().is_some()
    }
}
