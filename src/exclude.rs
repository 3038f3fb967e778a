//! Exclusion rules: absolute path prefixes and regex patterns.

use std::path::{Path, PathBuf};

use regex::Regex;

use crate::pathset::{PathRelation, path_compare};

/// Decides per path whether any configured exclude rule covers it. Built once
/// from the validated config and shared read-only across all workers.
#[derive(Clone, Debug, Default)]
pub struct ExclusionMatcher {
    prefixes: Vec<PathBuf>,
    patterns: Vec<Regex>,
}

impl ExclusionMatcher {
    pub fn new(prefixes: Vec<PathBuf>, patterns: Vec<Regex>) -> Self {
        Self { prefixes, patterns }
    }

    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty() && self.patterns.is_empty()
    }

    /// True when `path` is not covered by any rule. A prefix rule covers its
    /// own path and everything nested under it; a pattern rule covers any
    /// path whose string form matches.
    pub fn needs_scan(&self, path: &Path) -> bool {
        for rule in &self.prefixes {
            match path_compare(rule, path) {
                PathRelation::Equal | PathRelation::Contains => return false,
                PathRelation::ContainedBy | PathRelation::Unrelated => {}
            }
        }
        if !self.patterns.is_empty() {
            let text = path.to_string_lossy();
            if self.patterns.iter().any(|re| re.is_match(&text)) {
                return false;
            }
        }
        true
    }
}
