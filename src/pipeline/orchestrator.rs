//! Scan orchestration: merge roots, build the matcher and sink, run the walk
//! and worker pool, drain, and report.

use std::fs;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result, anyhow, bail};
use crossbeam_channel::bounded;
use log::{debug, info, warn};

use crate::classify::Classifier;
use crate::exclude::ExclusionMatcher;
use crate::pathset::PathSet;
use crate::sink::ResultSink;
use crate::types::ScanConfig;
use crate::utils::config::WORK_UNIT_CHANNEL_CAP;

use super::context::ScanContext;
use super::walk::walk_root;
use super::worker::spawn_workers;

/// Totals reported after the drain barrier.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScanSummary {
    pub accepted: u64,
    pub excluded: u64,
    /// Directories that produced a work unit.
    pub units: usize,
}

/// Run one full scan. The walk runs on the calling thread and only enqueues
/// units; classification happens exclusively in the worker pool. Returns once
/// every outstanding unit is processed (the scan's only barrier).
pub fn run_scan(config: &ScanConfig, classifier: Arc<dyn Classifier>) -> Result<ScanSummary> {
    let mut roots = PathSet::new();
    for path in &config.scan_paths {
        let resolved = fs::canonicalize(path)
            .with_context(|| format!("resolve scan path {}", path.display()))?;
        if !resolved.is_dir() {
            bail!("scan path {} is not a directory", resolved.display());
        }
        roots.merge(resolved);
    }
    debug!(
        "merged {} scan path(s) into {} root(s)",
        config.scan_paths.len(),
        roots.len()
    );

    // Prefix rules may be written through symlinked parents; candidates are
    // always resolved, so compare rules in resolved form too. A rule whose
    // path does not exist is kept as given.
    let exclude_paths = config
        .exclude_paths
        .iter()
        .map(|p| fs::canonicalize(p).unwrap_or_else(|_| p.clone()))
        .collect();
    let matcher = ExclusionMatcher::new(exclude_paths, config.exclude_patterns.clone());
    if matcher.is_empty() {
        warn!("no exclude rules configured, scanning everything");
    }

    let sink = ResultSink::create(&config.output_path, &config.exclude_file)?;

    let ctx = ScanContext {
        scan_types: config.scan_types.clone(),
        matcher: Arc::new(matcher),
        classifier,
        sink: Arc::new(sink),
        first_error: Arc::new(Mutex::new(None)),
    };

    let (unit_tx, unit_rx) = bounded(WORK_UNIT_CHANNEL_CAP);
    let workers = spawn_workers(unit_rx, config.workers, &ctx);

    let mut units = 0_usize;
    for root in roots.roots() {
        info!("scanning {}", root.display());
        units += walk_root(root, &unit_tx, &ctx);
    }

    // Dropping the last sender closes the channel so workers drain and exit.
    drop(unit_tx);
    for handle in workers {
        handle
            .join()
            .map_err(|_| anyhow!("worker thread panicked"))?;
    }

    if let Some(msg) = ctx.first_error.lock().unwrap().take() {
        bail!("scan aborted: {msg}");
    }

    Ok(ScanSummary {
        accepted: ctx.sink.accepted_count(),
        excluded: ctx.sink.excluded_count(),
        units,
    })
}
