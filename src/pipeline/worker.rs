//! Worker pool: consume work units, apply the type filter and file-level
//! exclude rules, classify survivors, and append records.

use std::path::Path;
use std::thread::{self, JoinHandle};

use anyhow::Result;
use crossbeam_channel::Receiver;
use log::debug;

use crate::types::{ExcludeReason, FileType, ScanTypes, WorkUnit};

use super::context::ScanContext;

/// Spawn `count` workers sharing `unit_rx`. Workers exit when the channel
/// closes (all senders dropped) or when a fatal sink error is recorded.
pub fn spawn_workers(
    unit_rx: Receiver<WorkUnit>,
    count: usize,
    ctx: &ScanContext,
) -> Vec<JoinHandle<()>> {
    (0..count)
        .map(|_| {
            let unit_rx = unit_rx.clone();
            let ctx = ctx.clone();
            thread::spawn(move || worker_loop(unit_rx, ctx))
        })
        .collect()
}

fn worker_loop(unit_rx: Receiver<WorkUnit>, ctx: ScanContext) {
    while let Ok(unit) = unit_rx.recv() {
        if ctx.has_fatal() {
            break;
        }
        if let Err(err) = process_unit(&unit, &ctx) {
            // Only output-write failures propagate this far.
            ctx.record_fatal(err.to_string());
            break;
        }
    }
}

/// Process every file of one visited directory. Errors are sink-write
/// failures only; classification failures are absorbed per file.
fn process_unit(unit: &WorkUnit, ctx: &ScanContext) -> Result<()> {
    for name in &unit.files {
        let path = unit.dir.join(name);
        process_file(&path, ctx)?;
    }
    Ok(())
}

/// One file, three gates:
/// 1. scan-type filter (`all` → is_text, tag set → classified type in set);
///    rejects and classification failures go out as `excluded-by-type-filter`;
/// 2. exclude rules on the file's own path → `excluded-by-rule`;
/// 3. encoding classification → accepted record (failure here is absorbed as
///    a type-filter exclusion, the file is treated as `other`).
fn process_file(path: &Path, ctx: &ScanContext) -> Result<()> {
    let file_type = match &ctx.scan_types {
        ScanTypes::All => match ctx.classifier.is_text(path) {
            Ok(true) => match ctx.classifier.file_type(path) {
                Ok(file_type) => file_type,
                Err(err) => {
                    debug!("classification failed for {}: {}", path.display(), err);
                    return ctx.sink.append_excluded(path, ExcludeReason::ByTypeFilter);
                }
            },
            Ok(false) => {
                return ctx.sink.append_excluded(path, ExcludeReason::ByTypeFilter);
            }
            Err(err) => {
                debug!("classification failed for {}: {}", path.display(), err);
                return ctx.sink.append_excluded(path, ExcludeReason::ByTypeFilter);
            }
        },
        ScanTypes::Tags(tags) => {
            let file_type = match ctx.classifier.file_type(path) {
                Ok(file_type) => file_type,
                Err(err) => {
                    debug!("classification failed for {}: {}", path.display(), err);
                    FileType::Other
                }
            };
            if !tags.contains(&file_type) {
                return ctx.sink.append_excluded(path, ExcludeReason::ByTypeFilter);
            }
            file_type
        }
    };

    if !ctx.matcher.needs_scan(path) {
        return ctx.sink.append_excluded(path, ExcludeReason::ByRule);
    }

    match ctx.classifier.encoding(path) {
        Ok(encoding) => ctx.sink.append_accepted(path, file_type, &encoding),
        Err(err) => {
            debug!("encoding detection failed for {}: {}", path.display(), err);
            ctx.sink.append_excluded(path, ExcludeReason::ByTypeFilter)
        }
    }
}
