//! Directory walk: breadth-first over one root, emitting one [`WorkUnit`] per
//! visited directory and pruning excluded subtrees before descending.

use std::collections::VecDeque;
use std::fs;
use std::path::Path;

use crossbeam_channel::Sender;
use log::{debug, warn};

use crate::types::{ExcludeReason, WorkUnit};

use super::context::ScanContext;

/// Walk `root` breadth-first. For each directory: an exclude-rule hit prunes
/// the subtree (the directory itself is recorded once as excluded); otherwise
/// its immediate files become one work unit sent on `unit_tx`. Sending blocks
/// when the channel is full, which is the walk's only backpressure.
///
/// Returns the number of units submitted. Unreadable directories are logged
/// and skipped; only output-write failures stop the walk early.
pub fn walk_root(root: &Path, unit_tx: &Sender<WorkUnit>, ctx: &ScanContext) -> usize {
    let mut queue = VecDeque::new();
    queue.push_back(root.to_path_buf());
    let mut units = 0_usize;

    while let Some(dir) = queue.pop_front() {
        if ctx.has_fatal() {
            break;
        }
        if !ctx.matcher.needs_scan(&dir) {
            debug!("pruning excluded directory {}", dir.display());
            if let Err(err) = ctx.sink.append_excluded(&dir, ExcludeReason::ByRule) {
                ctx.record_fatal(err.to_string());
                break;
            }
            continue;
        }

        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(err) => {
                warn!("skipping unreadable directory {}: {}", dir.display(), err);
                continue;
            }
        };

        let mut files = Vec::new();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    warn!("skipping entry in {}: {}", dir.display(), err);
                    continue;
                }
            };
            let path = entry.path();
            let file_type = match entry.file_type() {
                Ok(ft) => ft,
                Err(err) => {
                    warn!("skipping unreadable entry {}: {}", path.display(), err);
                    continue;
                }
            };
            if file_type.is_symlink() {
                // Never descend a symlinked directory: an alias of a scanned
                // directory would record the same physical file under two
                // paths, and a cycle would never end. Symlinks to files are
                // still scanned.
                match fs::metadata(&path) {
                    Ok(meta) if meta.is_file() => files.push(entry.file_name()),
                    Ok(_) => debug!("not following symlinked directory {}", path.display()),
                    Err(err) => {
                        warn!("skipping unreadable entry {}: {}", path.display(), err);
                    }
                }
            } else if file_type.is_dir() {
                queue.push_back(path);
            } else {
                files.push(entry.file_name());
            }
        }

        if !files.is_empty() {
            if unit_tx.send(WorkUnit { dir, files }).is_err() {
                break;
            }
            units += 1;
        }
    }
    units
}
