//! Append-only result outputs shared by all workers.
//!
//! Two destinations, each a held-open file behind its own mutex. Every append
//! writes exactly one full line inside the critical section, so records from
//! concurrent workers never interleave.

use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::{Context, Result};

use crate::types::{ExcludeReason, FileType};

pub const ACCEPTED_HEADER: &str = "file path,file type,encoding";
pub const EXCLUDED_HEADER: &str = "file path,reason";

/// Serialized writers for the accepted and excluded record streams. Opened
/// truncating (header plus blank line) once at scan start; a write failure is
/// fatal for the whole scan.
pub struct ResultSink {
    accepted: Mutex<File>,
    excluded: Mutex<File>,
    accepted_count: AtomicU64,
    excluded_count: AtomicU64,
}

impl ResultSink {
    pub fn create(output_path: &Path, exclude_path: &Path) -> Result<Self> {
        Ok(Self {
            accepted: Mutex::new(open_with_header(output_path, ACCEPTED_HEADER)?),
            excluded: Mutex::new(open_with_header(exclude_path, EXCLUDED_HEADER)?),
            accepted_count: AtomicU64::new(0),
            excluded_count: AtomicU64::new(0),
        })
    }

    /// Append one accepted record: `path,fileType,encoding`.
    pub fn append_accepted(&self, path: &Path, file_type: FileType, encoding: &str) -> Result<()> {
        let line = format!("{},{},{}\n", path.display(), file_type, encoding);
        let mut file = self.accepted.lock().unwrap();
        file.write_all(line.as_bytes())
            .context("write accepted record")?;
        self.accepted_count.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    /// Append one excluded record: `path,reason`.
    pub fn append_excluded(&self, path: &Path, reason: ExcludeReason) -> Result<()> {
        let line = format!("{},{}\n", path.display(), reason);
        let mut file = self.excluded.lock().unwrap();
        file.write_all(line.as_bytes())
            .context("write excluded record")?;
        self.excluded_count.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    pub fn accepted_count(&self) -> u64 {
        self.accepted_count.load(Ordering::Relaxed)
    }

    pub fn excluded_count(&self) -> u64 {
        self.excluded_count.load(Ordering::Relaxed)
    }
}

fn open_with_header(path: &Path, header: &str) -> Result<File> {
    let mut file =
        File::create(path).with_context(|| format!("create output {}", path.display()))?;
    file.write_all(format!("{header}\n\n").as_bytes())
        .with_context(|| format!("write header to {}", path.display()))?;
    Ok(file)
}
