//! Load and validate `encdet.toml` into an immutable [`ScanConfig`].
//!
//! Sections mirror the configuration surface: `[scan_filter]` with
//! `scan_path`/`scan_type`, `[exclude_filter]` with
//! `exclude_path`/`exclude_regex`, plus top-level `output_path`,
//! `exclude_file`, and `workers`. Validation failures abort before any
//! traversal starts.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use log::warn;
use regex::Regex;
use serde::Deserialize;

use crate::types::{FileType, ScanConfig, ScanTypes};
use crate::utils::config::{DEFAULT_EXCLUDE_FILE, DEFAULT_OUTPUT_PATH, DEFAULT_WORKERS};

#[derive(Debug, Default, Deserialize)]
pub struct EncdetToml {
    #[serde(default)]
    scan_filter: ScanFilterSection,
    #[serde(default)]
    exclude_filter: ExcludeFilterSection,
    output_path: Option<String>,
    exclude_file: Option<String>,
    workers: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
struct ScanFilterSection {
    #[serde(default)]
    scan_path: Vec<String>,
    #[serde(default)]
    scan_type: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ExcludeFilterSection {
    #[serde(default)]
    exclude_path: Vec<String>,
    #[serde(default)]
    exclude_regex: Vec<String>,
}

/// Read and validate the configuration file.
pub fn load_config(path: &Path) -> Result<ScanConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("read config file {}", path.display()))?;
    parse_config(&text).with_context(|| format!("invalid config {}", path.display()))
}

/// Parse and validate configuration from a TOML string.
pub fn parse_config(text: &str) -> Result<ScanConfig> {
    let raw: EncdetToml = toml::from_str(text).context("parse TOML")?;
    validate(raw)
}

fn validate(raw: EncdetToml) -> Result<ScanConfig> {
    if raw.scan_filter.scan_path.is_empty() {
        bail!("scan_filter.scan_path is empty, nothing to scan");
    }
    let scan_paths = raw
        .scan_filter
        .scan_path
        .iter()
        .map(PathBuf::from)
        .collect();

    let scan_types = validate_scan_types(&raw.scan_filter.scan_type)?;

    let exclude_paths = validate_exclude_paths(&raw.exclude_filter.exclude_path)?;
    let exclude_patterns = raw
        .exclude_filter
        .exclude_regex
        .iter()
        .map(|p| Regex::new(p).with_context(|| format!("invalid exclude_regex {p:?}")))
        .collect::<Result<Vec<_>>>()?;

    let output_path = checked_output(raw.output_path, DEFAULT_OUTPUT_PATH, "output_path")?;
    let exclude_file = checked_output(raw.exclude_file, DEFAULT_EXCLUDE_FILE, "exclude_file")?;

    let workers = raw.workers.unwrap_or(DEFAULT_WORKERS);
    if workers == 0 {
        bail!("workers must be at least 1");
    }

    Ok(ScanConfig {
        scan_paths,
        scan_types,
        exclude_paths,
        exclude_patterns,
        output_path,
        exclude_file,
        workers,
    })
}

/// Empty defaults to `all` with a warning; `all` anywhere collapses the list;
/// unknown tags and the `other` tag are fatal.
fn validate_scan_types(tags: &[String]) -> Result<ScanTypes> {
    if tags.is_empty() {
        warn!("scan_filter.scan_type is empty, scanning all text types");
        return Ok(ScanTypes::All);
    }
    if tags.iter().any(|t| t == "all") {
        return Ok(ScanTypes::All);
    }
    let mut set = HashSet::new();
    for tag in tags {
        match FileType::from_tag(tag) {
            Some(FileType::Other) | None => bail!("{tag} is not a valid scan type"),
            Some(file_type) => {
                set.insert(file_type);
            }
        }
    }
    Ok(ScanTypes::Tags(set))
}

/// Prefix rules only make sense as absolute paths; candidates are always
/// resolved absolute paths, so a relative rule could never match.
fn validate_exclude_paths(paths: &[String]) -> Result<Vec<PathBuf>> {
    let mut out = Vec::with_capacity(paths.len());
    for p in paths {
        let path = PathBuf::from(p);
        if !path.is_absolute() {
            bail!("exclude_filter.exclude_path entry {p:?} must be absolute");
        }
        out.push(path);
    }
    Ok(out)
}

/// Missing or blank falls back to the default with a warning; an output file
/// name starting with `.` is rejected.
fn checked_output(value: Option<String>, default: &str, key: &str) -> Result<PathBuf> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());
    let value = match value {
        Some(v) => v,
        None => {
            warn!("{key} is not set, using {default}");
            default.to_string()
        }
    };
    let path = PathBuf::from(value);
    if path
        .file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with('.'))
    {
        bail!("{key}: output file name must not start with '.'");
    }
    Ok(path)
}
