//! Public and internal types for the encdet API and pipeline.

use std::collections::HashSet;
use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;

use regex::Regex;

/// Fixed file-type vocabulary. Detection checks the extension table first,
/// then the MIME prefix table; anything unmatched is [`FileType::Other`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FileType {
    C,
    Perl,
    Java,
    Javascript,
    Php,
    Python,
    Ruby,
    Shell,
    Patch,
    Ini,
    Css,
    Tpl,
    Html,
    Xml,
    Json,
    Text,
    Lua,
    Nsi,
    Other,
}

impl FileType {
    /// Tag used in configuration and in the accepted output.
    pub fn as_str(&self) -> &'static str {
        match self {
            FileType::C => "c",
            FileType::Perl => "perl",
            FileType::Java => "java",
            FileType::Javascript => "javascript",
            FileType::Php => "php",
            FileType::Python => "python",
            FileType::Ruby => "ruby",
            FileType::Shell => "shell",
            FileType::Patch => "patch",
            FileType::Ini => "ini",
            FileType::Css => "css",
            FileType::Tpl => "tpl",
            FileType::Html => "html",
            FileType::Xml => "xml",
            FileType::Json => "json",
            FileType::Text => "text",
            FileType::Lua => "lua",
            FileType::Nsi => "nsi",
            FileType::Other => "other",
        }
    }

    /// Parse a configuration tag. `None` for tags outside the vocabulary;
    /// note that `other` parses but is rejected as a scan type by validation.
    pub fn from_tag(tag: &str) -> Option<FileType> {
        let ft = match tag {
            "c" => FileType::C,
            "perl" => FileType::Perl,
            "java" => FileType::Java,
            "javascript" => FileType::Javascript,
            "php" => FileType::Php,
            "python" => FileType::Python,
            "ruby" => FileType::Ruby,
            "shell" => FileType::Shell,
            "patch" => FileType::Patch,
            "ini" => FileType::Ini,
            "css" => FileType::Css,
            "tpl" => FileType::Tpl,
            "html" => FileType::Html,
            "xml" => FileType::Xml,
            "json" => FileType::Json,
            "text" => FileType::Text,
            "lua" => FileType::Lua,
            "nsi" => FileType::Nsi,
            "other" => FileType::Other,
            _ => return None,
        };
        Some(ft)
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Full classification of one file as reported by a
/// [`Classifier`](crate::classify::Classifier). `encoding` is present only
/// for text files.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Classification {
    pub file_type: FileType,
    pub is_text: bool,
    pub encoding: Option<String>,
}

/// Why a path landed in the excluded output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExcludeReason {
    /// Covered by a configured exclude path or exclude regex.
    ByRule,
    /// Rejected by the scan-type filter (including classification failures).
    ByTypeFilter,
}

impl ExcludeReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExcludeReason::ByRule => "excluded-by-rule",
            ExcludeReason::ByTypeFilter => "excluded-by-type-filter",
        }
    }
}

impl fmt::Display for ExcludeReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One visited directory and its immediate file names. Produced by the walk
/// thread, consumed exactly once by a single worker.
#[derive(Clone, Debug)]
pub struct WorkUnit {
    /// Absolute directory path.
    pub dir: PathBuf,
    /// Immediate file names, kept as `OsString` so non-UTF-8 names still get
    /// a record (subdirectories stay with the walk).
    pub files: Vec<OsString>,
}

/// Scan-type filter: the `all` wildcard accepts any text file; an explicit
/// tag set accepts only files classified as one of the tags.
#[derive(Clone, Debug)]
pub enum ScanTypes {
    All,
    Tags(HashSet<FileType>),
}

impl ScanTypes {
    pub fn is_all(&self) -> bool {
        matches!(self, ScanTypes::All)
    }
}

/// Immutable validated configuration. Built once by
/// [`load_config`](crate::utils::encdet_toml::load_config) before any worker
/// starts; components only ever read it.
#[derive(Clone, Debug)]
pub struct ScanConfig {
    /// Root directories to scan. Canonicalized and merged into a minimal
    /// non-overlapping set by the orchestrator.
    pub scan_paths: Vec<PathBuf>,
    pub scan_types: ScanTypes,
    /// Absolute path prefixes; a prefix excludes itself and everything under it.
    pub exclude_paths: Vec<PathBuf>,
    /// Compiled exclude patterns, matched against the path's string form.
    pub exclude_patterns: Vec<Regex>,
    /// Accepted-records destination.
    pub output_path: PathBuf,
    /// Excluded-records destination.
    pub exclude_file: PathBuf,
    /// Worker pool size.
    pub workers: usize,
}
