//! File-type and encoding classification.
//!
//! Type detection checks the extension table first, then the MIME prefix
//! table. MIME type and encoding come from `file(1)`, behind the
//! [`Classifier`] trait so the pipeline can be driven by a mock in tests.

use std::path::Path;
use std::process::Command;

use anyhow::{Context, Result, bail};

use crate::types::{Classification, FileType};

/// Extension table. First match wins; unknown extensions are `Other`.
pub fn detect_extension(path: &Path) -> FileType {
    let ext = match path.extension().and_then(|e| e.to_str()) {
        Some(e) => e.to_ascii_lowercase(),
        None => return FileType::Other,
    };
    match ext.as_str() {
        "c" | "cpp" | "h" | "hpp" | "cc" => FileType::C,
        "pl" | "pm" | "t" => FileType::Perl,
        "java" => FileType::Java,
        "js" => FileType::Javascript,
        "php" => FileType::Php,
        "py" => FileType::Python,
        "rb" => FileType::Ruby,
        "sh" => FileType::Shell,
        "patch" => FileType::Patch,
        "ini" | "conf" => FileType::Ini,
        "css" => FileType::Css,
        "tpl" => FileType::Tpl,
        "html" | "htm" => FileType::Html,
        "xml" => FileType::Xml,
        "json" => FileType::Json,
        "txt" => FileType::Text,
        "lua" => FileType::Lua,
        "nsi" | "nsh" => FileType::Nsi,
        _ => FileType::Other,
    }
}

/// MIME prefix table, consulted when the extension gives `Other`.
pub fn detect_mime(mime: &str) -> FileType {
    const MIME_PREFIXES: &[(&str, FileType)] = &[
        ("text/x-perl", FileType::Perl),
        ("text/x-php", FileType::Php),
        ("text/x-python", FileType::Python),
        ("text/x-ruby", FileType::Ruby),
        ("text/x-shellscript", FileType::Shell),
        ("text/x-lua", FileType::Lua),
        ("text/html", FileType::Html),
        ("text/plain", FileType::Text),
    ];
    for (prefix, file_type) in MIME_PREFIXES {
        if mime.starts_with(prefix) {
            return *file_type;
        }
    }
    FileType::Other
}

/// Final encoding label from `file -b --mime-encoding` output plus the plain
/// `file -b` description. UTF-8 is split into with/without BOM; everything
/// else is reported as-is.
pub fn encoding_label(mime_encoding: &str, description: &str) -> String {
    let enc = mime_encoding.trim();
    if enc.starts_with("utf-8") {
        if description.contains("with BOM") {
            "utf-8 with BOM".to_string()
        } else {
            "utf-8 no BOM".to_string()
        }
    } else {
        enc.to_string()
    }
}

/// Classification boundary. Implementations hold no shared mutable state and
/// may block on external I/O; workers call them fully in parallel.
pub trait Classifier: Send + Sync {
    /// MIME type string for `path` (e.g. `text/x-python`).
    fn mime_type(&self, path: &Path) -> Result<String>;

    /// Resolved encoding label for `path` (text files only make sense here).
    fn encoding(&self, path: &Path) -> Result<String>;

    /// File type: extension table first, MIME table as fallback.
    fn file_type(&self, path: &Path) -> Result<FileType> {
        let by_ext = detect_extension(path);
        if by_ext != FileType::Other {
            return Ok(by_ext);
        }
        Ok(detect_mime(&self.mime_type(path)?))
    }

    /// Text check used by the `all` scan type: a known extension counts as
    /// text, otherwise the MIME type must start with `text`.
    fn is_text(&self, path: &Path) -> Result<bool> {
        if detect_extension(path) != FileType::Other {
            return Ok(true);
        }
        Ok(self.mime_type(path)?.starts_with("text"))
    }

    /// Full classification: type, text-ness, and encoding for text files.
    fn classify(&self, path: &Path) -> Result<Classification> {
        let file_type = self.file_type(path)?;
        let is_text = self.is_text(path)?;
        let encoding = if is_text {
            Some(self.encoding(path)?)
        } else {
            None
        };
        Ok(Classification {
            file_type,
            is_text,
            encoding,
        })
    }
}

/// Production classifier: shells out to `file(1)` per path.
#[derive(Clone, Copy, Debug, Default)]
pub struct FileToolClassifier;

impl FileToolClassifier {
    fn file_output(&self, path: &Path, extra: &[&str]) -> Result<String> {
        let output = Command::new("file")
            .arg("-b")
            .args(extra)
            .arg(path)
            .output()
            .with_context(|| format!("run file(1) on {}", path.display()))?;
        if !output.status.success() {
            bail!(
                "file(1) failed on {}: {}",
                path.display(),
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl Classifier for FileToolClassifier {
    fn mime_type(&self, path: &Path) -> Result<String> {
        self.file_output(path, &["--mime-type"])
    }

    fn encoding(&self, path: &Path) -> Result<String> {
        let enc = self.file_output(path, &["--mime-encoding"])?;
        if enc.starts_with("utf-8") {
            // Only the plain description says whether a BOM is present.
            let description = self.file_output(path, &[])?;
            return Ok(encoding_label(&enc, &description));
        }
        Ok(enc)
    }
}
