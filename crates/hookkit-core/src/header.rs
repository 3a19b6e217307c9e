// Rust guideline compliant 2026-10-16

//! Path header rendering and first-line rewriting.
//!
//! A header is a single comment line naming the file's path relative to the
//! repository root, e.g. `# scripts/block_branch.py`.

use crate::{Config, Error, Result};
use std::borrow::Cow;
use std::path::{Component, Path};

/// What stamping did to a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StampOutcome {
    /// The first line already was the expected header.
    Unchanged,
    /// A different comment line was overwritten.
    Replaced,
    /// The header was inserted above the existing content.
    Inserted,
}

impl StampOutcome {
    /// Returns whether the file content changed.
    #[must_use]
    pub fn is_modified(self) -> bool {
        self != StampOutcome::Unchanged
    }
}

/// Header format: a comment marker, one space, the path, a newline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderSpec {
    marker: String,
}

impl HeaderSpec {
    /// Creates a header spec for the given comment marker.
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
        }
    }

    /// Creates a header spec from the configured comment marker.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.comment_marker.clone())
    }

    /// Prefix that identifies an existing comment header line.
    #[must_use]
    pub fn prefix(&self) -> String {
        format!("{} ", self.marker)
    }

    /// Renders the full header line, terminator included.
    #[must_use]
    pub fn render(&self, relative: &str) -> String {
        format!("{} {}\n", self.marker, relative)
    }
}

impl Default for HeaderSpec {
    fn default() -> Self {
        Self::new("#")
    }
}

/// Returns the header path for `file`: relative to `root` with `/`
/// separators, or the bare file name when `file` is outside `root`.
///
/// Both paths are expected to be absolute and canonical.
#[must_use]
pub fn relative_header_path(file: &Path, root: &Path) -> String {
    match file.strip_prefix(root) {
        Ok(relative) => relative
            .components()
            .filter_map(|component| match component {
                Component::Normal(part) => Some(part.to_string_lossy()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("/"),
        Err(_) => file
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default(),
    }
}

/// Ensures `content` starts with `header`.
///
/// If the first line starts with `prefix` it is treated as an existing header
/// and replaced when it differs from `header`. Otherwise `header` is inserted
/// as a new first line. Every line after the first is kept byte for byte.
///
/// `header` ends in `\n`; when the first line ends in `\r\n` the header takes
/// that terminator instead so the file keeps a single line ending style.
#[must_use]
pub fn apply_header<'a>(
    content: &'a str,
    header: &str,
    prefix: &str,
) -> (Cow<'a, str>, StampOutcome) {
    let first_end = content.find('\n').map_or(content.len(), |idx| idx + 1);
    let (first, rest) = content.split_at(first_end);

    let header: Cow<'_, str> = if first.ends_with("\r\n") {
        Cow::Owned(format!("{}\r\n", header.trim_end_matches('\n')))
    } else {
        Cow::Borrowed(header)
    };

    if !first.is_empty() && first.starts_with(prefix) {
        if first == &*header {
            return (Cow::Borrowed(content), StampOutcome::Unchanged);
        }
        return (
            Cow::Owned(format!("{}{}", header, rest)),
            StampOutcome::Replaced,
        );
    }

    (
        Cow::Owned(format!("{}{}", header, content)),
        StampOutcome::Inserted,
    )
}

/// Stamps the header into a single file.
///
/// The file is rewritten in place only when its content changes. No backup
/// is taken and the write is not atomic.
///
/// # Arguments
///
/// * `path` - File to stamp (absolute, or relative to the process directory)
/// * `root` - Canonical repository root
/// * `spec` - Header format
///
/// # Errors
///
/// Returns an error if the file cannot be resolved, read or written, if it
/// is not valid UTF-8, or if its header path contains a line break.
pub fn stamp_file(path: &Path, root: &Path, spec: &HeaderSpec) -> Result<StampOutcome> {
    let file_err = |source: std::io::Error| Error::File {
        path: path.to_path_buf(),
        source,
    };
    let resolved = std::fs::canonicalize(path).map_err(file_err)?;
    let relative = relative_header_path(&resolved, root);
    if relative.contains(['\n', '\r']) {
        return Err(Error::UnsafeName(resolved));
    }
    let header = spec.render(&relative);

    let bytes = std::fs::read(&resolved).map_err(file_err)?;
    let content = String::from_utf8(bytes).map_err(|_| Error::Encoding(resolved.clone()))?;

    let (stamped, outcome) = apply_header(&content, &header, &spec.prefix());
    if outcome.is_modified() {
        std::fs::write(&resolved, stamped.as_bytes()).map_err(file_err)?;
    }

    tracing::debug!(file = %resolved.display(), ?outcome, "stamped header");
    Ok(outcome)
}
