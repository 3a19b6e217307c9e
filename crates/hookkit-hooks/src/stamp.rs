// Rust guideline compliant 2026-10-16

//! Header stamping hook implementation.
//!
//! Ensures every staged source file starts with a comment naming its path
//! relative to the repository root.

use anyhow::Result;
use hookkit_core::{
    resolve_root, stamp_file, Config, ErrorPolicy, HeaderSpec, RepoMetadata, StampOutcome,
};
use std::path::{Path, PathBuf};

/// Per-file result of a stamping run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileResult {
    /// The file was processed.
    Stamped(StampOutcome),
    /// The file does not carry a configured suffix and was left alone.
    Ignored,
    /// The file failed and the run continued under [`ErrorPolicy::Skip`].
    Failed(String),
}

/// Summary of a stamping run, in argument order.
#[derive(Debug, Clone, Default)]
pub struct StampReport {
    /// Each argument with what happened to it.
    pub files: Vec<(PathBuf, FileResult)>,
}

impl StampReport {
    /// Number of files whose content changed.
    #[must_use]
    pub fn modified(&self) -> usize {
        self.files
            .iter()
            .filter(|(_, result)| matches!(result, FileResult::Stamped(outcome) if outcome.is_modified()))
            .count()
    }

    /// Number of files that failed.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.files
            .iter()
            .filter(|(_, result)| matches!(result, FileResult::Failed(_)))
            .count()
    }

    /// One-line human summary.
    #[must_use]
    pub fn summary(&self) -> String {
        let ignored = self
            .files
            .iter()
            .filter(|(_, result)| *result == FileResult::Ignored)
            .count();
        format!(
            "{} file(s) checked, {} updated, {} ignored, {} failed",
            self.files.len(),
            self.modified(),
            ignored,
            self.failed()
        )
    }
}

/// Runs the header stamping hook.
///
/// Resolves the repository root through `meta` (falling back to `cwd`),
/// loads configuration from that root, and stamps `files`.
///
/// # Arguments
///
/// * `meta` - Repository metadata provider
/// * `cwd` - Working directory used for relative paths and as fallback root
/// * `files` - File arguments as passed by the hook runner
///
/// # Errors
///
/// Returns an error if:
/// - The configuration is invalid
/// - A file fails and the error policy is [`ErrorPolicy::Abort`]
pub fn header_stamp_hook(
    meta: &dyn RepoMetadata,
    cwd: &Path,
    files: &[PathBuf],
) -> Result<StampReport> {
    let root = resolve_root(meta, cwd);
    let config = Config::load(&Config::dir_for(&root))?;
    let report = stamp_headers(&root, cwd, &config, files)?;
    tracing::info!("{}", report.summary());
    Ok(report)
}

/// Stamps headers into every file whose argument ends in a configured suffix.
///
/// # Arguments
///
/// * `root` - Canonical repository root
/// * `cwd` - Directory relative arguments are resolved against
/// * `config` - Suffixes, marker and error policy
/// * `files` - File arguments
///
/// # Errors
///
/// Returns the first per-file error when the policy is [`ErrorPolicy::Abort`].
pub fn stamp_headers(
    root: &Path,
    cwd: &Path,
    config: &Config,
    files: &[PathBuf],
) -> Result<StampReport> {
    let spec = HeaderSpec::from_config(config);
    let mut report = StampReport::default();

    for file in files {
        if !config.matches_suffix(&file.to_string_lossy()) {
            tracing::trace!(file = %file.display(), "ignoring file without configured suffix");
            report.files.push((file.clone(), FileResult::Ignored));
            continue;
        }

        match stamp_file(&cwd.join(file), root, &spec) {
            Ok(outcome) => report.files.push((file.clone(), FileResult::Stamped(outcome))),
            Err(err) => match config.on_error {
                ErrorPolicy::Abort => return Err(err.into()),
                ErrorPolicy::Skip => {
                    tracing::warn!(file = %file.display(), %err, "skipping file");
                    report
                        .files
                        .push((file.clone(), FileResult::Failed(err.to_string())));
                }
            },
        }
    }

    Ok(report)
}
