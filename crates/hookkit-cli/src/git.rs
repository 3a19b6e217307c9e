// Rust guideline compliant 2026-10-16

//! Shared Git helpers for CLI commands.

use anyhow::Result;
use git2::Repository;
use std::path::{Path, PathBuf};

/// Opens the repository containing `cwd`.
///
/// # Errors
///
/// Returns an error when `cwd` is not inside a Git repository.
pub(crate) fn discover(cwd: &Path) -> Result<Repository> {
    Repository::discover(cwd)
        .map_err(|_| anyhow::anyhow!("Not a git repository. Run 'git init' first."))
}

/// Returns the directory Git runs hooks from.
///
/// Honors `core.hooksPath`, which is relative to the working tree when not
/// absolute; defaults to `<git-dir>/hooks`.
///
/// # Errors
///
/// Returns an error if the repository configuration cannot be read.
pub(crate) fn hooks_dir(repo: &Repository) -> Result<PathBuf> {
    let config = repo.config()?;
    let dir = match config.get_path("core.hooksPath") {
        Ok(path) if path.is_absolute() => path,
        Ok(path) => repo.workdir().unwrap_or_else(|| repo.path()).join(path),
        Err(_) => repo.path().join("hooks"),
    };
    Ok(dir)
}
