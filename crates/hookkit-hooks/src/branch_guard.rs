// Rust guideline compliant 2026-10-16

//! Branch guard hook implementation.
//!
//! Refuses commits made directly on protected branches.

use anyhow::{Context, Result};
use hookkit_core::{check_branch, resolve_root, Config, GuardVerdict, RepoMetadata};
use std::path::Path;

/// Runs the branch guard hook.
///
/// # Arguments
///
/// * `meta` - Repository metadata provider
/// * `cwd` - Working directory, used to locate configuration when the
///   repository root cannot be resolved
///
/// # Returns
///
/// The verdict for the current branch. A rejection is not an error; the
/// caller reports it and exits non-zero.
///
/// # Errors
///
/// Returns an error if:
/// - The configuration is invalid
/// - The current branch cannot be determined
pub fn branch_guard_hook(meta: &dyn RepoMetadata, cwd: &Path) -> Result<GuardVerdict> {
    let root = resolve_root(meta, cwd);
    let config = Config::load(&Config::dir_for(&root))?;

    let branch = meta
        .current_branch()
        .context("Cannot determine the current branch")?;
    let verdict = check_branch(&branch, &config.protected_branches);

    tracing::debug!(%branch, rejected = verdict.is_rejected(), "checked branch");
    Ok(verdict)
}
