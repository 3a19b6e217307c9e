// Rust guideline compliant 2026-10-16

//! Implementation of the `hookkit stamp` command.

use crate::terminal::Printer;
use anyhow::Result;
use hookkit_core::{Backend, StampOutcome};
use hookkit_hooks::FileResult;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Stamps path headers into `files`.
///
/// # Arguments
///
/// * `cwd` - Working directory
/// * `backend` - Repository metadata backend
/// * `files` - File arguments
/// * `check` - Fail when any file was modified
/// * `printer` - Status output
///
/// # Returns
///
/// `ExitCode::FAILURE` when `check` is set and a header was added or
/// updated, so a pre-commit hook stops the commit until the rewritten files
/// are staged. `ExitCode::SUCCESS` otherwise.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or a file fails under
/// the abort policy.
pub fn execute(
    cwd: &Path,
    backend: Backend,
    files: &[PathBuf],
    check: bool,
    printer: Printer,
) -> Result<ExitCode> {
    let meta = backend.provider(cwd);
    let report = hookkit_hooks::header_stamp_hook(&*meta, cwd, files)?;

    for (file, result) in &report.files {
        match result {
            FileResult::Stamped(StampOutcome::Inserted) => {
                printer.success(&format!("Added header to {}", file.display()));
            }
            FileResult::Stamped(StampOutcome::Replaced) => {
                printer.success(&format!("Updated header in {}", file.display()));
            }
            FileResult::Failed(reason) => {
                printer.warning(&format!("Skipped {}: {}", file.display(), reason));
            }
            FileResult::Stamped(StampOutcome::Unchanged) | FileResult::Ignored => {}
        }
    }

    let modified = report.modified();
    if check && modified > 0 {
        printer.warning(&format!(
            "{} file(s) updated; stage them and commit again",
            modified
        ));
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}
