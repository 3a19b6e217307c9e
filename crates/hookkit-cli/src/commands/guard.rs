// Rust guideline compliant 2026-10-16

//! Implementation of the `hookkit guard` command.

use crate::terminal::Printer;
use anyhow::Result;
use hookkit_core::Backend;
use std::path::Path;
use std::process::ExitCode;

/// Refuses to continue on a protected branch.
///
/// # Returns
///
/// `ExitCode::FAILURE` after printing the refusal when the current branch is
/// protected, `ExitCode::SUCCESS` otherwise.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the current branch
/// cannot be determined.
pub fn execute(cwd: &Path, backend: Backend, printer: Printer) -> Result<ExitCode> {
    let meta = backend.provider(cwd);
    let verdict = hookkit_hooks::branch_guard_hook(&*meta, cwd)?;

    match verdict.message() {
        Some(message) => {
            printer.refusal(&message);
            Ok(ExitCode::FAILURE)
        }
        None => Ok(ExitCode::SUCCESS),
    }
}
