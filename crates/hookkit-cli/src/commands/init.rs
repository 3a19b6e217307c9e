// Rust guideline compliant 2026-10-16

//! Implementation of the `hookkit init` command.
//!
//! Writes the default configuration and installs the pre-commit hook.

use crate::git;
use crate::terminal::Printer;
use anyhow::Result;
use hookkit_core::Config;
use std::fs;
use std::path::Path;

/// Pre-commit script: guard the branch, then stamp the staged files.
///
/// `stamp --check` fails when it rewrote a file, since the commit would
/// otherwise record the staged content without the header.
pub const PRE_COMMIT_SCRIPT: &str = "#!/bin/sh
# Installed by hookkit init.
hookkit guard || exit 1
git diff --cached --name-only --diff-filter=ACMR -z | xargs -0 hookkit stamp --check
";

/// Initializes hookkit in the repository containing `cwd`.
///
/// Creates `.hookkit/config.toml` with defaults when missing and installs the
/// pre-commit hook. An existing hook is kept unless `force` is set.
///
/// # Errors
///
/// Returns an error if:
/// - `cwd` is not inside a Git repository with a working tree
/// - The configuration or hook cannot be written
pub fn execute(cwd: &Path, force: bool, printer: Printer) -> Result<()> {
    let repo = git::discover(cwd)?;
    let root = repo
        .workdir()
        .ok_or_else(|| anyhow::anyhow!("Cannot initialize a bare repository."))?;

    let config_dir = Config::dir_for(root);
    fs::create_dir_all(&config_dir)?;
    if config_dir.join("config.toml").exists() {
        tracing::debug!(dir = %config_dir.display(), "config already present");
    } else {
        Config::default().save(&config_dir)?;
        printer.success("Created .hookkit/config.toml");
    }

    let hooks_dir = git::hooks_dir(&repo)?;
    fs::create_dir_all(&hooks_dir)?;
    let hook_path = hooks_dir.join("pre-commit");
    if install_hook(&hook_path, PRE_COMMIT_SCRIPT, force)? {
        printer.success(&format!("Installed {}", hook_path.display()));
    } else {
        printer.warning(&format!(
            "{} already exists, left unchanged (use --force to replace)",
            hook_path.display()
        ));
    }

    Ok(())
}

/// Writes an executable hook script.
///
/// # Returns
///
/// `true` if the script was written, `false` if an existing file was kept.
fn install_hook(path: &Path, content: &str, force: bool) -> Result<bool> {
    if path.exists() && !force {
        return Ok(false);
    }

    fs::write(path, content)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = fs::metadata(path)?.permissions();
        perms.set_mode(0o755);
        fs::set_permissions(path, perms)?;
    }

    Ok(true)
}
