// Rust guideline compliant 2026-10-16

//! CLI entry point for the branch guard hook.

use hookkit_core::Backend;
use hookkit_hooks::logging::{init_tracing, LogOptions};
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    let _guard = init_tracing(&LogOptions::from_env())?;
    let cwd = std::env::current_dir()?;

    let meta = Backend::from_env()?.provider(&cwd);
    let verdict = hookkit_hooks::branch_guard_hook(&*meta, &cwd)?;
    if let Some(message) = verdict.message() {
        println!("{}", message);
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
