// Rust guideline compliant 2026-10-16

//! CLI entry point for the header stamping hook.

use hookkit_core::Backend;
use hookkit_hooks::logging::{init_tracing, LogOptions};
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    let _guard = init_tracing(&LogOptions::from_env())?;
    let cwd = std::env::current_dir()?;
    let files: Vec<PathBuf> = std::env::args_os().skip(1).map(PathBuf::from).collect();

    let meta = Backend::from_env()?.provider(&cwd);
    hookkit_hooks::header_stamp_hook(&*meta, &cwd, &files)?;
    Ok(())
}
