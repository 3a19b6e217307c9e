// Rust guideline compliant 2026-10-16

//! Hookkit Core Library
//!
//! This crate provides the building blocks shared by the hookkit Git hooks:
//! - Path header rendering and first-line rewriting
//! - Protected branch checks
//! - Repository metadata providers (git CLI, libgit2, static test double)
//! - Configuration loading and validation
//! - Error types and result handling

pub mod config;
pub mod error;
pub mod guard;
pub mod header;
pub mod repo;

pub use config::{Config, ErrorPolicy};
pub use error::{Error, Result};
pub use guard::{check_branch, GuardVerdict};
pub use header::{apply_header, relative_header_path, stamp_file, HeaderSpec, StampOutcome};
pub use repo::{resolve_root, Backend, GitCli, LibGit2, RepoMetadata, StaticMetadata};
