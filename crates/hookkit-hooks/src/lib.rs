// Rust guideline compliant 2026-10-16

//! Hookkit Git Hooks
//!
//! This crate provides the hook implementations and their entry points:
//! - Path header stamping for staged source files
//! - Protected branch guarding
//! - Logging setup shared by every hook binary

pub mod branch_guard;
pub mod logging;
pub mod stamp;

pub use branch_guard::branch_guard_hook;
pub use stamp::{header_stamp_hook, stamp_headers, FileResult, StampReport};
