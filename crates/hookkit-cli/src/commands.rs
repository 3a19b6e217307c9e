// Rust guideline compliant 2026-10-16

//! Command implementations for the hookkit CLI.

pub mod guard;
pub mod init;
pub mod stamp;
