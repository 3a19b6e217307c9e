// Rust guideline compliant 2026-10-16

//! Hookkit CLI Application
//!
//! Command-line interface bundling the hookkit Git hooks.

use clap::Parser;
use hookkit_cli::{commands, should_use_color, Printer};
use hookkit_core::Backend;
use hookkit_hooks::logging::{init_tracing, LogOptions};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "hookkit",
    version,
    about = "Hookkit: small Git hooks for path headers and protected branches",
    after_help = "Examples:\n  hookkit init\n  hookkit stamp scripts/add_repo_path_header.py\n  hookkit guard\n"
)]
struct Cli {
    /// Repository metadata backend (defaults to HOOKKIT_BACKEND, then cli)
    #[arg(long, value_enum, global = true)]
    backend: Option<BackendArg>,

    /// Logging level
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Write logs as JSON to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum BackendArg {
    Cli,
    Libgit2,
}

impl From<BackendArg> for Backend {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::Cli => Backend::Cli,
            BackendArg::Libgit2 => Backend::Libgit2,
        }
    }
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Ensure each source file starts with its repository-relative path
    Stamp {
        /// Files to stamp; other suffixes are ignored
        files: Vec<PathBuf>,

        /// Exit non-zero when any header was added or updated
        #[arg(long)]
        check: bool,
    },

    /// Fail when the current branch is protected
    Guard,

    /// Write default config and install the pre-commit hook
    Init {
        /// Replace an existing pre-commit hook
        #[arg(long)]
        force: bool,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let _guard = init_tracing(&LogOptions {
        level: cli.log_level.clone(),
        file: cli.log_file.clone(),
    })?;

    let printer = Printer::new(!cli.no_color && should_use_color());
    let backend = match cli.backend {
        Some(arg) => Backend::from(arg),
        None => Backend::from_env()?,
    };
    let cwd = std::env::current_dir()?;

    match cli.command {
        Some(Commands::Stamp { files, check }) => {
            return commands::stamp::execute(&cwd, backend, &files, check, printer);
        }
        Some(Commands::Guard) => {
            return commands::guard::execute(&cwd, backend, printer);
        }
        Some(Commands::Init { force }) => {
            commands::init::execute(&cwd, force, printer)?;
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(ExitCode::SUCCESS)
}
