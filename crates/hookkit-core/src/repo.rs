// Rust guideline compliant 2026-10-16

//! Repository metadata providers.
//!
//! The hooks only need two facts about the repository: its root directory
//! and the checked-out branch. [`RepoMetadata`] abstracts where those come
//! from so the hook logic can run against a fixed answer in tests.

use crate::{Error, Result};
use git2::Repository;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::str::FromStr;

/// Source of repository facts for a single hook run.
pub trait RepoMetadata {
    /// Returns the repository's top-level working directory.
    ///
    /// # Errors
    ///
    /// Returns an error when not inside a repository or the query fails.
    fn toplevel(&self) -> Result<PathBuf>;

    /// Returns the short name of the checked-out branch, or `HEAD` when
    /// detached.
    ///
    /// # Errors
    ///
    /// Returns an error when the branch cannot be determined.
    fn current_branch(&self) -> Result<String>;
}

/// Queries the `git` executable as a subprocess.
#[derive(Debug, Clone)]
pub struct GitCli {
    workdir: PathBuf,
}

impl GitCli {
    /// Creates a provider that runs `git` inside `workdir`.
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }

    fn run(&self, args: &[&str]) -> Result<String> {
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.workdir)
            .output()
            .map_err(|e| Error::Git(format!("failed to run git: {}", e)))?;

        if !output.status.success() {
            return Err(Error::Git(format!(
                "git {} failed: {}",
                args.join(" "),
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        let stdout = String::from_utf8(output.stdout)
            .map_err(|_| Error::Git(format!("git {} returned non-UTF-8 output", args.join(" "))))?;
        Ok(stdout.trim().to_string())
    }
}

impl RepoMetadata for GitCli {
    fn toplevel(&self) -> Result<PathBuf> {
        self.run(&["rev-parse", "--show-toplevel"]).map(PathBuf::from)
    }

    fn current_branch(&self) -> Result<String> {
        self.run(&["rev-parse", "--abbrev-ref", "HEAD"])
    }
}

/// Reads repository facts through libgit2.
#[derive(Debug, Clone)]
pub struct LibGit2 {
    workdir: PathBuf,
}

impl LibGit2 {
    /// Creates a provider that discovers the repository from `workdir`.
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }

    fn open(&self) -> Result<Repository> {
        Ok(Repository::discover(&self.workdir)?)
    }
}

impl RepoMetadata for LibGit2 {
    fn toplevel(&self) -> Result<PathBuf> {
        let repo = self.open()?;
        let workdir = repo
            .workdir()
            .ok_or_else(|| Error::Git("bare repository has no working tree".to_string()))?;
        Ok(workdir.to_path_buf())
    }

    fn current_branch(&self) -> Result<String> {
        let repo = self.open()?;
        let head = repo.head()?;
        if !head.is_branch() {
            return Ok("HEAD".to_string());
        }
        let name = head
            .shorthand()
            .ok_or_else(|| Error::Git("branch name is not valid UTF-8".to_string()))?;
        Ok(name.to_string())
    }
}

/// Fixed answers, for tests and callers that already know the facts.
#[derive(Debug, Clone, Default)]
pub struct StaticMetadata {
    root: Option<PathBuf>,
    branch: Option<String>,
}

impl StaticMetadata {
    /// Creates a provider where every query fails.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the repository root to report.
    #[must_use]
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    /// Sets the branch name to report.
    #[must_use]
    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = Some(branch.into());
        self
    }
}

impl RepoMetadata for StaticMetadata {
    fn toplevel(&self) -> Result<PathBuf> {
        self.root
            .clone()
            .ok_or_else(|| Error::Git("not a git repository".to_string()))
    }

    fn current_branch(&self) -> Result<String> {
        self.branch
            .clone()
            .ok_or_else(|| Error::Git("unable to determine current branch".to_string()))
    }
}

/// Resolves the repository root, falling back to `cwd` when the lookup fails.
///
/// The result is canonicalized when possible so it can be compared against
/// canonical file paths.
#[must_use]
pub fn resolve_root(meta: &dyn RepoMetadata, cwd: &Path) -> PathBuf {
    let root = match meta.toplevel() {
        Ok(root) => root,
        Err(err) => {
            tracing::debug!(%err, cwd = %cwd.display(), "repository root lookup failed, using working directory");
            cwd.to_path_buf()
        }
    };
    std::fs::canonicalize(&root).unwrap_or(root)
}

/// Which metadata provider to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backend {
    /// The `git` executable.
    #[default]
    Cli,
    /// Built-in libgit2.
    Libgit2,
}

impl Backend {
    /// Environment variable selecting the backend.
    pub const ENV_VAR: &'static str = "HOOKKIT_BACKEND";

    /// Reads the backend from `HOOKKIT_BACKEND`, defaulting to [`Backend::Cli`].
    ///
    /// # Errors
    ///
    /// Returns an error if the variable holds an unknown backend name.
    pub fn from_env() -> Result<Self> {
        match std::env::var(Self::ENV_VAR) {
            Ok(value) => value.parse(),
            Err(_) => Ok(Self::default()),
        }
    }

    /// Builds the provider rooted at `workdir`.
    #[must_use]
    pub fn provider(self, workdir: &Path) -> Box<dyn RepoMetadata> {
        match self {
            Backend::Cli => Box::new(GitCli::new(workdir)),
            Backend::Libgit2 => Box::new(LibGit2::new(workdir)),
        }
    }
}

impl FromStr for Backend {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "cli" | "git" => Ok(Backend::Cli),
            "libgit2" => Ok(Backend::Libgit2),
            other => Err(Error::Config(format!(
                "unknown backend '{}', expected cli or libgit2",
                other
            ))),
        }
    }
}
