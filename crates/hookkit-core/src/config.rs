// Rust guideline compliant 2026-10-16

//! Configuration management for hookkit.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Directory, relative to the repository root, holding `config.toml`.
pub const CONFIG_DIR: &str = ".hookkit";

/// What the header stamper does when a single file fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ErrorPolicy {
    /// Stop at the first failing file and report the error.
    #[default]
    Abort,
    /// Log the failure and continue with the remaining files.
    Skip,
}

/// Configuration for hookkit behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// File suffixes the header stamper acts on.
    #[serde(default = "default_suffixes")]
    pub suffixes: Vec<String>,

    /// Line comment marker placed before the path in the header.
    #[serde(default = "default_comment_marker")]
    pub comment_marker: String,

    /// Branches the guard refuses direct commits to.
    #[serde(default = "default_protected_branches")]
    pub protected_branches: Vec<String>,

    /// Per-file failure handling for the header stamper.
    #[serde(default)]
    pub on_error: ErrorPolicy,
}

fn default_suffixes() -> Vec<String> {
    vec![".py".to_string()]
}

fn default_comment_marker() -> String {
    "#".to_string()
}

fn default_protected_branches() -> Vec<String> {
    vec!["main".to_string(), "master".to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            suffixes: default_suffixes(),
            comment_marker: default_comment_marker(),
            protected_branches: default_protected_branches(),
            on_error: ErrorPolicy::default(),
        }
    }
}

impl Config {
    /// Returns the configuration directory for a repository root.
    #[must_use]
    pub fn dir_for(root: &Path) -> PathBuf {
        root.join(CONFIG_DIR)
    }

    /// Loads configuration from file and the process environment.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `<config_dir>/config.toml`
    /// 3. Environment variables with `HOOKKIT_` prefix
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(config_dir: &Path) -> Result<Self> {
        Self::load_with_env(config_dir, |key| std::env::var(key).ok())
    }

    /// Loads configuration using `env` to look up overrides.
    ///
    /// # Errors
    ///
    /// Same as [`Config::load`].
    pub fn load_with_env<F>(config_dir: &Path, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        let config_path = config_dir.join("config.toml");
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            config = toml::from_str(&content)
                .map_err(|e| Error::Config(format!("Invalid config file: {}", e)))?;
        }

        config.apply_env_overrides(env)?;
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `HOOKKIT_SUFFIXES` - Comma separated suffix list
    /// - `HOOKKIT_COMMENT_MARKER` - Comment marker
    /// - `HOOKKIT_PROTECTED_BRANCHES` - Comma separated branch list
    /// - `HOOKKIT_ON_ERROR` - `abort` or `skip`
    fn apply_env_overrides<F>(&mut self, env: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = env("HOOKKIT_SUFFIXES") {
            self.suffixes = split_list(&val);
        }

        if let Some(val) = env("HOOKKIT_COMMENT_MARKER") {
            self.comment_marker = val;
        }

        if let Some(val) = env("HOOKKIT_PROTECTED_BRANCHES") {
            self.protected_branches = split_list(&val);
        }

        if let Some(val) = env("HOOKKIT_ON_ERROR") {
            self.on_error = match val.as_str() {
                "abort" => ErrorPolicy::Abort,
                "skip" => ErrorPolicy::Skip,
                _ => {
                    return Err(Error::Config(
                        "HOOKKIT_ON_ERROR must be abort or skip".to_string(),
                    ))
                }
            };
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - no suffix is configured, or one is empty
    /// - the comment marker is empty or contains whitespace
    /// - a protected branch name is empty
    fn validate(&self) -> Result<()> {
        if self.suffixes.is_empty() {
            return Err(Error::Config(
                "suffixes must contain at least one entry".to_string(),
            ));
        }
        if self.suffixes.iter().any(String::is_empty) {
            return Err(Error::Config("suffixes must not be empty".to_string()));
        }

        if self.comment_marker.is_empty()
            || self.comment_marker.chars().any(char::is_whitespace)
        {
            return Err(Error::Config(format!(
                "comment_marker must be non-empty without whitespace, got {:?}",
                self.comment_marker
            )));
        }

        if self.protected_branches.iter().any(String::is_empty) {
            return Err(Error::Config(
                "protected_branches must not contain empty names".to_string(),
            ));
        }

        Ok(())
    }

    /// Returns whether the stamper should act on `path`.
    ///
    /// The suffix is matched against the argument text as given.
    #[must_use]
    pub fn matches_suffix(&self, path: &str) -> bool {
        self.suffixes.iter().any(|suffix| path.ends_with(suffix.as_str()))
    }

    /// Saves the configuration to a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be created or written
    /// - Serialization fails
    pub fn save(&self, config_dir: &Path) -> Result<()> {
        let config_path = config_dir.join("config.toml");
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
