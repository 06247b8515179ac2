//! TOML configuration loading.
//!
//! A project file in the working directory wins over the per-user file.
//! Command-line flags are applied on top by the CLI, so everything here is
//! only a default.

mod structs;

pub use structs::{ConvertConfig, GitConfig, InitConfig, LogConfig};

use crate::log::{AlarmLevel, Options};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Project-level config file name, looked up in the working directory.
pub const PROJECT_CONFIG: &str = ".gitdoc-cli.toml";

/// An empty file is a valid config; every field has a default.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub log: LogConfig,
    pub convert: ConvertConfig,
    pub git: GitConfig,
    pub init: InitConfig,
}

impl Config {
    /// Loads the first config found: `explicit`, then [`PROJECT_CONFIG`] in
    /// the working directory, then the per-user file. Missing files give
    /// the defaults. A file that fails to load is reported and ignored.
    #[must_use]
    pub fn load(explicit: Option<&Path>) -> Self {
        let Some(path) = Self::locate(explicit) else {
            crate::trace!("no config file found, using defaults");
            return Self::default();
        };

        match Self::load_from(&path) {
            Ok(config) => {
                crate::info!(
                    "loaded config {}; command-line flags take precedence over it",
                    path.display()
                );
                config
            }
            Err(e) => {
                crate::warn!(
                    "reading config {} failed: {e}; ignoring it for this run",
                    path.display()
                );
                Self::default()
            }
        }
    }

    /// Reads and parses one file.
    ///
    /// # Errors
    /// Fails if the file cannot be read or is not valid TOML.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// The file [`Config::load`] would read, if any.
    #[must_use]
    pub fn locate(explicit: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(expand_path(&path.to_string_lossy()));
        }

        let project = PathBuf::from(PROJECT_CONFIG);
        if project.is_file() {
            return Some(project);
        }

        Self::global_path().ok().filter(|p| p.is_file())
    }

    /// `<config dir>/gitdoc-cli/config.toml`.
    ///
    /// # Errors
    /// Fails when the platform has no notion of a config directory.
    pub fn global_path() -> Result<PathBuf, crate::Error> {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("gitdoc-cli").join("config.toml"))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    /// Printer options described by the `[log]` section.
    #[must_use]
    pub fn printer_options(&self) -> Options {
        let platform = Options::platform_default();
        Options {
            disable_color: platform.disable_color || !self.log.color,
            enable_trace: self.log.trace,
            prefix: self.log.prefix.clone(),
            enable_inline: false,
        }
    }
}

impl ConvertConfig {
    #[must_use]
    pub fn root_path(&self) -> PathBuf {
        expand_path(&self.root)
    }

    #[must_use]
    pub fn extract_media_path(&self) -> PathBuf {
        expand_path(&self.extract_media)
    }

    #[must_use]
    pub fn failure_level(&self) -> AlarmLevel {
        AlarmLevel::from_name(&self.on_failure)
    }
}

/// Expands a leading `~` to the home directory.
#[must_use]
pub fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).as_ref())
}
