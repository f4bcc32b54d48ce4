//! Configuration management for freezesync
//!
//! Settings come from `~/.config/freezesync/config.toml` (or an explicit
//! file). CLI flags take priority over config, which overrides defaults.

mod io;
mod types;

pub use types::*;

use anyhow::Result;
use std::path::{Path, PathBuf};

impl Config {
    /// Get the config file path (~/.config/freezesync/config.toml)
    pub fn config_path() -> Result<PathBuf> {
        io::config_path()
    }

    /// Get the config directory path (~/.config/freezesync)
    pub fn config_dir() -> Result<PathBuf> {
        io::config_dir()
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Result<Self> {
        io::load()
    }

    /// Load configuration from an explicit file, which must exist
    pub fn load_from(path: &Path) -> Result<Self> {
        io::load_from(path)
    }

    /// Save configuration to an explicit file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        io::save_to(self, path)
    }

    /// Per-run analyzer timeout, if one is configured
    pub fn analyzer_timeout(&self) -> Option<std::time::Duration> {
        self.analyzer
            .timeout_secs
            .map(std::time::Duration::from_secs)
    }
}
