//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};

use crate::freeze::DEFAULT_SYNC_TOLERANCE;
use crate::runner::DEFAULT_NOISE;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub analyzer: AnalyzerConfig,
    #[serde(default)]
    pub sync: SyncConfig,
    #[serde(default)]
    pub workers: WorkersConfig,
}

/// How the external analyzer is invoked
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// ffmpeg binary, looked up in PATH unless it contains a separator
    #[serde(default = "default_ffmpeg")]
    pub ffmpeg: String,
    /// Noise tolerance passed to `freezedetect`
    #[serde(default = "default_noise")]
    pub noise: f64,
    /// Kill an analyzer run after this many seconds (None = wait forever)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

pub fn default_ffmpeg() -> String {
    "ffmpeg".to_string()
}

pub fn default_noise() -> f64 {
    DEFAULT_NOISE
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            ffmpeg: default_ffmpeg(),
            noise: default_noise(),
            timeout_secs: None,
        }
    }
}

/// Synchronization check settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Maximum spread between corresponding boundaries, in seconds
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
}

pub fn default_tolerance() -> f64 {
    DEFAULT_SYNC_TOLERANCE
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            tolerance: default_tolerance(),
        }
    }
}

/// Worker pool settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkersConfig {
    /// Number of parallel analyzer runs (None = available cores - 1)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns `Ok(())` if all values are within acceptable bounds,
    /// or an error describing the first invalid value found.
    pub fn validate(&self) -> Result<(), String> {
        if self.analyzer.ffmpeg.trim().is_empty() {
            return Err("analyzer.ffmpeg must not be empty".to_string());
        }
        let noise = self.analyzer.noise;
        if !(noise > 0.0 && noise <= 1.0) {
            return Err(format!("analyzer.noise {} must be in (0, 1]", noise));
        }
        if let Some(0) = self.analyzer.timeout_secs {
            return Err("analyzer.timeout_secs must be > 0".to_string());
        }
        let tolerance = self.sync.tolerance;
        if !(tolerance >= 0.0 && tolerance.is_finite()) {
            return Err(format!(
                "sync.tolerance {} must be a non-negative number",
                tolerance
            ));
        }
        if let Some(0) = self.workers.count {
            return Err("workers.count must be > 0".to_string());
        }
        Ok(())
    }
}
