//! freezesync library
//!
//! Detects frozen-frame intervals in videos by running ffmpeg's
//! `freezedetect` filter, and checks whether several copies of a video freeze
//! at the same moments.

pub mod aggregate;
pub mod cli;
pub mod config;
pub mod error;
pub mod freeze;
pub mod logging;
pub mod report;
pub mod runner;

pub use aggregate::{Aggregated, Aggregator, VideoRecord};
pub use config::Config;
pub use error::RunError;
pub use freeze::{Interval, SyncChecker};
pub use report::Report;
pub use runner::{FfmpegAnalyzer, FrameAnalyzer};

/// Version string shown by `--version`.
#[cfg(not(feature = "release"))]
pub const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("VERGEN_GIT_SHA"), ")");

/// Version string shown by `--version`.
#[cfg(feature = "release")]
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
