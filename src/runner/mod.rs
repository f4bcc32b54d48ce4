//! Running the external frame analyzer.
//!
//! - [`FrameAnalyzer`] is the backend seam, [`FfmpegAnalyzer`] the real one
//! - [`ParallelExecutor`] fans the sources out over a bounded worker pool

mod backend;
mod ffmpeg;
mod worker;

pub use backend::{command_exists, AnalyzerError, AnalyzerResult, FrameAnalyzer};
pub use ffmpeg::{FfmpegAnalyzer, DEFAULT_NOISE};
pub use worker::{AnalyzerRun, ParallelExecutor, ProgressReporter, WorkerScaler};
