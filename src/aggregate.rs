//! Turns analyzer runs into per-video records and the final report.
//!
//! Runs in submission order, single-threaded, after every analyzer process has
//! exited: parse → duration lookup → inversion → metrics, then one
//! synchronization check over the videos that made it through.

use std::collections::HashSet;
use std::fmt;

use tracing::{debug, warn};

use crate::error::RunError;
use crate::freeze::{
    invert, parse_stream, Interval, MetricsError, SyncChecker, SyncVerdict, VideoMetrics,
};
use crate::report::{FailureReport, Report, VideoReport};
use crate::runner::{AnalyzerError, AnalyzerRun};

/// A successfully processed video.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoRecord {
    pub source: String,
    pub duration: f64,
    pub valid: Vec<Interval>,
    pub metrics: VideoMetrics,
}

/// Why a video has no record.
#[derive(Debug)]
pub enum FailureKind {
    /// The analyzer itself failed.
    Process(AnalyzerError),
    /// The output had no usable duration line.
    MissingDuration,
    /// Parsing was abandoned before any freeze completed.
    Unparsable,
    Metrics(MetricsError),
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Process(e) => write!(f, "{}", e),
            FailureKind::MissingDuration => write!(f, "No duration found in analyzer output"),
            FailureKind::Unparsable => write!(f, "Analyzer output could not be parsed"),
            FailureKind::Metrics(e) => write!(f, "{}", e),
        }
    }
}

/// A video that could not be processed.
#[derive(Debug)]
pub struct Failure {
    pub source: String,
    pub kind: FailureKind,
    /// Analyzer output, kept for the all-failed error.
    pub output: Vec<u8>,
}

impl Failure {
    /// Captured output if there was any, otherwise the failure reason.
    fn detail(&self) -> String {
        let output = String::from_utf8_lossy(&self.output);
        if output.trim().is_empty() {
            self.kind.to_string()
        } else {
            output.trim_end().to_string()
        }
    }
}

/// Everything known after a run.
#[derive(Debug)]
pub struct Aggregated {
    pub videos: Vec<VideoRecord>,
    pub failures: Vec<Failure>,
    pub verdict: SyncVerdict,
}

impl Aggregated {
    pub fn is_synced(&self) -> bool {
        self.verdict.is_synced()
    }

    pub fn report(&self) -> Report {
        Report {
            all_videos_freeze_frame_synced: self.is_synced(),
            videos: self
                .videos
                .iter()
                .map(|video| VideoReport {
                    source: video.source.clone(),
                    longest_valid_period: video.metrics.longest_valid_period,
                    valid_video_percentage: video.metrics.valid_video_percentage,
                    valid_periods: video.valid.clone(),
                })
                .collect(),
            failures: self
                .failures
                .iter()
                .map(|failure| FailureReport {
                    source: failure.source.clone(),
                    reason: failure.kind.to_string(),
                })
                .collect(),
        }
    }
}

/// Builds per-video records from analyzer runs.
#[derive(Debug, Clone, Default)]
pub struct Aggregator {
    checker: SyncChecker,
}

impl Aggregator {
    pub fn new(checker: SyncChecker) -> Self {
        Self { checker }
    }

    /// Process one analyzer output into a record.
    pub fn process(&self, source: &str, output: &[u8]) -> Result<VideoRecord, FailureKind> {
        let parse = parse_stream(output);

        for diagnostic in &parse.diagnostics {
            warn!(source, "{}", diagnostic);
        }

        if parse.abandoned && parse.freezes.is_empty() {
            return Err(FailureKind::Unparsable);
        }
        let duration = parse.duration.ok_or(FailureKind::MissingDuration)?;

        let valid = invert(&parse.freezes, duration);
        let metrics = VideoMetrics::compute(&valid).map_err(FailureKind::Metrics)?;

        debug!(
            source,
            duration,
            freezes = parse.freezes.len(),
            "parsed analyzer output"
        );

        Ok(VideoRecord {
            source: source.to_string(),
            duration,
            valid,
            metrics,
        })
    }

    /// Aggregate all runs.
    ///
    /// Failed videos are logged and reported but do not stop the run. Fails
    /// only when not a single video could be processed.
    pub fn aggregate(&self, runs: Vec<AnalyzerRun>) -> Result<Aggregated, RunError> {
        let mut videos = Vec::new();
        let mut failures = Vec::new();

        for run in runs {
            let failure = match run.result {
                Ok(output) => match self.process(&run.source, &output) {
                    Ok(record) => {
                        videos.push(record);
                        continue;
                    }
                    Err(kind) => Failure {
                        source: run.source,
                        kind,
                        output,
                    },
                },
                Err(error) => Failure {
                    output: error.output().to_vec(),
                    source: run.source,
                    kind: FailureKind::Process(error),
                },
            };
            failures.push(failure);
        }

        if videos.is_empty() && !failures.is_empty() {
            return Err(RunError::AllFailed {
                failures: failures
                    .iter()
                    .map(|failure| (failure.source.clone(), failure.detail()))
                    .collect(),
            });
        }

        if !failures.is_empty() {
            warn!("Some videos failed filtering:");
            for failure in &failures {
                warn!("{}: {}", failure.source, failure.kind);
            }
        }

        let intervals: Vec<&[Interval]> = videos.iter().map(|v| v.valid.as_slice()).collect();
        let verdict = self.checker.check(&intervals);
        debug!(?verdict, tolerance = self.checker.tolerance(), "sync check");

        Ok(Aggregated {
            videos,
            failures,
            verdict,
        })
    }
}

/// Reject runs that name the same source twice.
pub fn ensure_unique_sources(sources: &[String]) -> Result<(), RunError> {
    if sources.is_empty() {
        return Err(RunError::NoSources);
    }
    let mut seen = HashSet::new();
    for source in sources {
        if !seen.insert(source.as_str()) {
            return Err(RunError::DuplicateSource(source.clone()));
        }
    }
    Ok(())
}
