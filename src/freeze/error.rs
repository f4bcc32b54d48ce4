//! Errors raised while turning analyzer output into intervals and metrics.

use thiserror::Error;

use super::parser::EventTag;

/// Analyzer output that does not match the expected format.
///
/// None of these abort a run: they degrade the result of the video whose
/// stream contained them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("Duration does not match HH:MM:SS.ss: {0:?}")]
    DurationFormat(String),

    #[error("Malformed freezedetect line: {0:?}")]
    MalformedEvent(String),

    #[error("Invalid value in freezedetect line: {0:?}")]
    InvalidValue(String),

    #[error("Failed to parse some output. Expected {expected}, found {line:?}")]
    UnexpectedTag { expected: EventTag, line: String },
}

/// Metrics requested on a video that has nothing to measure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MetricsError {
    #[error("No valid intervals to compute metrics from")]
    Empty,

    #[error("Video duration is zero")]
    ZeroDuration,
}
