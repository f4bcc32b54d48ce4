//! Per-video quality metrics over valid intervals.

use serde::Serialize;

use super::error::MetricsError;
use super::interval::Interval;

/// Length of the longest valid interval.
pub fn longest_valid_period(valid: &[Interval]) -> Result<f64, MetricsError> {
    valid
        .iter()
        .map(Interval::length)
        .fold(None, |longest: Option<f64>, length| {
            Some(longest.map_or(length, |l| l.max(length)))
        })
        .ok_or(MetricsError::Empty)
}

/// Share of the video covered by valid intervals, in percent.
///
/// The total duration is taken as the end of the last interval, which is the
/// video duration whenever the intervals came out of [`invert`].
///
/// [`invert`]: super::interval::invert
pub fn valid_video_percentage(valid: &[Interval]) -> Result<f64, MetricsError> {
    let duration = valid.last().ok_or(MetricsError::Empty)?.end;
    if duration == 0.0 {
        return Err(MetricsError::ZeroDuration);
    }
    let total: f64 = valid.iter().map(Interval::length).sum();
    Ok(100.0 * total / duration)
}

/// Both metrics for one video.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VideoMetrics {
    pub longest_valid_period: f64,
    pub valid_video_percentage: f64,
}

impl VideoMetrics {
    pub fn compute(valid: &[Interval]) -> Result<Self, MetricsError> {
        Ok(Self {
            longest_valid_period: longest_valid_period(valid)?,
            valid_video_percentage: valid_video_percentage(valid)?,
        })
    }
}
