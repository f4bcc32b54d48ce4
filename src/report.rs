//! The JSON report written at the end of a run.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::Path;

use crate::freeze::Interval;

/// Final report for a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub all_videos_freeze_frame_synced: bool,
    /// Successfully processed videos, in submission order.
    pub videos: Vec<VideoReport>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<FailureReport>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoReport {
    pub source: String,
    pub longest_valid_period: f64,
    pub valid_video_percentage: f64,
    pub valid_periods: Vec<Interval>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailureReport {
    pub source: String,
    pub reason: String,
}

impl Report {
    /// Pretty-printed JSON with four-space indentation.
    pub fn to_json_pretty(&self) -> Result<String> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)
            .context("Failed to serialize report")?;
        String::from_utf8(buf).context("Report is not valid UTF-8")
    }

    /// Write the report to `output`, or to stdout when no path is given.
    pub fn write_to(&self, output: Option<&Path>) -> Result<()> {
        let json = self.to_json_pretty()?;
        match output {
            Some(path) => fs::write(path, json + "\n")
                .with_context(|| format!("Failed to write report: {:?}", path)),
            None => {
                let stdout = std::io::stdout();
                let mut handle = stdout.lock();
                writeln!(handle, "{}", json).context("Failed to write report to stdout")
            }
        }
    }
}
