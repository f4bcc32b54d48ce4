//! Run-level errors.
//!
//! Per-video problems never surface here; they are collected as failures in
//! the report. A `RunError` means the run as a whole produced nothing useful.

use std::fmt;

/// Error type for a whole run.
#[derive(Debug)]
pub enum RunError {
    /// Every source failed. Holds each source with its captured output, or
    /// the failure reason when the analyzer printed nothing.
    AllFailed { failures: Vec<(String, String)> },

    /// The same source was given more than once.
    DuplicateSource(String),

    /// No sources were given.
    NoSources,
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunError::AllFailed { failures } => {
                writeln!(f, "Failed to process URLs:")?;
                for (source, detail) in failures {
                    writeln!(f, "{}:", source)?;
                    for line in detail.lines() {
                        writeln!(f, "  {}", line)?;
                    }
                }
                Ok(())
            }
            RunError::DuplicateSource(source) => {
                write!(f, "Source given more than once: {}", source)
            }
            RunError::NoSources => write!(f, "No sources to process"),
        }
    }
}

impl std::error::Error for RunError {}
