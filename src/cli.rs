//! CLI definitions for freezesync
//!
//! This module contains the clap CLI structure definitions, separated from main.rs
//! so they can be accessed by xtask for documentation generation (man pages, markdown).

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{ArgAction, Parser};
use clap_complete::Shell as CompletionShell;
use std::path::PathBuf;

/// Build clap styles.
///
/// - Green: headers, usage, literals
/// - White: placeholders and valid values (renders as light gray on dark terminals)
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser, Debug)]
#[command(name = "freezesync")]
#[command(about = "Find frozen frames in videos using ffmpeg")]
#[command(
    long_about = "Find frozen frames in videos using ffmpeg's freezedetect filter.

Each source is run through ffmpeg in parallel. The reported freezes are
inverted into valid (non-frozen) periods, measured per video, and compared
across videos to decide whether all copies freeze at the same moments.

The report is written as JSON to stdout, or to the file given with --output.

EXAMPLES:
    freezesync a.mp4 b.mp4 c.mp4              Compare three local copies
    freezesync -o report.json https://host/a.mp4 https://host/b.mp4
    freezesync --tolerance 1.0 a.mp4 b.mp4    Allow one second of drift
    RUST_LOG=debug freezesync a.mp4           Show parser diagnostics

CONFIGURATION:
    Defaults are read from ~/.config/freezesync/config.toml. Flags given on
    the command line take priority."
)]
#[command(version = crate::VERSION)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    /// Videos to process (URLs or paths)
    #[arg(
        value_name = "URL",
        required_unless_present = "completions",
        help = "List of URLs to videos we need to process"
    )]
    pub sources: Vec<String>,

    /// Write the report to a file instead of stdout
    #[arg(long, short, value_name = "PATH", help = "Specify a file to write output to")]
    pub output: Option<PathBuf>,

    /// Read configuration from this file instead of the default location
    #[arg(long, value_name = "PATH", help = "Configuration file to use")]
    pub config: Option<PathBuf>,

    /// ffmpeg binary to run
    #[arg(long, value_name = "PATH", help = "ffmpeg binary (overrides config)")]
    pub ffmpeg: Option<String>,

    /// Noise tolerance for freezedetect
    #[arg(long, help = "freezedetect noise tolerance (overrides config)")]
    pub noise: Option<f64>,

    /// Maximum boundary drift between videos, in seconds
    #[arg(long, help = "Sync tolerance in seconds (overrides config)")]
    pub tolerance: Option<f64>,

    /// Number of parallel ffmpeg runs
    #[arg(long, short, help = "Parallel ffmpeg runs (default: cores - 1)")]
    pub workers: Option<usize>,

    /// Kill an ffmpeg run after this many seconds
    #[arg(long, value_name = "SECS", help = "Per-video ffmpeg timeout in seconds")]
    pub timeout: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(long, short, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log errors
    #[arg(long, short)]
    pub quiet: bool,

    /// Generate shell completions (internal use)
    #[arg(long, value_enum, hide = true)]
    pub completions: Option<CompletionShell>,
}

impl Cli {
    /// Log level implied by -v/-q, used when RUST_LOG is not set.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
