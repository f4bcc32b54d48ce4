//! Analyzer backends.
//!
//! A backend knows how to run the external frame analyzer on one source and
//! hand back its raw diagnostic output. The interval engine never sees the
//! process, only the bytes.
//!
//! # Design
//!
//! The `FrameAnalyzer` trait is the seam between process plumbing and
//! parsing. Backends are stateless and are shared across worker threads.

use std::io::Read;
use std::process::{Child, ExitStatus};
use std::thread;
use std::time::{Duration, Instant};
use thiserror::Error;

/// Result type for analyzer backend operations.
pub type AnalyzerResult<T> = Result<T, AnalyzerError>;

/// Trait for frame-analysis backends (Strategy pattern).
///
/// Implementors must be thread-safe as one instance serves every worker.
pub trait FrameAnalyzer: Send + Sync {
    /// Human-readable name for logging.
    fn name(&self) -> &str;

    /// Check if the analyzer binary is available on the system.
    fn is_available(&self) -> bool;

    /// Run the analyzer on `source` and return its combined output.
    ///
    /// A non-zero exit is an error that still carries the captured output.
    fn analyze(&self, source: &str) -> AnalyzerResult<Vec<u8>>;
}

/// Why an analyzer run produced no usable output.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("Analyzer not found: {0}")]
    NotAvailable(String),

    #[error("Analyzer timed out after {0:?}")]
    Timeout(Duration),

    #[error("Exit code {code}: {}", last_line(output))]
    ExitCode { code: i32, output: Vec<u8> },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AnalyzerError {
    /// Output captured before the failure, empty when there was none.
    pub fn output(&self) -> &[u8] {
        match self {
            AnalyzerError::ExitCode { output, .. } => output,
            _ => &[],
        }
    }
}

/// Last non-empty line of the output, where ffmpeg puts its fatal message.
fn last_line(output: &[u8]) -> String {
    let text = String::from_utf8_lossy(output);
    let line = text
        .lines()
        .rev()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or("");
    if line.chars().count() <= 200 {
        line.to_string()
    } else {
        format!("{}...", line.chars().take(200).collect::<String>())
    }
}

/// Output of a finished child process.
#[derive(Debug)]
pub(crate) struct Captured {
    pub status: ExitStatus,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

/// Wait for a child, draining its pipes, with an optional timeout.
///
/// Both pipes are read on their own threads so a chatty child cannot block on
/// a full pipe while we wait. On timeout the child is killed and reaped.
pub(crate) fn wait_with_timeout(
    child: &mut Child,
    timeout: Option<Duration>,
) -> std::io::Result<Captured> {
    let stdout = drain(child.stdout.take());
    let stderr = drain(child.stderr.take());

    let status = match timeout {
        None => child.wait()?,
        Some(limit) => {
            let start = Instant::now();
            let poll_interval = Duration::from_millis(100);
            loop {
                if let Some(status) = child.try_wait()? {
                    break status;
                }
                if start.elapsed() >= limit {
                    // Kill and reap to prevent zombie process
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(std::io::Error::new(
                        std::io::ErrorKind::TimedOut,
                        "Process timed out",
                    ));
                }
                thread::sleep(poll_interval);
            }
        }
    };

    Ok(Captured {
        status,
        stdout: stdout.join().unwrap_or_default(),
        stderr: stderr.join().unwrap_or_default(),
    })
}

fn drain<R: Read + Send + 'static>(pipe: Option<R>) -> thread::JoinHandle<Vec<u8>> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(mut pipe) = pipe {
            pipe.read_to_end(&mut buf).ok();
        }
        buf
    })
}

/// Check if a command is available in PATH.
///
/// Uses platform-specific command lookup:
/// - Unix: `which` command
/// - Windows: `where` command
pub fn command_exists(command: &str) -> bool {
    #[cfg(windows)]
    let lookup_cmd = "where";
    #[cfg(not(windows))]
    let lookup_cmd = "which";

    std::process::Command::new(lookup_cmd)
        .arg(command)
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}
