//! ffmpeg backend.
//!
//! Runs `ffmpeg -hide_banner -nostats -i <source> -vf freezedetect=n=<noise>
//! -f null -` and returns everything it printed. With a null muxer the
//! interesting output all lands on stderr.

use super::backend::{wait_with_timeout, AnalyzerError, AnalyzerResult, FrameAnalyzer};
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::Duration;
use tracing::debug;

/// Default noise tolerance for `freezedetect`.
pub const DEFAULT_NOISE: f64 = 0.003;

/// Backend for the ffmpeg CLI.
#[derive(Debug, Clone)]
pub struct FfmpegAnalyzer {
    program: PathBuf,
    noise: f64,
    timeout: Option<Duration>,
}

impl Default for FfmpegAnalyzer {
    fn default() -> Self {
        Self::new("ffmpeg")
    }
}

impl FfmpegAnalyzer {
    /// Create a backend running `program` with the default noise and no timeout.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            noise: DEFAULT_NOISE,
            timeout: None,
        }
    }

    pub fn with_noise(mut self, noise: f64) -> Self {
        self.noise = noise;
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Arguments passed to ffmpeg for one source.
    pub fn args(&self, source: &str) -> Vec<String> {
        vec![
            "-hide_banner".to_string(),
            "-nostats".to_string(),
            "-i".to_string(),
            source.to_string(),
            "-vf".to_string(),
            format!("freezedetect=n={}", self.noise),
            "-f".to_string(),
            "null".to_string(),
            "-".to_string(),
        ]
    }
}

impl FrameAnalyzer for FfmpegAnalyzer {
    fn name(&self) -> &str {
        "ffmpeg"
    }

    fn is_available(&self) -> bool {
        if self.program.components().count() > 1 {
            return self.program.is_file();
        }
        super::backend::command_exists(&self.program.to_string_lossy())
    }

    fn analyze(&self, source: &str) -> AnalyzerResult<Vec<u8>> {
        let mut cmd = Command::new(&self.program);
        cmd.args(self.args(source));
        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());

        debug!(program = %self.program.display(), source, "spawning analyzer");

        let mut child = cmd.spawn().map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => {
                AnalyzerError::NotAvailable(self.program.display().to_string())
            }
            _ => AnalyzerError::Io(e),
        })?;

        let captured = match wait_with_timeout(&mut child, self.timeout) {
            Ok(captured) => captured,
            Err(e) if e.kind() == std::io::ErrorKind::TimedOut => {
                return Err(AnalyzerError::Timeout(self.timeout.unwrap_or_default()))
            }
            Err(e) => return Err(AnalyzerError::Io(e)),
        };

        let mut output = captured.stdout;
        output.extend_from_slice(&captured.stderr);

        if captured.status.success() {
            Ok(output)
        } else {
            Err(AnalyzerError::ExitCode {
                code: captured.status.code().unwrap_or(-1),
                output,
            })
        }
    }
}
