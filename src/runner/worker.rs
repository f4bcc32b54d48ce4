//! Parallel analyzer runs using Rayon.
//!
//! One analyzer process is launched per source on a bounded thread pool. Each
//! worker blocks on its process until it exits; nothing is parsed until every
//! run has finished.
//!
//! # Design
//!
//! - `WorkerScaler` sizes the pool, leaving one core for the orchestrator
//! - `ParallelExecutor` runs the sources and returns results in submission order
//! - `AnalyzerRun` holds the outcome for a single source
//! - Progress is reported via `ProgressReporter` callback

use crate::runner::backend::{AnalyzerError, FrameAnalyzer};
use rayon::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::warn;

/// Calculates the worker count for a batch of sources.
#[derive(Debug, Clone, Default)]
pub struct WorkerScaler {
    /// User override for worker count (takes precedence)
    user_override: Option<usize>,
}

impl WorkerScaler {
    pub fn new(user_override: Option<usize>) -> Self {
        Self { user_override }
    }

    /// Number of workers to use for `job_count` sources.
    ///
    /// Defaults to one less than the available parallelism so the
    /// orchestrating thread keeps a core. Never more workers than jobs, never
    /// fewer than one.
    pub fn calculate_workers(&self, job_count: usize) -> usize {
        let workers = match self.user_override {
            Some(count) => count,
            None => std::thread::available_parallelism()
                .map(|p| p.get())
                .unwrap_or(2)
                .saturating_sub(1),
        };
        workers.min(job_count).max(1)
    }
}

/// Outcome of running the analyzer on one source.
#[derive(Debug)]
pub struct AnalyzerRun {
    /// Source identifier as submitted.
    pub source: String,
    /// Captured output, or why there is none.
    pub result: Result<Vec<u8>, AnalyzerError>,
}

impl AnalyzerRun {
    pub fn success(source: impl Into<String>, output: Vec<u8>) -> Self {
        Self {
            source: source.into(),
            result: Ok(output),
        }
    }

    pub fn failure(source: impl Into<String>, error: AnalyzerError) -> Self {
        Self {
            source: source.into(),
            result: Err(error),
        }
    }

    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    pub fn is_failure(&self) -> bool {
        self.result.is_err()
    }
}

/// Progress reporter for parallel runs.
///
/// Thread-safe progress tracking using atomic operations.
pub struct ProgressReporter {
    completed: Arc<AtomicUsize>,
    total: usize,
    callback: Option<Box<dyn Fn(usize, usize) + Send + Sync>>,
}

impl ProgressReporter {
    pub fn new(total: usize) -> Self {
        Self {
            completed: Arc::new(AtomicUsize::new(0)),
            total,
            callback: None,
        }
    }

    /// Create a progress reporter with a callback receiving `(completed, total)`.
    pub fn with_callback<F>(total: usize, callback: F) -> Self
    where
        F: Fn(usize, usize) + Send + Sync + 'static,
    {
        Self {
            completed: Arc::new(AtomicUsize::new(0)),
            total,
            callback: Some(Box::new(callback)),
        }
    }

    /// Report that one more source has finished.
    ///
    /// Returns the new count of completed sources.
    pub fn report_progress(&self) -> usize {
        let completed = self.completed.fetch_add(1, Ordering::SeqCst) + 1;

        if let Some(ref callback) = self.callback {
            callback(completed, self.total);
        }

        completed
    }

    /// Get current progress (completed, total).
    pub fn get_progress(&self) -> (usize, usize) {
        (self.completed.load(Ordering::SeqCst), self.total)
    }
}

/// Executor for parallel analyzer runs.
pub struct ParallelExecutor<'a, A: FrameAnalyzer + ?Sized> {
    analyzer: &'a A,
    worker_count: usize,
}

impl<'a, A: FrameAnalyzer + ?Sized> ParallelExecutor<'a, A> {
    pub fn new(analyzer: &'a A, worker_count: usize) -> Self {
        Self {
            analyzer,
            worker_count: worker_count.max(1),
        }
    }

    /// Run the analyzer on every source.
    ///
    /// Results come back in the order the sources were given, whatever order
    /// the processes finished in.
    pub fn execute(&self, sources: &[String], progress: &ProgressReporter) -> Vec<AnalyzerRun> {
        match sources.len() {
            0 => Vec::new(),
            // Single source: no thread pool needed
            1 => vec![self.run_one(&sources[0], progress)],
            _ => self.execute_parallel(sources, progress),
        }
    }

    fn execute_parallel(&self, sources: &[String], progress: &ProgressReporter) -> Vec<AnalyzerRun> {
        let pool = match rayon::ThreadPoolBuilder::new()
            .num_threads(self.worker_count)
            .thread_name(|i| format!("analyzer-{}", i))
            .build()
        {
            Ok(pool) => pool,
            Err(e) => {
                warn!("Failed to create thread pool: {}. Processing sequentially.", e);
                return sources
                    .iter()
                    .map(|source| self.run_one(source, progress))
                    .collect();
            }
        };

        pool.install(|| {
            sources
                .par_iter()
                .map(|source| self.run_one(source, progress))
                .collect()
        })
    }

    fn run_one(&self, source: &str, progress: &ProgressReporter) -> AnalyzerRun {
        let run = match self.analyzer.analyze(source) {
            Ok(output) => AnalyzerRun::success(source, output),
            Err(e) => AnalyzerRun::failure(source, e),
        };
        progress.report_progress();
        run
    }
}
