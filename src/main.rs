//! freezesync - CLI entry point

use anyhow::{anyhow, Result};
use clap::{CommandFactory, Parser};
use tracing::{info, warn};

use freezesync::aggregate::{ensure_unique_sources, Aggregator};
use freezesync::cli::Cli;
use freezesync::runner::{
    FfmpegAnalyzer, FrameAnalyzer, ParallelExecutor, ProgressReporter, WorkerScaler,
};
use freezesync::{Config, SyncChecker};

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        clap_complete::generate(shell, &mut cmd, "freezesync", &mut std::io::stdout());
        return Ok(());
    }

    freezesync::logging::init(cli.log_level());
    run(&cli)
}

/// Config file values with command line flags applied on top.
fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    if let Some(ffmpeg) = &cli.ffmpeg {
        config.analyzer.ffmpeg = ffmpeg.clone();
    }
    if let Some(noise) = cli.noise {
        config.analyzer.noise = noise;
    }
    if let Some(timeout) = cli.timeout {
        config.analyzer.timeout_secs = Some(timeout);
    }
    if let Some(tolerance) = cli.tolerance {
        config.sync.tolerance = tolerance;
    }
    if let Some(workers) = cli.workers {
        config.workers.count = Some(workers);
    }

    config
        .validate()
        .map_err(|e| anyhow!("Invalid settings: {}", e))?;
    Ok(config)
}

fn run(cli: &Cli) -> Result<()> {
    ensure_unique_sources(&cli.sources)?;
    let config = load_config(cli)?;

    let analyzer = FfmpegAnalyzer::new(&config.analyzer.ffmpeg)
        .with_noise(config.analyzer.noise)
        .with_timeout(config.analyzer_timeout());
    if !analyzer.is_available() {
        warn!(
            "{} not found at '{}', runs will likely fail",
            analyzer.name(),
            config.analyzer.ffmpeg
        );
    }

    let total = cli.sources.len();
    let workers = WorkerScaler::new(config.workers.count).calculate_workers(total);
    info!(workers, sources = total, "running {}", analyzer.name());

    let progress = ProgressReporter::with_callback(total, |done, total| {
        info!("analyzed {}/{}", done, total);
    });
    let runs = ParallelExecutor::new(&analyzer, workers).execute(&cli.sources, &progress);

    let aggregated = Aggregator::new(SyncChecker::new(config.sync.tolerance)).aggregate(runs)?;
    info!(
        videos = aggregated.videos.len(),
        failures = aggregated.failures.len(),
        synced = aggregated.is_synced(),
        "aggregated"
    );

    aggregated.report().write_to(cli.output.as_deref())
}
