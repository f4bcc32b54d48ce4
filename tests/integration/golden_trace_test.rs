//! Captured ffmpeg transcripts through the whole aggregation pipeline

use freezesync::runner::AnalyzerRun;
use freezesync::{Aggregator, Interval};

use super::helpers::load_fixture_bytes;

fn runs(names: &[&str]) -> Vec<AnalyzerRun> {
    names
        .iter()
        .map(|name| AnalyzerRun::success(*name, load_fixture_bytes(name)))
        .collect()
}

fn intervals(pairs: &[(f64, f64)]) -> Vec<Interval> {
    pairs.iter().copied().map(Interval::from).collect()
}

#[test]
fn transcripts_reproduce_golden_valid_periods() {
    let aggregated = Aggregator::default()
        .aggregate(runs(&["ffmpeg.1.out", "ffmpeg.2.out", "ffmpeg.3.out"]))
        .unwrap();

    assert!(aggregated.failures.is_empty());
    assert_eq!(aggregated.videos.len(), 3);

    assert_eq!(
        aggregated.videos[0].valid,
        intervals(&[
            (0.0, 4.5045),
            (10.4271, 12.012),
            (14.2476, 18.018),
            (25.392, 29.06)
        ])
    );
    assert_eq!(
        aggregated.videos[1].valid,
        intervals(&[
            (0.0, 4.5045),
            (10.6106, 12.0787),
            (14.4311, 18.018),
            (25.5755, 29.06)
        ])
    );
    assert_eq!(
        aggregated.videos[2].valid,
        intervals(&[
            (0.0, 4.5045),
            (8.3083, 9.97663),
            (12.1288, 16.016),
            (23.2733, 26.76)
        ])
    );
}

#[test]
fn transcripts_keep_submission_order() {
    let aggregated = Aggregator::default()
        .aggregate(runs(&["ffmpeg.3.out", "ffmpeg.1.out"]))
        .unwrap();

    let sources: Vec<&str> = aggregated
        .videos
        .iter()
        .map(|v| v.source.as_str())
        .collect();
    assert_eq!(sources, vec!["ffmpeg.3.out", "ffmpeg.1.out"]);
}

#[test]
fn transcript_durations_and_metrics() {
    let aggregated = Aggregator::default()
        .aggregate(runs(&["ffmpeg.1.out", "ffmpeg.3.out"]))
        .unwrap();

    let first = &aggregated.videos[0];
    assert_eq!(first.duration, 29.06);
    assert!((first.metrics.longest_valid_period - 4.5045).abs() < 1e-9);

    let third = &aggregated.videos[1];
    assert_eq!(third.duration, 26.76);
    assert!((third.metrics.longest_valid_period - 4.5045).abs() < 1e-9);
    assert!(third.metrics.valid_video_percentage > 0.0);
    assert!(third.metrics.valid_video_percentage < 100.0);
}

#[test]
fn first_two_transcripts_are_in_sync() {
    let aggregated = Aggregator::default()
        .aggregate(runs(&["ffmpeg.1.out", "ffmpeg.2.out"]))
        .unwrap();

    assert!(aggregated.is_synced());
    assert!(aggregated.report().all_videos_freeze_frame_synced);
}

#[test]
fn third_transcript_drifts_out_of_sync() {
    let aggregated = Aggregator::default()
        .aggregate(runs(&["ffmpeg.1.out", "ffmpeg.2.out", "ffmpeg.3.out"]))
        .unwrap();

    assert!(!aggregated.is_synced());
    assert!(!aggregated.report().all_videos_freeze_frame_synced);
}
