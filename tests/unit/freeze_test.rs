//! Unit tests for the freeze interval engine

use freezesync::freeze::{
    invert, longest_valid_period, parse_duration, parse_stream, valid_video_percentage,
    MetricsError, SyncChecker, SyncVerdict, VideoMetrics,
};
use freezesync::Interval;

use super::helpers::{assert_close, intervals};

#[test]
fn invert_of_nothing_is_whole_video() {
    for duration in [1.0, 29.06, 7200.0] {
        assert_eq!(invert(&[], duration), intervals(&[(0.0, duration)]));
    }
}

#[test]
fn invert_of_adjacent_unit_freezes() {
    let freezes: Vec<Interval> = (1..10)
        .zip(2..11)
        .map(|(s, e)| Interval::new(s as f64, e as f64))
        .collect();

    let valid = invert(&freezes, 11.0);

    assert_eq!(valid.len(), 10);
    assert_eq!(valid[0], Interval::new(0.0, 1.0));
    for (offset, gap) in valid[1..9].iter().enumerate() {
        let at = (offset + 2) as f64;
        assert_eq!(*gap, Interval::new(at, at));
    }
    assert_eq!(valid[9], Interval::new(10.0, 11.0));
}

#[test]
fn invert_endpoints_stay_within_duration() {
    let valid = invert(&intervals(&[(0.0, 1.0), (3.0, 5.0), (8.0, 9.5)]), 9.5);
    assert!(valid.iter().all(|i| i.start >= 0.0 && i.end <= 9.5));
    assert!(valid.windows(2).all(|w| w[0].end <= w[1].start));
}

#[test]
fn metrics_of_reference_intervals() {
    let valid = intervals(&[(0.0, 25.0), (50.0, 76.0), (100.0, 125.0)]);

    assert_eq!(longest_valid_period(&valid).unwrap(), 26.0);
    assert_close(valid_video_percentage(&valid).unwrap(), 60.8);
}

#[test]
fn metrics_of_empty_sequence_fail() {
    assert_eq!(VideoMetrics::compute(&[]), Err(MetricsError::Empty));
}

#[test]
fn sync_of_reference_videos() {
    let a = intervals(&[(0.0, 1.0), (2.0, 3.0), (4.0, 5.0)]);
    let b = intervals(&[(0.0, 1.5), (2.5, 3.5), (4.5, 5.5)]);
    let c = intervals(&[(0.0, 1.2), (2.3, 3.1), (4.0, 5.5)]);

    assert!(SyncChecker::default().is_synced(&[&a, &b, &c]));
}

#[test]
fn sync_count_mismatch_regardless_of_values() {
    let a = intervals(&[(0.0, 1.0), (2.0, 3.0)]);
    let b = intervals(&[(0.0, 1.0), (2.0, 3.0), (3.0, 3.0)]);

    assert!(matches!(
        SyncChecker::default().check(&[&a, &b]),
        SyncVerdict::CountMismatch { .. }
    ));
}

#[test]
fn sync_with_tight_tolerance_fails_reference_videos() {
    let a = intervals(&[(0.0, 1.0), (2.0, 3.0), (4.0, 5.0)]);
    let b = intervals(&[(0.0, 1.5), (2.5, 3.5), (4.5, 5.5)]);

    assert!(!SyncChecker::new(0.1).is_synced(&[&a, &b]));
}

#[test]
fn duration_parser_reads_hours_minutes_seconds() {
    assert_close(parse_duration(b"02:00:01.50").unwrap(), 7201.5);
    assert!(parse_duration(b"garbage").is_err());
}

#[test]
fn parse_then_invert_pipeline() {
    let output = b"  Duration: 00:00:20.00, start: 0.000000, bitrate: 900 kb/s\n\
[freezedetect @ 0x1] lavfi.freezedetect.freeze_start: 5\n\
[freezedetect @ 0x1] lavfi.freezedetect.freeze_duration: 5\n\
[freezedetect @ 0x1] lavfi.freezedetect.freeze_end: 10\n";

    let parse = parse_stream(output);
    let valid = invert(&parse.freezes, parse.duration.unwrap());

    assert_eq!(valid, intervals(&[(0.0, 5.0), (10.0, 20.0)]));
    assert_eq!(longest_valid_period(&valid).unwrap(), 10.0);
    assert_eq!(valid_video_percentage(&valid).unwrap(), 75.0);
}
