//! Cross-video synchronization check.
//!
//! Copies of the same source that were trimmed or encoded independently should
//! freeze at the same moments. Their valid intervals are compared position by
//! position: the `i`-th start of every video must lie within the tolerance of
//! each other, and likewise the `i`-th end.

use super::interval::Interval;

/// Default maximum spread between corresponding boundaries, in seconds.
pub const DEFAULT_SYNC_TOLERANCE: f64 = 0.5;

/// Outcome of comparing the valid intervals of several videos.
#[derive(Debug, Clone, PartialEq)]
pub enum SyncVerdict {
    /// Every boundary group is within tolerance.
    Synced {
        /// Largest spread seen across all boundary groups.
        max_spread: f64,
    },
    /// Videos do not have the same number of valid intervals.
    CountMismatch { counts: Vec<usize> },
    /// At least one boundary group exceeds the tolerance. Reports the worst.
    Drifted { position: usize, spread: f64 },
}

impl SyncVerdict {
    pub fn is_synced(&self) -> bool {
        matches!(self, SyncVerdict::Synced { .. })
    }
}

/// Compares valid intervals across videos with a fixed tolerance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SyncChecker {
    tolerance: f64,
}

impl Default for SyncChecker {
    fn default() -> Self {
        Self::new(DEFAULT_SYNC_TOLERANCE)
    }
}

impl SyncChecker {
    pub fn new(tolerance: f64) -> Self {
        Self { tolerance }
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Shorthand for `check(videos).is_synced()`.
    pub fn is_synced<V: AsRef<[Interval]>>(&self, videos: &[V]) -> bool {
        self.check(videos).is_synced()
    }

    /// Compare `videos`, each given as its valid-interval sequence.
    ///
    /// Zero or one video is trivially in sync. Differing interval counts short
    /// circuit without looking at any boundary.
    pub fn check<V: AsRef<[Interval]>>(&self, videos: &[V]) -> SyncVerdict {
        let counts: Vec<usize> = videos.iter().map(|v| v.as_ref().len()).collect();
        if counts.windows(2).any(|pair| pair[0] != pair[1]) {
            return SyncVerdict::CountMismatch { counts };
        }

        let positions = counts.first().copied().unwrap_or(0);
        let mut max_spread = 0.0_f64;
        let mut worst_position = 0;

        for position in 0..positions {
            let starts = spread(videos.iter().map(|v| v.as_ref()[position].start));
            let ends = spread(videos.iter().map(|v| v.as_ref()[position].end));
            let group_spread = starts.max(ends);
            if group_spread > max_spread {
                max_spread = group_spread;
                worst_position = position;
            }
        }

        if max_spread <= self.tolerance {
            SyncVerdict::Synced { max_spread }
        } else {
            SyncVerdict::Drifted {
                position: worst_position,
                spread: max_spread,
            }
        }
    }
}

/// `max - min` of the values, zero when there are none.
fn spread(values: impl Iterator<Item = f64>) -> f64 {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), v| {
        (min.min(v), max.max(v))
    });
    if min > max {
        0.0
    } else {
        max - min
    }
}
