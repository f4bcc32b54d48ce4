//! Time intervals and the freeze/valid inversion.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A closed time window in seconds from the start of a video.
///
/// Serialized as a two-element array `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub start: f64,
    pub end: f64,
}

impl Interval {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Length of the window. Zero for degenerate intervals.
    pub fn length(&self) -> f64 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.length() == 0.0
    }
}

impl From<(f64, f64)> for Interval {
    fn from((start, end): (f64, f64)) -> Self {
        Self::new(start, end)
    }
}

impl Serialize for Interval {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (self.start, self.end).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Interval {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        <(f64, f64)>::deserialize(deserializer).map(Interval::from)
    }
}

/// Complement of `freezes` within `[0, duration]`.
///
/// The freeze boundaries are flattened into `[0, s0, e0, ..., sn, en, duration]`
/// and paired up two at a time, so the result always holds
/// `freezes.len() + 1` intervals. Zero-length gaps (a freeze touching 0 or
/// `duration`, or two adjacent freezes) are kept.
pub fn invert(freezes: &[Interval], duration: f64) -> Vec<Interval> {
    let mut boundaries = Vec::with_capacity(freezes.len() * 2 + 2);
    boundaries.push(0.0);
    for freeze in freezes {
        boundaries.push(freeze.start);
        boundaries.push(freeze.end);
    }
    boundaries.push(duration);

    boundaries
        .chunks_exact(2)
        .map(|pair| Interval::new(pair[0], pair[1]))
        .collect()
}
