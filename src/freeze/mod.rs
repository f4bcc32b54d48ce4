//! Freeze-frame interval engine.
//!
//! Turns analyzer output into freeze intervals, inverts them into valid
//! playback windows and measures those windows per video and across videos.
//!
//! # Pipeline
//!
//! - [`parse_stream`] runs the start/duration/end state machine over one
//!   video's output and reads its duration line
//! - [`invert`] turns freezes into valid intervals
//! - [`VideoMetrics`] measures one video
//! - [`SyncChecker`] compares all videos

mod duration;
mod error;
mod interval;
mod metrics;
mod parser;
mod sync;

pub use duration::parse_duration;
pub use error::{MetricsError, ParseError};
pub use interval::{invert, Interval};
pub use metrics::{longest_valid_period, valid_video_percentage, VideoMetrics};
pub use parser::{parse_stream, Diagnostic, EventTag, FreezeMachine, StreamParse};
pub use sync::{SyncChecker, SyncVerdict, DEFAULT_SYNC_TOLERANCE};
