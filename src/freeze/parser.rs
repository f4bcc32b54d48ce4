//! State machine turning ffmpeg `freezedetect` output into freeze intervals.
//!
//! The filter reports each freeze as a triplet of lines, always in the same
//! order:
//!
//! ```text
//! [freezedetect @ 0x55d0c2c3a580] lavfi.freezedetect.freeze_start: 4.5045
//! [freezedetect @ 0x55d0c2c3a580] lavfi.freezedetect.freeze_duration: 5.92259
//! [freezedetect @ 0x55d0c2c3a580] lavfi.freezedetect.freeze_end: 10.4271
//! ```
//!
//! Only `start` and `end` feed the interval. The input duration comes from
//! the demuxer banner (`  Duration: 00:00:29.06, start: ...`).
//!
//! Parsing is side-effect free: anomalies are returned as [`Diagnostic`]s
//! alongside the result instead of being logged here.

use std::fmt;

use super::duration::parse_duration;
use super::error::ParseError;
use super::interval::Interval;

const DURATION_PREFIX: &[u8] = b"  Duration: ";
const EVENT_PREFIX: &[u8] = b"[freezedetect";
const EVENT_SEPARATOR: &[u8] = b": ";

/// Position in the start/duration/end rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventTag {
    Start,
    Duration,
    End,
}

impl EventTag {
    /// The tag expected after this one.
    pub fn next(self) -> Self {
        match self {
            EventTag::Start => EventTag::Duration,
            EventTag::Duration => EventTag::End,
            EventTag::End => EventTag::Start,
        }
    }

    /// Suffix an event label carries for this tag.
    pub fn suffix(self) -> &'static [u8] {
        match self {
            EventTag::Start => b"start",
            EventTag::Duration => b"duration",
            EventTag::End => b"end",
        }
    }
}

impl fmt::Display for EventTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventTag::Start => write!(f, "start"),
            EventTag::Duration => write!(f, "duration"),
            EventTag::End => write!(f, "end"),
        }
    }
}

/// Something in the stream that did not go as expected.
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// A line that could not be parsed. `line` is 1-based.
    Parse { line: usize, error: ParseError },
    /// The stream ended between a `start` and its `end`.
    UnterminatedFreeze { start: f64 },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::Parse { line, error } => write!(f, "line {}: {}", line, error),
            Diagnostic::UnterminatedFreeze { start } => {
                write!(f, "freeze starting at {}s has no end, dropped", start)
            }
        }
    }
}

/// Everything extracted from one video's analyzer output.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StreamParse {
    /// Completed freezes in stream order.
    pub freezes: Vec<Interval>,
    /// Input duration, if a parsable duration line was seen.
    pub duration: Option<f64>,
    pub diagnostics: Vec<Diagnostic>,
    /// Parsing stopped early at an unexpected event line.
    pub abandoned: bool,
}

/// The start/duration/end rotation plus the freeze being assembled.
#[derive(Debug)]
pub struct FreezeMachine {
    last: EventTag,
    pending_start: Option<f64>,
}

impl Default for FreezeMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl FreezeMachine {
    /// A machine whose next expected tag is `start`.
    pub fn new() -> Self {
        Self {
            last: EventTag::End,
            pending_start: None,
        }
    }

    /// Tag the next event line must carry.
    pub fn expected(&self) -> EventTag {
        self.last.next()
    }

    /// Start of a freeze whose end has not been seen yet.
    pub fn pending_start(&self) -> Option<f64> {
        self.pending_start
    }

    /// Consume one event line, returning the freeze it completes, if any.
    ///
    /// Any error leaves the machine out of step with the stream; callers stop
    /// feeding it.
    pub fn feed(&mut self, line: &[u8]) -> Result<Option<Interval>, ParseError> {
        let (label, raw_value) =
            split_event(line).ok_or_else(|| ParseError::MalformedEvent(lossy(line)))?;

        let expected = self.expected();
        self.last = expected;

        if !label.ends_with(expected.suffix()) {
            return Err(ParseError::UnexpectedTag {
                expected,
                line: lossy(line),
            });
        }

        let value = parse_value(raw_value).ok_or_else(|| ParseError::InvalidValue(lossy(line)))?;

        match expected {
            EventTag::Start => {
                self.pending_start = Some(value);
                Ok(None)
            }
            EventTag::Duration => Ok(None),
            EventTag::End => Ok(self
                .pending_start
                .take()
                .map(|start| Interval::new(start, value))),
        }
    }
}

/// Parse the complete output of one analyzer run.
pub fn parse_stream(output: &[u8]) -> StreamParse {
    let mut parse = StreamParse::default();
    let mut machine = FreezeMachine::new();

    for (index, raw) in output.split(|&b| b == b'\n').enumerate() {
        let line = raw.strip_suffix(b"\r").unwrap_or(raw);
        let line_number = index + 1;

        if let Some(rest) = line.strip_prefix(DURATION_PREFIX) {
            if parse.duration.is_some() {
                continue;
            }
            let token = rest
                .split(|b| b.is_ascii_whitespace())
                .find(|token| !token.is_empty())
                .unwrap_or_default();
            match parse_duration(token) {
                Ok(duration) => parse.duration = Some(duration),
                Err(error) => parse.diagnostics.push(Diagnostic::Parse {
                    line: line_number,
                    error,
                }),
            }
        } else if line.starts_with(EVENT_PREFIX) {
            match machine.feed(line) {
                Ok(Some(freeze)) => parse.freezes.push(freeze),
                Ok(None) => {}
                Err(error) => {
                    parse.diagnostics.push(Diagnostic::Parse {
                        line: line_number,
                        error,
                    });
                    parse.abandoned = true;
                    break;
                }
            }
        }
    }

    if !parse.abandoned {
        if let Some(start) = machine.pending_start() {
            parse
                .diagnostics
                .push(Diagnostic::UnterminatedFreeze { start });
        }
    }

    parse
}

fn split_event(line: &[u8]) -> Option<(&[u8], &[u8])> {
    let at = line
        .windows(EVENT_SEPARATOR.len())
        .position(|window| window == EVENT_SEPARATOR)?;
    Some((&line[..at], &line[at + EVENT_SEPARATOR.len()..]))
}

fn parse_value(raw: &[u8]) -> Option<f64> {
    std::str::from_utf8(raw).ok()?.trim().parse().ok()
}

fn lossy(line: &[u8]) -> String {
    String::from_utf8_lossy(line).trim_end().to_string()
}
