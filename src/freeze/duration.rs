//! Parsing of the `HH:MM:SS.ss` timestamps ffmpeg prints for input duration.

use regex::bytes::Regex;
use std::sync::OnceLock;

use super::error::ParseError;

fn duration_re() -> &'static Regex {
    static DURATION_RE: OnceLock<Regex> = OnceLock::new();
    DURATION_RE.get_or_init(|| {
        Regex::new(r"^(?P<hours>\d\d):(?P<minutes>\d\d):(?P<seconds>\d\d\.\d\d)")
            .expect("duration pattern is valid")
    })
}

/// Convert a timestamp such as `00:01:29.06` into seconds.
///
/// Only the prefix has to match, so trailing text like the comma ffmpeg
/// prints after the value is accepted.
pub fn parse_duration(raw: &[u8]) -> Result<f64, ParseError> {
    let invalid = || ParseError::DurationFormat(String::from_utf8_lossy(raw).into_owned());

    let caps = duration_re().captures(raw).ok_or_else(invalid)?;
    let field = |name: &str| {
        caps.name(name)
            .and_then(|m| std::str::from_utf8(m.as_bytes()).ok())
            .ok_or_else(invalid)
    };

    let hours: u32 = field("hours")?.parse().map_err(|_| invalid())?;
    let minutes: u32 = field("minutes")?.parse().map_err(|_| invalid())?;
    let seconds: f64 = field("seconds")?.parse().map_err(|_| invalid())?;

    Ok(f64::from(hours * 3600 + minutes * 60) + seconds)
}
