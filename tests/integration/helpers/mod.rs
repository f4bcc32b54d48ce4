//! Shared helpers for integration tests

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

/// Directory holding the captured ffmpeg transcripts.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Path to a fixture file by name.
pub fn fixture_path(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

/// Raw bytes of a fixture file.
pub fn load_fixture_bytes(name: &str) -> Vec<u8> {
    fs::read(fixture_path(name))
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", name, e))
}

/// Write a stand-in for ffmpeg that echoes the file named by `-i` to stderr.
///
/// The source is the fourth argument: `-hide_banner -nostats -i <source> ...`.
/// A missing source makes `cat` exit non-zero, like ffmpeg would.
#[cfg(unix)]
pub fn fake_ffmpeg(dir: &Path) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("ffmpeg");
    fs::write(&path, "#!/bin/sh\ncat \"$4\" >&2\n").unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

/// Analyzer output with a ten second duration and the given freezes.
pub fn transcript(freezes: &[(&str, &str)]) -> Vec<u8> {
    let mut out = String::from("  Duration: 00:00:10.00, start: 0.000000, bitrate: 800 kb/s\n");
    for (start, end) in freezes {
        out.push_str(&format!(
            "[freezedetect @ 0x1] lavfi.freezedetect.freeze_start: {start}\n\
             [freezedetect @ 0x1] lavfi.freezedetect.freeze_duration: 0\n\
             [freezedetect @ 0x1] lavfi.freezedetect.freeze_end: {end}\n"
        ));
    }
    out.into_bytes()
}
