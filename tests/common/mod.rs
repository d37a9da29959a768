//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

// Re-export canonical test utilities from repmeasure::testing
pub use repmeasure::testing::{arrays, fibonacci_word, random_text, strip_zeros, text, unary};

/// Tolerance for comparing the two floating-point fields.
pub const EPSILON: f64 = 1e-9;

/// Write `contents` to a fresh file; returns the TempDir (to keep it alive)
/// and the path.
pub fn write_input(name: &str, contents: &[u8]) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("Failed to write input file");
    (dir, path)
}

/// Run the built `repmeasure` binary with `args`.
pub fn run_cli<I, S>(args: I) -> Output
where
    I: IntoIterator<Item = S>,
    S: AsRef<std::ffi::OsStr>,
{
    Command::new(env!("CARGO_BIN_EXE_repmeasure"))
        .args(args)
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to run repmeasure")
}

/// Parse `key=value` pairs out of a RESULT line.
pub fn result_field<'a>(line: &'a str, key: &str) -> Option<&'a str> {
    line.strip_prefix("RESULT ")?
        .split(' ')
        .filter_map(|kv| kv.split_once('='))
        .find(|(k, _)| *k == key)
        .map(|(_, v)| v)
}

/// The single RESULT line of a successful run.
pub fn result_line(output: &Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 1, "expected one stdout line, got {:?}", lines);
    lines[0].to_string()
}

/// Path as a string argument.
pub fn arg(path: &Path) -> String {
    path.display().to_string()
}
