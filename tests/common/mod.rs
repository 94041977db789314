//! Common test utilities for integration tests
//!
//! Provides input file fixtures shared across the integration test files.

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// The five integer values of the reference scenario
pub const INTEGER_VALUES: [&str; 5] = ["1", "2005", "1970", "2005", "2000"];

/// Create a temporary directory for test isolation
///
/// Returns a TempDir that will be cleaned up when dropped.
pub fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// The 54 value lines of a well-formed input file, in slot order
pub fn value_lines() -> Vec<String> {
    let mut lines: Vec<String> = INTEGER_VALUES.iter().map(ToString::to_string).collect();
    lines.extend((6..=54).map(|slot| format!("./data/slot_{slot:02}.csv")));
    lines
}

/// Write `contents` to `input.txt` inside a fresh temp dir
pub fn write_input(contents: &str) -> (TempDir, PathBuf) {
    let dir = temp_dir();
    let path = dir.path().join("input.txt");
    fs::write(&path, contents).expect("Failed to write input file");
    (dir, path)
}

/// A realistic input file: header, section comments, trailing notes
pub fn annotated_input(lines: &[String]) -> String {
    let mut text = String::from("# land data system input file\n\n");
    for (index, line) in lines.iter().enumerate() {
        if index == 0 || index == 5 || index == 14 {
            text.push_str("\n   # ---- section ----\n");
        }
        text.push_str(&format!("  {line}\t# slot {}\n", index + 1));
    }
    text.push_str("\n\n# end of file");
    text
}

/// Setup test logging
///
/// Initializes tracing subscriber for test output.
/// Call this at the beginning of tests that need logging.
pub fn setup_test_logging() {
    use tracing_subscriber::fmt;

    let _ = fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}
