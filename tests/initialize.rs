//! `initialize` with the user config and default host surfaces.
//!
//! Kept apart from `lifecycle.rs` so this binary's instance is fresh.

use regex::Regex;
use std::fs;
use tempfile::TempDir;

#[test]
fn initialize_writes_info_to_general_file_only() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("logs");

    let logger = chanlog::initialize(&dir, "App").unwrap();
    assert!(std::ptr::eq(logger, chanlog::get_instance().unwrap()));
    assert_eq!(logger.name(), "App");

    logger.info("hello").unwrap();

    let general = fs::read_to_string(dir.join("App.log")).unwrap();
    let pattern = Regex::new(r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2} \[info\] hello$").unwrap();
    let lines: Vec<&str> = general.lines().collect();
    assert_eq!(lines.len(), 1);
    assert!(pattern.is_match(lines[0]), "{:?}", lines[0]);
    assert_eq!(fs::read_to_string(dir.join("error.log")).unwrap(), "");

    chanlog::end().unwrap();
    assert!(chanlog::get_instance().unwrap().is_ended());
}
