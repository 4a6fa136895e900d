//! Panics after initialization are recorded in `error.log` only.

use chanlog::config::Config;
use chanlog::{Logger, MemoryChannel};
use std::fs;
use std::thread;
use tempfile::TempDir;

#[test]
fn panic_lands_in_error_log() {
    let tmp = TempDir::new().unwrap();
    let mut config = Config::default();
    config.general.environment = "production".to_string();

    let logger = chanlog::initialize_with(
        Logger::builder(tmp.path(), "App")
            .channel(MemoryChannel::new("App"))
            .config(config),
    )
    .unwrap();

    let outcome = thread::spawn(|| panic!("worker exploded")).join();
    assert!(outcome.is_err());

    let errors = fs::read_to_string(logger.error_log_path()).unwrap();
    let first = errors.lines().next().unwrap();
    assert!(first.contains("[error] panicked at "), "{first}");
    assert!(first.ends_with("worker exploded"), "{first}");
    assert_eq!(fs::read_to_string(logger.log_path()).unwrap(), "");

    chanlog::end().unwrap();
    let after = thread::spawn(|| panic!("after end")).join();
    assert!(after.is_err());
    assert_eq!(fs::read_to_string(logger.error_log_path()).unwrap(), errors);
}
