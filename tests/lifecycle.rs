//! Process-wide instance lifecycle.
//!
//! The instance lives for the whole test binary, so the sequence runs as one test.

use chanlog::config::Config;
use chanlog::{Error, Logger, LogRecord, MemoryChannel, MockNotifier};
use std::fs;
use std::time::Duration;
use tempfile::TempDir;

#[test]
fn initialize_log_end_sequence() {
    assert!(matches!(chanlog::get_instance(), Err(Error::NotInitialized)));
    chanlog::end().unwrap();

    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("x");
    let channel = MemoryChannel::new("App");
    let notifier = MockNotifier::selecting("Open output");
    let mut config = Config::default();
    config.general.environment = "production".to_string();

    let logger = chanlog::initialize_with(
        Logger::builder(&dir, "App")
            .channel(channel.clone())
            .notifier(notifier.clone())
            .config(config),
    )
    .unwrap();
    assert!(std::ptr::eq(logger, chanlog::get_instance().unwrap()));

    chanlog::get_instance().unwrap().info("hello").unwrap();
    chanlog::get_instance()
        .unwrap()
        .error(LogRecord::new("fatal").notify_user(true))
        .unwrap();
    assert!(logger.wait_idle(Duration::from_secs(5)));

    let general = fs::read_to_string(dir.join("App.log")).unwrap();
    assert_eq!(general.lines().count(), 2);
    assert!(channel.lines()[0].ends_with("[info] hello"));
    assert_eq!(channel.reveal_count(), 1);
    assert_eq!(fs::read_to_string(dir.join("error.log")).unwrap().lines().count(), 1);

    assert!(matches!(
        chanlog::initialize(tmp.path(), "Other"),
        Err(Error::AlreadyInitialized)
    ));

    chanlog::end().unwrap();
    chanlog::end().unwrap();

    let ended = chanlog::get_instance().unwrap();
    assert!(ended.is_ended());
    assert!(matches!(ended.info("after end"), Err(Error::LoggerEnded)));
    assert_eq!(
        fs::read_to_string(dir.join("App.log")).unwrap().lines().count(),
        2
    );
}
