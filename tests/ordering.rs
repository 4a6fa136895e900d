//! Concurrent dispatches land in the same order in every sink they share.

use chanlog::config::Config;
use chanlog::{Logger, LogRecord, MemoryChannel, MockNotifier};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tempfile::TempDir;

const THREADS: usize = 8;
const PER_THREAD: usize = 500;

fn messages<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<String> {
    lines
        .map(|line| {
            line.split_once("[error] ")
                .map(|(_, message)| message.to_string())
                .unwrap_or_else(|| panic!("not an error line: {line}"))
        })
        .collect()
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

#[test]
fn concurrent_errors_keep_one_order_across_sinks() {
    let tmp = TempDir::new().unwrap();
    let channel = MemoryChannel::new("App");
    let notifier = MockNotifier::failing("no display");
    let mut config = Config::default();
    config.general.environment = "production".to_string();
    let logger = Arc::new(
        Logger::builder(tmp.path(), "App")
            .channel(channel.clone())
            .notifier(notifier.clone())
            .config(config)
            .build()
            .unwrap(),
    );

    let workers: Vec<_> = (0..THREADS)
        .map(|t| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..PER_THREAD {
                    // Every 50th record fails to notify, so the worker's
                    // recovery records race the callers too.
                    let record = LogRecord::new(format!("t{t} n{i}")).notify_user(i % 50 == 0);
                    logger.error(record).unwrap();
                }
            })
        })
        .collect();
    for worker in workers {
        worker.join().unwrap();
    }
    assert!(logger.wait_idle(Duration::from_secs(10)));

    let recoveries = THREADS * PER_THREAD / 50;
    assert_eq!(notifier.call_count(), recoveries);

    let general_text = read(logger.log_path());
    let errors_text = read(logger.error_log_path());
    let channel_lines = channel.lines();

    let general = messages(general_text.lines());
    let errors = messages(errors_text.lines());
    let channel_messages = messages(channel_lines.iter().map(String::as_str));

    assert_eq!(general.len(), THREADS * PER_THREAD + recoveries);
    assert_eq!(errors, general);
    assert_eq!(channel_messages, general);

    let stamps: Vec<&str> = general_text.lines().map(|line| &line[..19]).collect();
    assert!(stamps.windows(2).all(|pair| pair[0] <= pair[1]));
}
