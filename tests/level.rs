//! Tests for log level functionality.

use chanlog::Level;

#[test]
fn level_ordering() {
    assert!(Level::Debug < Level::Info);
    assert!(Level::Info < Level::Warn);
    assert!(Level::Warn < Level::Error);
}

#[test]
fn level_display() {
    assert_eq!(Level::Debug.to_string(), "debug");
    assert_eq!(Level::Info.to_string(), "info");
    assert_eq!(Level::Warn.to_string(), "warn");
    assert_eq!(Level::Error.to_string(), "error");
}

#[test]
fn level_from_str() {
    assert_eq!("DEBUG".parse::<Level>().unwrap(), Level::Debug);
    assert_eq!("Info".parse::<Level>().unwrap(), Level::Info);
    assert_eq!("warning".parse::<Level>().unwrap(), Level::Warn);
    assert_eq!("err".parse::<Level>().unwrap(), Level::Error);
}

#[test]
fn level_from_str_invalid() {
    assert!("trace".parse::<Level>().is_err());
    assert!("invalid".parse::<Level>().is_err());
}

#[test]
fn only_debug_is_hidden_from_users() {
    let visible: Vec<Level> = Level::all()
        .into_iter()
        .filter(|l| l.is_user_visible())
        .collect();
    assert_eq!(visible, vec![Level::Info, Level::Warn, Level::Error]);
}

#[test]
fn level_default() {
    assert_eq!(Level::default(), Level::Info);
}
