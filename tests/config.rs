use chanlog::Config;
use chanlog::Error;
use chanlog::Level;
use std::fs;
use tempfile::TempDir;

#[test]
fn missing_file_yields_defaults() {
    let tmp = TempDir::new().unwrap();
    let config = Config::load_from(&tmp.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
    assert!(!config.is_production());
    assert!(config.echo_to_console());
}

#[test]
fn partial_file_keeps_other_defaults() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("chanlog.toml");
    fs::write(
        &path,
        r#"
[general]
environment = "Production"

[console]
colors = false
"#,
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert!(config.is_production());
    assert!(!config.echo_to_console());
    assert!(config.console.enabled);
    assert!(!config.console.colors);
    assert_eq!(config.parse_internal_level(), Level::Warn);
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("broken.toml");
    fs::write(&path, "[general\nenvironment = ").unwrap();

    assert!(matches!(Config::load_from(&path), Err(Error::ConfigParse(_))));
}

#[test]
fn env_override_sets_environment() {
    let config = Config::default().with_env_from(|key| {
        (key == chanlog::config::ENV_VAR).then(|| " production ".to_string())
    });
    assert!(config.is_production());
}

#[test]
fn blank_env_override_is_ignored() {
    let config = Config::default().with_env_from(|_| Some(String::new()));
    assert_eq!(config.general.environment, "development");
}

#[test]
fn unknown_internal_level_falls_back_to_warn() {
    let mut config = Config::default();
    config.general.internal_level = "loud".to_string();
    assert_eq!(config.parse_internal_level(), Level::Warn);
    config.general.internal_level = "debug".to_string();
    assert_eq!(config.parse_internal_level(), Level::Debug);
}
