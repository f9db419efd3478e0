// tests/config_test.rs
use git_pin::config::{load_config, Config, INPUT_UPDATE_MAJOR, INPUT_UPDATE_MINOR};
use serial_test::serial;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
[aliases]
update_major = true
update_minor = false

[remote]
name = "upstream"

[identity]
name = "release-bot"
email = "release-bot@example.com"
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert!(config.aliases.update_major);
    assert!(!config.aliases.update_minor);
    assert_eq!(config.remote.name, "upstream");
    assert_eq!(config.identity.name, "release-bot");
    assert_eq!(config.identity.email, "release-bot@example.com");
}

#[test]
fn test_empty_file_gives_defaults() {
    let temp_file = NamedTempFile::new().unwrap();
    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let err = load_config(Some("/nonexistent/dir/gitpin.toml")).unwrap_err();
    assert!(err.to_string().contains("I/O error"));
}

#[test]
fn test_malformed_file_is_a_config_error() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"[aliases\nupdate_major = true").unwrap();
    temp_file.flush().unwrap();

    let err = load_config(Some(temp_file.path().to_str().unwrap())).unwrap_err();
    assert!(err.to_string().starts_with("Configuration error"));
}

fn clear_inputs() {
    std::env::remove_var(INPUT_UPDATE_MAJOR);
    std::env::remove_var(INPUT_UPDATE_MINOR);
}

#[test]
#[serial]
fn test_env_inputs_default_to_enabled() {
    clear_inputs();
    let mut config = Config::default();
    config.apply_env_inputs();
    assert!(config.aliases.update_major);
    assert!(config.aliases.update_minor);
}

#[test]
#[serial]
fn test_env_inputs_only_literal_true_enables() {
    clear_inputs();
    std::env::set_var(INPUT_UPDATE_MAJOR, "True");
    std::env::set_var(INPUT_UPDATE_MINOR, "true");

    let mut config = Config::default();
    config.apply_env_inputs();
    clear_inputs();

    assert!(!config.aliases.update_major);
    assert!(config.aliases.update_minor);
}

#[test]
#[serial]
fn test_empty_env_input_keeps_configured_value() {
    clear_inputs();
    std::env::set_var(INPUT_UPDATE_MINOR, "");

    let mut config = Config::default();
    config.aliases.update_minor = false;
    config.apply_env_inputs();
    clear_inputs();

    assert!(!config.aliases.update_minor);
}
