//! Settings: defaults and environment override precedence.

use std::path::PathBuf;

use rsedr::config::Settings;

#[test]
fn given_defaults_then_env_override_when_loading_then_precedence_applies() {
    let defaults = Settings::load().unwrap();
    assert_eq!(defaults.log_file, PathBuf::from("rsedr.log"));

    std::env::set_var("RSEDR_LOG_FILE", "/tmp/override.log");
    let overridden = Settings::load().unwrap();
    std::env::remove_var("RSEDR_LOG_FILE");

    assert_eq!(overridden.log_file, PathBuf::from("/tmp/override.log"));
}

#[test]
fn given_no_sources_when_defaulting_then_log_file_is_local() {
    assert_eq!(Settings::default().log_file, PathBuf::from("rsedr.log"));
}
