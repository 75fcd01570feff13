use gbdx_client::application::config::{Config, Mode};
use gbdx_client::utils::config::get_env_or_default;
use std::env;

#[test]
fn test_get_env_or_default_with_existing_var() {
    unsafe {
        env::set_var("GBDX_TEST_VAR_STRING", "test_value");
        let result: String = get_env_or_default("GBDX_TEST_VAR_STRING", "default".to_string());
        assert_eq!(result, "test_value");
        env::remove_var("GBDX_TEST_VAR_STRING");
    }
}

#[test]
fn test_get_env_or_default_with_missing_var() {
    unsafe {
        env::remove_var("GBDX_MISSING_VAR");
        let result: String = get_env_or_default("GBDX_MISSING_VAR", "default".to_string());
        assert_eq!(result, "default");
    }
}

#[test]
fn test_get_env_or_default_with_invalid_parse() {
    unsafe {
        env::set_var("GBDX_TEST_VAR_INVALID", "not_a_number");
        let result: u64 = get_env_or_default("GBDX_TEST_VAR_INVALID", 99);
        assert_eq!(result, 99);
        env::remove_var("GBDX_TEST_VAR_INVALID");
    }
}

#[test]
fn test_get_env_or_default_with_mode() {
    unsafe {
        env::set_var("GBDX_TEST_VAR_MODE", "development");
        let result: Mode = get_env_or_default("GBDX_TEST_VAR_MODE", Mode::Production);
        assert_eq!(result, Mode::Development);
        env::remove_var("GBDX_TEST_VAR_MODE");
    }
}

#[test]
fn test_explicit_config_defaults() {
    let config = Config::with_root_url("http://127.0.0.1:1234");
    assert_eq!(config.api.root_url, "http://127.0.0.1:1234");
    assert_eq!(config.api.timeout, 0);
    assert_eq!(config.mode, Mode::Production);
    assert!(!config.log_traffic);
    assert!(!config.should_log_traffic());
}

#[test]
fn test_config_builder_methods() {
    let config = Config::with_root_url("http://localhost")
        .mode(Mode::Development)
        .log_traffic(true)
        .timeout(15);
    assert_eq!(config.api.timeout, 15);
    assert!(config.should_log_traffic());
}

#[test]
fn test_config_serialization() {
    let config = Config::with_root_url("https://geobigdata.io").mode(Mode::Development);
    let json = serde_json::to_value(&config).unwrap();
    assert_eq!(json["mode"], "development");
    assert_eq!(json["api"]["root_url"], "https://geobigdata.io");

    let back: Config = serde_json::from_value(json).unwrap();
    assert_eq!(back.mode, Mode::Development);
}
