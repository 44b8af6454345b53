//! Configuration loading tests

use embodi_canvas::config::{self, CanvasConfig, ENV_REQUEST_TIMEOUT_SECS, ENV_SERVICE_URL};
use embodi_canvas::error::ConfigError;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

#[test]
fn test_from_file_overrides_subset() {
    let file = write_config(r#"{"max_zoom": 4.0, "service": {"base_url": "http://10.0.0.2:8000"}}"#);
    let config = CanvasConfig::from_file(file.path()).unwrap();

    assert_eq!(config.max_zoom, 4.0);
    assert_eq!(config.min_zoom, 0.1);
    assert_eq!(config.service.base_url, "http://10.0.0.2:8000");
    assert_eq!(config.service.request_timeout_secs, 120);
}

#[test]
fn test_from_file_missing_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = CanvasConfig::from_file(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_invalid_values_rejected() {
    let file = write_config(r#"{"min_box_size": [0.0, 60.0]}"#);
    let err = CanvasConfig::from_file(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_load_or_default_reports_path() {
    let file = write_config("{ not json");
    let err = config::load_or_default(Some(file.path())).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("failed to load config from"));
}

#[test]
fn test_load_or_default_without_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = config::load_or_default(Some(dir.path().join("canvas.json").as_path())).unwrap();
    assert_eq!(config.min_box_size, (100.0, 60.0));
    assert_eq!(config.zoom_sensitivity, 0.002);
}

#[test]
fn test_default_path_shape() {
    if let Some(path) = config::default_config_path() {
        assert!(path.ends_with("embodi/canvas.json"));
    }
}

#[test]
fn test_overrides_replace_url_and_timeout() {
    let config = CanvasConfig::default().with_overrides(|key| match key {
        ENV_SERVICE_URL => Some("http://10.0.0.5:9000/".to_string()),
        ENV_REQUEST_TIMEOUT_SECS => Some("30".to_string()),
        _ => None,
    });
    assert_eq!(config.service.base_url, "http://10.0.0.5:9000");
    assert_eq!(config.service.request_timeout_secs, 30);
}

#[test]
fn test_unparsable_timeout_override_ignored() {
    let config = CanvasConfig::default().with_overrides(|key| match key {
        ENV_REQUEST_TIMEOUT_SECS => Some("soon".to_string()),
        _ => None,
    });
    assert_eq!(config.service.request_timeout_secs, 120);
    assert_eq!(config.service.base_url, "http://localhost:8000");
}

// The only test that touches the real process environment.
#[test]
fn test_env_overrides_read_process_environment() {
    // SAFETY: no other test in this binary sets or removes these variables
    unsafe {
        std::env::set_var(ENV_SERVICE_URL, "http://127.0.0.1:7000//");
        std::env::set_var(ENV_REQUEST_TIMEOUT_SECS, "not-a-number");
    }
    let config = CanvasConfig::default().with_env_overrides();
    unsafe {
        std::env::remove_var(ENV_SERVICE_URL);
        std::env::remove_var(ENV_REQUEST_TIMEOUT_SECS);
    }

    assert_eq!(config.service.base_url, "http://127.0.0.1:7000");
    assert_eq!(config.service.request_timeout_secs, 120);
}

#[test]
fn test_load_or_default_rejects_negative_click_slop() {
    let file = write_config(r#"{"click_slop": -2.0}"#);
    assert!(config::load_or_default(Some(file.path())).is_err());
}
