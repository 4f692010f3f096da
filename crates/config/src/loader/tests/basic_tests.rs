//! Basic loader tests for the configuration loader builder.
//!
//! Responsibilities:
//! - Test defaults applied when nothing is configured.
//! - Test builder overrides and validation errors.

use std::path::PathBuf;
use std::time::Duration;

use crate::loader::builder::ConfigLoader;
use crate::loader::error::ConfigError;

#[test]
fn test_loader_defaults_to_local_api() {
    let config = ConfigLoader::new().with_ephemeral_cookies().build().unwrap();

    assert_eq!(config.connection.base_url, "https://localhost:4567");
    assert_eq!(config.connection.timeout, Duration::from_secs(30));
    assert_eq!(config.pages.app_page, "/natter.html");
    assert_eq!(config.pages.login_page, "/login.html");
    assert!(config.cookie_jar.is_none());
}

#[test]
fn test_loader_builder_overrides() {
    let config = ConfigLoader::new()
        .with_base_url("https://natter.example.com:8443/".to_string())
        .with_skip_verify(true)
        .with_timeout(Duration::from_secs(5))
        .with_app_page("/app.html".to_string())
        .with_login_page("/signin.html".to_string())
        .with_cookie_jar(PathBuf::from("/tmp/natter-cookies.json"))
        .build()
        .unwrap();

    assert_eq!(config.connection.base_url, "https://natter.example.com:8443");
    assert!(config.connection.skip_verify);
    assert_eq!(config.connection.timeout, Duration::from_secs(5));
    assert_eq!(config.pages.app_page, "/app.html");
    assert_eq!(config.pages.login_page, "/signin.html");
    assert_eq!(
        config.cookie_jar,
        Some(PathBuf::from("/tmp/natter-cookies.json"))
    );
}

#[test]
fn test_loader_blank_base_url() {
    let result = ConfigLoader::new()
        .with_base_url("  ".to_string())
        .with_ephemeral_cookies()
        .build();
    assert!(matches!(result, Err(ConfigError::MissingBaseUrl)));
}

#[test]
fn test_loader_zero_timeout_rejected() {
    let result = ConfigLoader::new()
        .with_timeout(Duration::from_secs(0))
        .with_ephemeral_cookies()
        .build();
    assert!(matches!(result, Err(ConfigError::InvalidTimeout { .. })));
}

#[test]
fn test_ephemeral_cookies_override_explicit_jar() {
    let config = ConfigLoader::new()
        .with_cookie_jar(PathBuf::from("/tmp/ignored.json"))
        .with_ephemeral_cookies()
        .build()
        .unwrap();
    assert!(config.cookie_jar.is_none());
}

#[test]
fn test_default_cookie_jar_used_when_unset() {
    let config = ConfigLoader::new().build().unwrap();
    let jar = config.cookie_jar.expect("default jar path");
    assert!(jar.ends_with("cookies.json"));
}
