//! Configuration loading integration tests
//!
//! Verifies the precedence chain (file < environment) and validation of
//! the final configuration.

use portal_scraper::{ConfigLoader, Settings};
use std::io::Write;
use std::sync::Mutex;
use tempfile::NamedTempFile;

// Environment variables are process-global; serialize the tests that touch them
static ENV_TEST_MUTEX: Mutex<()> = Mutex::new(());

#[test]
fn test_defaults_match_the_documented_contract() {
    let settings = Settings::default();

    assert_eq!(settings.server.port, 3000);
    assert_eq!(settings.server.host, "::");
    assert_eq!(
        settings.portal.base_url,
        "https://user.orangecommunication.org"
    );
    assert_eq!(settings.portal.login_page_path, "/customer/");
    assert_eq!(settings.portal.login_action_path, "/customer/login");
    assert_eq!(settings.portal.usage_log_path, "/customer/syslog");
    assert_eq!(settings.portal.dashboard_suffix, "/dashboard");
    assert_eq!(settings.logging.level, "info");
}

#[test]
fn test_full_config_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(
        temp_file,
        r#"
[server]
host = "0.0.0.0"
port = 8080
timeout = 15

[portal]
base_url = "https://portal.test"
dashboard_suffix = "/home"

[network]
connect_timeout = 5
request_timeout = 20
user_agent = "Mozilla/5.0 (X11; Linux x86_64)"

[logging]
level = "debug"
    "#
    )
    .unwrap();

    let loader = ConfigLoader::new();
    let settings = loader.load(Some(temp_file.path())).unwrap();

    assert_eq!(settings.server.host, "0.0.0.0");
    assert_eq!(settings.server.port, 8080);
    assert_eq!(settings.server.timeout.as_secs(), 15);
    assert_eq!(settings.portal.base_url, "https://portal.test");
    assert_eq!(settings.portal.dashboard_suffix, "/home");
    assert_eq!(settings.network.connect_timeout, 5);
    assert_eq!(settings.network.user_agent, "Mozilla/5.0 (X11; Linux x86_64)");
    assert_eq!(settings.logging.level, "debug");
}

#[test]
fn test_partial_config_file_keeps_defaults() {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(
        temp_file,
        r#"
[portal]
base_url = "https://portal.test"
    "#
    )
    .unwrap();

    let loader = ConfigLoader::new();
    let settings = loader.load(Some(temp_file.path())).unwrap();

    assert_eq!(settings.portal.base_url, "https://portal.test");
    // Untouched sections keep their defaults
    assert_eq!(settings.server.port, 3000);
    assert_eq!(settings.portal.usage_log_path, "/customer/syslog");
}

#[test]
fn test_env_overrides_config_file() {
    let _lock = ENV_TEST_MUTEX.lock().unwrap();

    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(
        temp_file,
        r#"
[server]
port = 8080
    "#
    )
    .unwrap();

    unsafe {
        std::env::set_var("PORTAL_SERVER_PORT", "9000");
    }

    let loader = ConfigLoader::new();
    let settings = loader.load(Some(temp_file.path())).unwrap();

    assert_eq!(settings.server.port, 9000);

    unsafe {
        std::env::remove_var("PORTAL_SERVER_PORT");
    }
}

#[test]
fn test_invalid_toml_is_an_error() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"invalid toml content [[[").unwrap();
    temp_file.flush().unwrap();

    let loader = ConfigLoader::new();
    assert!(loader.load(Some(temp_file.path())).is_err());
}

#[test]
fn test_invalid_base_url_is_rejected() {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(
        temp_file,
        r#"
[portal]
base_url = "not a url"
    "#
    )
    .unwrap();

    let loader = ConfigLoader::new();
    assert!(loader.load(Some(temp_file.path())).is_err());
}

#[test]
fn test_invalid_log_level_is_rejected() {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(
        temp_file,
        r#"
[logging]
level = "shouting"
    "#
    )
    .unwrap();

    let loader = ConfigLoader::new();
    assert!(loader.load(Some(temp_file.path())).is_err());
}
