use phone_blocklist_domain::{CliOverrides, Config, ConfigError};
use std::io::Write;

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.server.web_port, 8080);
    assert_eq!(config.server.bind_address, "0.0.0.0");
    assert_eq!(config.server.static_dir.as_deref(), Some("./static"));
    assert_eq!(config.database.path, "./phone-blocklist.db");
    assert_eq!(config.database.max_connections, 5);
    assert_eq!(config.logging.level, "info");
    assert!(!config.logging.json);
    assert!(config.validate().is_ok());
}

#[test]
fn test_partial_toml_keeps_defaults() {
    let config = Config::from_toml(
        r#"
        [server]
        web_port = 9090

        [database]
        path = "/var/lib/phone-blocklist/blocklist.db"
        "#,
    )
    .unwrap();

    assert_eq!(config.server.web_port, 9090);
    assert_eq!(config.server.bind_address, "0.0.0.0");
    assert_eq!(config.server.static_dir.as_deref(), Some("./static"));
    assert_eq!(config.database.path, "/var/lib/phone-blocklist/blocklist.db");
    assert_eq!(config.database.busy_timeout_secs, 5);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_invalid_toml() {
    let result = Config::from_toml("[server\nweb_port = ");
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_cli_overrides_win() {
    let mut config = Config::default();
    config.apply_cli_overrides(CliOverrides {
        web_port: Some(3000),
        bind_address: Some("127.0.0.1".to_string()),
        static_dir: Some("./web".to_string()),
        database_path: Some("test.db".to_string()),
        log_level: Some("debug".to_string()),
    });

    assert_eq!(config.server.web_port, 3000);
    assert_eq!(config.server.bind_address, "127.0.0.1");
    assert_eq!(config.server.static_dir.as_deref(), Some("./web"));
    assert_eq!(config.database.path, "test.db");
    assert_eq!(config.database_url(), "sqlite:test.db");
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn test_validate_rejects_zero_port() {
    let mut config = Config::default();
    config.server.web_port = 0;
    assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
}

#[test]
fn test_validate_rejects_empty_database_path() {
    let mut config = Config::default();
    config.database.path = " ".to_string();
    assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
}

#[test]
fn test_validate_rejects_zero_connections() {
    let mut config = Config::default();
    config.database.max_connections = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_load_explicit_path() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[server]\nweb_port = 8181\n\n[logging]\nlevel = \"warn\"").unwrap();
    let path = file.path().to_str().unwrap().to_string();

    let config = Config::load(
        Some(&path),
        CliOverrides {
            log_level: Some("trace".to_string()),
            ..Default::default()
        },
    )
    .unwrap();

    assert_eq!(config.server.web_port, 8181);
    assert_eq!(config.logging.level, "trace");
}

#[test]
fn test_load_missing_file() {
    let result = Config::load(Some("/nonexistent/phone-blocklist.toml"), CliOverrides::default());
    assert!(matches!(result, Err(ConfigError::FileRead(_, _))));
}
