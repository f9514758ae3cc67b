use mailguard_domain::config::{CliOverrides, Config};

#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.server.web_port, 8080);
    assert_eq!(config.server.bind_address, "0.0.0.0");
    assert!(config.server.region.is_none());

    assert_eq!(config.detection.blocklist_path, "blocklist.txt");
    assert_eq!(config.detection.soft_threshold, 0.4);
    assert_eq!(config.detection.disposable_threshold, 0.8);
    assert_eq!(config.detection.mx_timeout_ms, 1_500);
    assert_eq!(config.detection.mx_cache_ttl_seconds, 86_400);
    assert_eq!(config.detection.result_ttl_seconds, 86_400);
    assert_eq!(config.detection.version, "v1");
    assert_eq!(config.detection.blocklist_refresh_seconds, 86_400);

    assert!(config.cache.redis_url.is_none());
    assert!(config.auth.api_keys.is_empty());
    assert!(config.auth.open_access());

    assert_eq!(config.limits.rate_limit_per_second, 10);
    assert_eq!(config.limits.max_bulk_batch, 100);

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.format, "text");
}

#[test]
fn test_config_deserializes_partial_toml() {
    let toml_str = r#"
        [server]
        web_port = 9090
        region = "eu-west"

        [detection]
        soft_threshold = 0.3

        [auth]
        api_keys = ["k1", "k2"]
    "#;

    let config: Config = toml::from_str(toml_str).unwrap();

    assert_eq!(config.server.web_port, 9090);
    assert_eq!(config.server.region.as_deref(), Some("eu-west"));
    assert_eq!(config.detection.soft_threshold, 0.3);
    // Untouched sections fall back to defaults.
    assert_eq!(config.detection.disposable_threshold, 0.8);
    assert_eq!(config.auth.api_keys, vec!["k1", "k2"]);
    assert!(!config.auth.open_access());
    assert_eq!(config.limits.max_bulk_batch, 100);
}

#[test]
fn test_config_deserialization_ignores_unknown_fields() {
    let toml_str = r#"
        [detection]
        legacy_flag = true
        soft_threshold = 0.5
    "#;

    let config: Result<Config, _> = toml::from_str(toml_str);
    assert!(
        config.is_ok(),
        "Old config with removed fields should still deserialize: {:?}",
        config.err()
    );
}

#[test]
fn test_validate_accepts_defaults() {
    assert!(Config::default().validate().is_ok());
}

#[test]
fn test_validate_rejects_zero_port() {
    let mut config = Config::default();
    config.server.web_port = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_rejects_threshold_out_of_range() {
    let mut config = Config::default();
    config.detection.disposable_threshold = 1.2;
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_rejects_inverted_thresholds() {
    let mut config = Config::default();
    config.detection.soft_threshold = 0.9;
    config.detection.disposable_threshold = 0.5;
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_rejects_zero_batch_limit() {
    let mut config = Config::default();
    config.limits.max_bulk_batch = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_cli_overrides_take_precedence() {
    let overrides = CliOverrides {
        web_port: Some(3000),
        bind_address: Some("127.0.0.1".to_string()),
        blocklist_path: Some("/tmp/list.txt".to_string()),
        log_level: Some("debug".to_string()),
    };

    let config = Config::load(None, overrides).unwrap();

    assert_eq!(config.server.web_port, 3000);
    assert_eq!(config.server.bind_address, "127.0.0.1");
    assert_eq!(config.detection.blocklist_path, "/tmp/list.txt");
    assert_eq!(config.logging.level, "debug");
}
