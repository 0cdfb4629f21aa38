// SPDX-FileCopyrightText: 2026 Bizhelper Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the Bizhelper configuration system.

use std::io::Write;

use bizhelper_config::diagnostic::ConfigError;
use bizhelper_config::model::{BizhelperConfig, RouteStrategy};
use bizhelper_config::{load_and_validate_path, load_and_validate_str, load_config_from_str};

/// Valid TOML with all known fields deserializes successfully.
#[test]
fn valid_toml_deserializes_into_bizhelper_config() {
    let toml = r#"
[log]
level = "debug"

[gateway]
host = "127.0.0.1"
port = 9000
backend_url = "http://backend:50051"
request_timeout_secs = 5

[backend]
host = "127.0.0.1"
port = 50052
route_strategy = "first_match"

[telegram]
bot_token = "123:ABC"
webhook_url = "https://bot.example.com/webhook"
api_base_url = "http://localhost:8081"
timeout_secs = 3

[storage]
database_path = "/tmp/test.db"
wal_mode = false
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.log.level, "debug");
    assert_eq!(config.gateway.host, "127.0.0.1");
    assert_eq!(config.gateway.port, 9000);
    assert_eq!(config.gateway.backend_url, "http://backend:50051");
    assert_eq!(config.gateway.request_timeout_secs, 5);
    assert_eq!(config.backend.port, 50052);
    assert_eq!(config.backend.route_strategy, RouteStrategy::FirstMatch);
    assert_eq!(config.telegram.bot_token.as_deref(), Some("123:ABC"));
    assert_eq!(
        config.telegram.webhook_url.as_deref(),
        Some("https://bot.example.com/webhook")
    );
    assert_eq!(config.telegram.api_base_url, "http://localhost:8081");
    assert_eq!(config.telegram.timeout_secs, 3);
    assert_eq!(config.storage.database_path, "/tmp/test.db");
    assert!(!config.storage.wal_mode);
}

/// Missing optional sections use defaults without error.
#[test]
fn missing_optional_sections_use_defaults() {
    let config = load_config_from_str("").expect("empty TOML should use defaults");

    assert_eq!(config.log.level, "info");
    assert_eq!(config.gateway.host, "0.0.0.0");
    assert_eq!(config.gateway.port, 8080);
    assert_eq!(config.gateway.backend_url, "http://127.0.0.1:50051");
    assert_eq!(config.gateway.request_timeout_secs, 30);
    assert_eq!(config.backend.port, 50051);
    assert_eq!(config.backend.route_strategy, RouteStrategy::FanOut);
    assert!(config.telegram.bot_token.is_none());
    assert!(config.telegram.webhook_url.is_none());
    assert_eq!(config.telegram.api_base_url, "https://api.telegram.org");
    assert_eq!(config.telegram.timeout_secs, 10);
    assert!(config.storage.wal_mode);
}

#[test]
fn unknown_field_in_gateway_produces_error() {
    let err = load_config_from_str("[gateway]\nprot = 8080\n")
        .expect_err("should reject unknown field");
    let err_str = format!("{err}");
    assert!(
        err_str.contains("unknown field") || err_str.contains("prot"),
        "error should mention unknown field, got: {err_str}"
    );
}

#[test]
fn unknown_key_diagnostic_suggests_correction() {
    let errors = load_and_validate_str("[telegram]\nbot_tken = \"abc\"\n")
        .expect_err("should reject unknown field");
    match &errors[0] {
        ConfigError::UnknownKey {
            key, suggestion, ..
        } => {
            assert_eq!(key, "bot_tken");
            assert_eq!(suggestion.as_deref(), Some("bot_token"));
        }
        other => panic!("expected UnknownKey, got {other:?}"),
    }
}

#[test]
fn unknown_route_strategy_is_rejected() {
    let result = load_config_from_str("[backend]\nroute_strategy = \"round_robin\"\n");
    assert!(result.is_err());
}

#[test]
fn wrong_type_produces_invalid_type() {
    let errors = load_and_validate_str("[gateway]\nport = \"eighty\"\n")
        .expect_err("string port must be rejected");
    assert!(matches!(
        &errors[0],
        ConfigError::InvalidType { key, .. } if key == "gateway.port"
    ));
}

/// Environment overrides are merged with dotted keys.
#[test]
fn dotted_override_sets_bot_token() {
    use figment::{providers::Serialized, Figment};

    let config: BizhelperConfig = Figment::new()
        .merge(Serialized::defaults(BizhelperConfig::default()))
        .merge(("telegram.bot_token", "xyz-from-env"))
        .merge(("backend.route_strategy", "first_match"))
        .extract()
        .expect("should set values via dot notation");

    assert_eq!(config.telegram.bot_token.as_deref(), Some("xyz-from-env"));
    assert_eq!(config.backend.route_strategy, RouteStrategy::FirstMatch);
}

#[test]
fn validation_errors_surface_through_load() {
    let errors = load_and_validate_str("[telegram]\nwebhook_url = \"http://insecure\"\n")
        .expect_err("http webhook must fail validation");
    assert!(matches!(errors[0], ConfigError::Validation { .. }));
}

#[test]
fn explicit_path_is_loaded_and_validated() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "[gateway]\nport = 8443").expect("write config");

    let config = load_and_validate_path(file.path()).expect("valid file config");
    assert_eq!(config.gateway.port, 8443);
}

#[test]
fn missing_config_file_uses_defaults() {
    let config = load_and_validate_path(std::path::Path::new("/nonexistent/bizhelper.toml"))
        .expect("missing file should be silently skipped");
    assert_eq!(config.gateway.port, 8080);
}

#[test]
fn env_vars_override_local_file() {
    figment::Jail::expect_with(|jail| {
        jail.create_file("bizhelper.toml", "[gateway]\nport = 9000\n")?;
        jail.set_env("BIZHELPER_TELEGRAM_BOT_TOKEN", "123:from-env");
        jail.set_env("BIZHELPER_GATEWAY_REQUEST_TIMEOUT_SECS", "5");

        let config = bizhelper_config::load_config()?;
        assert_eq!(config.gateway.port, 9000);
        assert_eq!(config.gateway.request_timeout_secs, 5);
        assert_eq!(config.telegram.bot_token.as_deref(), Some("123:from-env"));
        Ok(())
    });
}
