// SPDX-FileCopyrightText: 2026 Bizhelper Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde attributes,
//! such as valid bind addresses, URL schemes, and non-zero timeouts.

use crate::diagnostic::ConfigError;
use crate::model::BizhelperConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &BizhelperConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if !LOG_LEVELS.contains(&config.log.level.as_str()) {
        errors.push(validation(format!(
            "log.level `{}` must be one of: {}",
            config.log.level,
            LOG_LEVELS.join(", ")
        )));
    }

    check_host("gateway.host", &config.gateway.host, &mut errors);
    check_host("backend.host", &config.backend.host, &mut errors);

    if config.gateway.port == 0 {
        errors.push(validation("gateway.port must not be 0"));
    }
    if config.backend.port == 0 {
        errors.push(validation("backend.port must not be 0"));
    }

    check_http_url("gateway.backend_url", &config.gateway.backend_url, &mut errors);
    check_http_url("telegram.api_base_url", &config.telegram.api_base_url, &mut errors);

    if config.gateway.request_timeout_secs == 0 {
        errors.push(validation("gateway.request_timeout_secs must be greater than 0"));
    }
    if config.telegram.timeout_secs == 0 {
        errors.push(validation("telegram.timeout_secs must be greater than 0"));
    }

    if let Some(token) = &config.telegram.bot_token
        && token.trim().is_empty()
    {
        errors.push(validation("telegram.bot_token must not be empty when set"));
    }

    // Telegram only delivers webhooks over HTTPS.
    if let Some(url) = &config.telegram.webhook_url
        && !url.starts_with("https://")
    {
        errors.push(validation(format!(
            "telegram.webhook_url `{url}` must start with https://"
        )));
    }

    if config.storage.database_path.trim().is_empty() {
        errors.push(validation("storage.database_path must not be empty"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validation(message: impl Into<String>) -> ConfigError {
    ConfigError::Validation {
        message: message.into(),
    }
}

fn check_host(key: &str, value: &str, errors: &mut Vec<ConfigError>) {
    let addr = value.trim();
    if addr.is_empty() {
        errors.push(validation(format!("{key} must not be empty")));
        return;
    }
    let is_valid_ip = addr.parse::<std::net::IpAddr>().is_ok();
    let is_valid_hostname = addr
        .chars()
        .all(|c| c.is_alphanumeric() || c == '.' || c == '-' || c == ':');
    if !is_valid_ip && !is_valid_hostname {
        errors.push(validation(format!(
            "{key} `{addr}` is not a valid IP address or hostname"
        )));
    }
}

fn check_http_url(key: &str, value: &str, errors: &mut Vec<ConfigError>) {
    if !(value.starts_with("http://") || value.starts_with("https://")) {
        errors.push(validation(format!(
            "{key} `{value}` must start with http:// or https://"
        )));
    }
}
