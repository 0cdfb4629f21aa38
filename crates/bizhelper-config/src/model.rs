// SPDX-FileCopyrightText: 2026 Bizhelper Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Bizhelper relay.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level Bizhelper configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable overrides.
/// All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct BizhelperConfig {
    /// Logging settings.
    #[serde(default)]
    pub log: LogConfig,

    /// Webhook gateway settings.
    #[serde(default)]
    pub gateway: GatewayConfig,

    /// Backend service settings.
    #[serde(default)]
    pub backend: BackendConfig,

    /// Telegram Bot API settings.
    #[serde(default)]
    pub telegram: TelegramConfig,

    /// Storage backend settings.
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Webhook gateway configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    /// Address the webhook listener binds to.
    #[serde(default = "default_bind_host")]
    pub host: String,

    #[serde(default = "default_gateway_port")]
    pub port: u16,

    /// Base URL of the backend RPC endpoint.
    #[serde(default = "default_backend_url")]
    pub backend_url: String,

    /// Deadline for one backend round trip, in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: default_bind_host(),
            port: default_gateway_port(),
            backend_url: default_backend_url(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

fn default_bind_host() -> String {
    "0.0.0.0".to_string()
}

fn default_gateway_port() -> u16 {
    8080
}

fn default_backend_url() -> String {
    "http://127.0.0.1:50051".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

/// How the backend dispatches an update that carries both a message and a callback.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteStrategy {
    /// Run every populated branch and merge the results.
    #[default]
    FanOut,
    /// Run only the first populated branch, message before callback.
    FirstMatch,
}

/// Backend service configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct BackendConfig {
    #[serde(default = "default_bind_host")]
    pub host: String,

    #[serde(default = "default_backend_port")]
    pub port: u16,

    #[serde(default)]
    pub route_strategy: RouteStrategy,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            host: default_bind_host(),
            port: default_backend_port(),
            route_strategy: RouteStrategy::default(),
        }
    }
}

fn default_backend_port() -> u16 {
    50051
}

/// Telegram Bot API configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TelegramConfig {
    /// Telegram Bot API token. Required by the gateway.
    #[serde(default)]
    pub bot_token: Option<String>,

    /// Public HTTPS URL registered with Telegram on gateway start.
    #[serde(default)]
    pub webhook_url: Option<String>,

    /// Bot API base URL; overridden in tests.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Per-call HTTP timeout, in seconds.
    #[serde(default = "default_telegram_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            bot_token: None,
            webhook_url: None,
            api_base_url: default_api_base_url(),
            timeout_secs: default_telegram_timeout_secs(),
        }
    }
}

fn default_api_base_url() -> String {
    "https://api.telegram.org".to_string()
}

fn default_telegram_timeout_secs() -> u64 {
    10
}

/// Storage backend configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Path to the SQLite database file.
    #[serde(default = "default_database_path")]
    pub database_path: String,

    /// Enable WAL (Write-Ahead Logging) mode for SQLite.
    #[serde(default = "default_wal_mode")]
    pub wal_mode: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            wal_mode: default_wal_mode(),
        }
    }
}

fn default_database_path() -> String {
    dirs::data_dir()
        .map(|p| p.join("bizhelper").join("bizhelper.db"))
        .unwrap_or_else(|| std::path::PathBuf::from("bizhelper.db"))
        .to_string_lossy()
        .into_owned()
}

fn default_wal_mode() -> bool {
    true
}
