// SPDX-FileCopyrightText: 2026 Bizhelper Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./bizhelper.toml` > `~/.config/bizhelper/bizhelper.toml` >
//! `/etc/bizhelper/bizhelper.toml` with environment variable overrides via `BIZHELPER_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::BizhelperConfig;

const SYSTEM_CONFIG: &str = "/etc/bizhelper/bizhelper.toml";
const LOCAL_CONFIG: &str = "bizhelper.toml";

/// Top-level sections addressable from the environment.
const SECTIONS: &[&str] = &["log", "gateway", "backend", "telegram", "storage"];

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/bizhelper/bizhelper.toml` (system-wide)
/// 3. `~/.config/bizhelper/bizhelper.toml` (user XDG config)
/// 4. `./bizhelper.toml` (local directory)
/// 5. `BIZHELPER_*` environment variables
pub fn load_config() -> Result<BizhelperConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
pub fn load_config_from_str(toml_content: &str) -> Result<BizhelperConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(BizhelperConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<BizhelperConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(BizhelperConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used internally for config loading.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(BizhelperConfig::default()))
        .merge(Toml::file(SYSTEM_CONFIG))
        .merge(Toml::file(user_config_path()))
        .merge(Toml::file(LOCAL_CONFIG))
        .merge(env_provider())
}

pub(crate) fn user_config_path() -> std::path::PathBuf {
    dirs::config_dir()
        .map(|d| d.join("bizhelper").join(LOCAL_CONFIG))
        .unwrap_or_default()
}

pub(crate) fn system_config_path() -> &'static Path {
    Path::new(SYSTEM_CONFIG)
}

pub(crate) fn local_config_path() -> &'static Path {
    Path::new(LOCAL_CONFIG)
}

/// Create the environment variable provider using explicit `map()` for section-to-dot mapping.
///
/// Uses `Env::map()` rather than `Env::split("_")`: key names contain
/// underscores, so `BIZHELPER_TELEGRAM_BOT_TOKEN` must map to
/// `telegram.bot_token`, not `telegram.bot.token`.
fn env_provider() -> Env {
    Env::prefixed("BIZHELPER_").map(|key| map_env_key(key.as_str()).into())
}

/// Maps a lowercased, prefix-stripped env key to its dotted config path.
pub(crate) fn map_env_key(key: &str) -> String {
    for section in SECTIONS {
        if let Some(rest) = key
            .strip_prefix(section)
            .and_then(|rest| rest.strip_prefix('_'))
        {
            return format!("{section}.{rest}");
        }
    }
    key.to_string()
}
