// SPDX-FileCopyrightText: 2026 Bizhelper Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service wiring for the `gateway`, `backend` and `set-webhook` commands.

use std::sync::Arc;
use std::time::Duration;

use bizhelper_backend::{start_rpc_server, BackendService};
use bizhelper_config::BizhelperConfig;
use bizhelper_core::{BizError, DeliveryChannel};
use bizhelper_gateway::{start_server, GatewayState, RpcBackendLink};
use bizhelper_storage::SqliteRepository;
use bizhelper_telegram::TelegramChannel;
use tracing::{info, warn};

use crate::shutdown;

pub fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("bizhelper={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .init();
}

/// Runs the backend RPC service until a shutdown signal arrives.
pub async fn run_backend(config: BizhelperConfig) -> Result<(), BizError> {
    let repo = Arc::new(SqliteRepository::open(&config.storage).await?);
    info!(path = %config.storage.database_path, "storage opened");

    let backend = BackendService::new(repo.clone(), config.backend.route_strategy);
    let served =
        start_rpc_server(&config.backend, Arc::new(backend), shutdown::install_signal_handler())
            .await;

    if let Err(e) = repo.close().await {
        warn!(error = %e, "failed to close storage cleanly");
    }
    served
}

/// Runs the webhook gateway until a shutdown signal arrives.
pub async fn run_gateway(config: BizhelperConfig) -> Result<(), BizError> {
    let channel = TelegramChannel::new(&config.telegram)?;
    let link = RpcBackendLink::new(
        config.gateway.backend_url.as_str(),
        Duration::from_secs(config.gateway.request_timeout_secs),
    )?;
    info!(backend = %config.gateway.backend_url, "backend link configured");

    let state = GatewayState::new(Arc::new(link), Arc::new(channel), &config.gateway);
    start_server(
        &config.gateway,
        state,
        config.telegram.webhook_url.as_deref(),
        shutdown::install_signal_handler(),
    )
    .await
}

/// Registers the webhook with Telegram.
pub async fn run_set_webhook(config: BizhelperConfig, url: Option<String>) -> Result<(), BizError> {
    let url = url.or(config.telegram.webhook_url.clone()).ok_or_else(|| {
        BizError::Config("no webhook URL given and telegram.webhook_url is not set".into())
    })?;
    TelegramChannel::new(&config.telegram)?
        .set_webhook(&url)
        .await?;
    println!("webhook set to {url}");
    Ok(())
}
