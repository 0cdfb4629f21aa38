// SPDX-FileCopyrightText: 2026 Bizhelper Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gateway HTTP server built on axum.
//!
//! Sets up routes, middleware, and shared state for the webhook listener.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    routing::{get, post},
    Router,
};
use bizhelper_config::GatewayConfig;
use bizhelper_core::{BackendLink, BizError, DeliveryChannel};
use tokio_util::sync::CancellationToken;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers;

/// Shared state for axum request handlers.
#[derive(Clone)]
pub struct GatewayState {
    /// Link to the backend that routes updates.
    pub backend: Arc<dyn BackendLink>,
    /// Outbound channel for the backend's replies.
    pub delivery: Arc<dyn DeliveryChannel>,
    /// Deadline for one backend round trip.
    pub request_timeout: Duration,
}

impl GatewayState {
    pub fn new(
        backend: Arc<dyn BackendLink>,
        delivery: Arc<dyn DeliveryChannel>,
        config: &GatewayConfig,
    ) -> Self {
        Self {
            backend,
            delivery,
            request_timeout: Duration::from_secs(config.request_timeout_secs),
        }
    }
}

/// Builds the gateway router without binding it.
pub fn gateway_router(state: GatewayState) -> Router {
    Router::new()
        .route("/webhook", post(handlers::post_webhook))
        .route("/health", get(handlers::get_health))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Start the webhook listener.
///
/// When `webhook_url` is given it is registered with Telegram first; a
/// failed registration is logged and the server starts anyway.
pub async fn start_server(
    config: &GatewayConfig,
    state: GatewayState,
    webhook_url: Option<&str>,
    shutdown: CancellationToken,
) -> Result<(), BizError> {
    if let Some(url) = webhook_url
        && let Err(e) = state.delivery.set_webhook(url).await
    {
        tracing::warn!(error = %e, "failed to register webhook");
    }

    let app = gateway_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| BizError::Delivery {
            message: format!("failed to bind gateway to {addr}: {e}"),
            source: Some(Box::new(e)),
        })?;

    tracing::info!("gateway listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await
        .map_err(|e| BizError::Internal(format!("gateway server error: {e}")))?;

    tracing::info!("gateway stopped");
    Ok(())
}
