// SPDX-FileCopyrightText: 2026 Bizhelper Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP request handlers for the webhook gateway.
//!
//! Handles POST /webhook and GET /health.

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use bizhelper_core::convert::to_domain_markup;
use bizhelper_core::protocol::OutgoingMessage;
use bizhelper_core::{BizError, DeliveryChannel, ReplyMarkup};
use serde::Serialize;
use tracing::{debug, warn};

use crate::server::GatewayState;
use crate::update::TelegramUpdate;

pub const STATUS_OK: &str = "ok";
/// Reported when routing succeeded but a reply could not be delivered.
/// Still a 200 so Telegram does not redeliver the update.
pub const STATUS_DELIVERY_FAILED: &str = "processed but failed to send response";

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// POST /webhook
///
/// 400 on an unparseable body, 500 when the backend call fails or times out,
/// 200 otherwise.
pub async fn post_webhook(State(state): State<GatewayState>, body: Bytes) -> Response {
    let update: TelegramUpdate = match serde_json::from_slice(&body) {
        Ok(update) => update,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, e.to_string()),
    };
    let request = update.into_request();
    let update_id = request.update_id;

    let routed = match tokio::time::timeout(
        state.request_timeout,
        state.backend.process_update(request),
    )
    .await
    {
        Ok(result) => result,
        Err(_) => Err(BizError::Timeout {
            duration: state.request_timeout,
        }),
    };

    let response = match routed {
        Ok(response) => response,
        Err(e) => {
            warn!(update_id, error = %e, "update routing failed");
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string());
        }
    };

    if !response.success {
        warn!(
            update_id,
            error = response.error.as_deref().unwrap_or_default(),
            "update processed with errors"
        );
    } else if !response.messages.is_empty() {
        if let Err(e) = deliver(state.delivery.as_ref(), &response.messages).await {
            warn!(update_id, error = %e, "failed to deliver response");
            return status_response(STATUS_DELIVERY_FAILED);
        }
        debug!(update_id, count = response.messages.len(), "responses delivered");
    }

    status_response(STATUS_OK)
}

/// GET /health
pub async fn get_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: STATUS_OK.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Sends `messages` in order, stopping at the first failure.
pub async fn deliver(
    delivery: &dyn DeliveryChannel,
    messages: &[OutgoingMessage],
) -> Result<(), BizError> {
    for msg in messages {
        let markup = msg
            .reply_markup
            .as_ref()
            .map(to_domain_markup)
            .unwrap_or(ReplyMarkup::None);
        delivery.send_message(msg.chat_id, &msg.text, &markup).await?;
    }
    Ok(())
}

fn status_response(status: &str) -> Response {
    (
        StatusCode::OK,
        Json(StatusResponse {
            status: status.to_string(),
        }),
    )
        .into_response()
}

fn error_response(code: StatusCode, error: String) -> Response {
    (code, Json(ErrorResponse { error })).into_response()
}
