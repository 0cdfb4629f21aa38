// SPDX-FileCopyrightText: 2026 Bizhelper Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! JSON-over-HTTP RPC surface of the backend.
//!
//! Routes:
//! - POST /rpc/process_update
//! - POST /rpc/send_message
//! - GET /health
//!
//! Failures are answered with an [`RpcStatus`] body: 400 for
//! `invalid_argument`, 500 for `internal`.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use bizhelper_config::BackendConfig;
use bizhelper_core::{BackendLink, BizError, RpcCode, RpcStatus};
use serde::{de::DeserializeOwned, Serialize};
use tokio_util::sync::CancellationToken;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub const PROCESS_UPDATE_PATH: &str = "/rpc/process_update";
pub const SEND_MESSAGE_PATH: &str = "/rpc/send_message";

/// Shared state for the RPC handlers.
#[derive(Clone)]
pub struct RpcState {
    pub link: Arc<dyn BackendLink>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Builds the RPC router without binding it.
pub fn rpc_router(link: Arc<dyn BackendLink>) -> Router {
    Router::new()
        .route(PROCESS_UPDATE_PATH, post(process_update))
        .route(SEND_MESSAGE_PATH, post(send_message))
        .route("/health", get(health))
        .with_state(RpcState { link })
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Binds the configured address and serves until `shutdown` fires.
pub async fn start_rpc_server(
    config: &BackendConfig,
    link: Arc<dyn BackendLink>,
    shutdown: CancellationToken,
) -> Result<(), BizError> {
    let app = rpc_router(link);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| BizError::Rpc {
            message: format!("failed to bind backend to {addr}: {e}"),
            source: Some(Box::new(e)),
        })?;

    tracing::info!(strategy = ?config.route_strategy, "backend RPC server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await
        .map_err(|e| BizError::Rpc {
            message: format!("backend server error: {e}"),
            source: Some(Box::new(e)),
        })?;

    tracing::info!("backend RPC server stopped");
    Ok(())
}

/// POST /rpc/process_update
async fn process_update(State(state): State<RpcState>, body: Bytes) -> Response {
    let request = match decode(&body) {
        Ok(request) => request,
        Err(resp) => return resp,
    };
    respond(state.link.process_update(request).await)
}

/// POST /rpc/send_message
async fn send_message(State(state): State<RpcState>, body: Bytes) -> Response {
    let request = match decode(&body) {
        Ok(request) => request,
        Err(resp) => return resp,
    };
    respond(state.link.send_message(request).await)
}

/// GET /health
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, Response> {
    serde_json::from_slice(body).map_err(|e| {
        status_response(RpcStatus {
            code: RpcCode::InvalidArgument,
            message: format!("malformed request body: {e}"),
        })
    })
}

fn respond<T: Serialize>(result: Result<T, BizError>) -> Response {
    match result {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "rpc call failed");
            status_response(RpcStatus::from_error(&e))
        }
    }
}

fn status_response(status: RpcStatus) -> Response {
    let code = match status.code {
        RpcCode::InvalidArgument => StatusCode::BAD_REQUEST,
        RpcCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (code, Json(status)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use bizhelper_core::{UpdateRequest, UpdateResponse};
    use bizhelper_test_utils::MockBackend;
    use tower::ServiceExt;

    async fn call(app: Router, path: &str, body: &str) -> (StatusCode, serde_json::Value) {
        let resp = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(path)
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn process_update_passes_request_through() {
        let backend = MockBackend::new();
        backend.push_response(UpdateResponse::ok(Vec::new())).await;
        let app = rpc_router(Arc::new(backend.clone()));

        let (status, body) = call(app, PROCESS_UPDATE_PATH, r#"{"update_id":7,"message":{"chat_id":1,"text":"x"}}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);

        let requests = backend.requests().await;
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].update_id, 7);
        assert_eq!(requests[0].message.as_ref().unwrap().text, "x");
    }

    #[tokio::test]
    async fn malformed_body_is_invalid_argument() {
        let app = rpc_router(Arc::new(MockBackend::new()));
        let (status, body) = call(app, PROCESS_UPDATE_PATH, "{not json").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "invalid_argument");
    }

    #[tokio::test]
    async fn internal_error_maps_to_500() {
        let backend = MockBackend::new();
        backend.push_error(BizError::Internal("boom".into())).await;
        let app = rpc_router(Arc::new(backend));

        let (status, body) = call(app, PROCESS_UPDATE_PATH, "{}").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["code"], "internal");
        assert!(body["message"].as_str().unwrap().contains("boom"));
    }

    #[tokio::test]
    async fn send_message_rejects_zero_chat() {
        let app = rpc_router(Arc::new(MockBackend::new()));
        let (status, body) = call(app, SEND_MESSAGE_PATH, r#"{"chat_id":0,"text":"x"}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "chat_id must not be 0");
    }

    #[tokio::test]
    async fn health_reports_version() {
        let app = rpc_router(Arc::new(MockBackend::new()));
        let resp = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn update_request_default_is_empty() {
        assert!(UpdateRequest::default().is_empty());
    }
}
