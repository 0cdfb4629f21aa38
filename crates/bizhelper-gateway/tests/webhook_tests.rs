// SPDX-FileCopyrightText: 2026 Bizhelper Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Webhook endpoint behaviour against scripted collaborators.

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use bizhelper_core::protocol::{
    InlineKeyboardButton, InlineKeyboardMarkup, InlineKeyboardRow, MarkupKind, OutgoingMessage,
    ReplyMarkup as ProtoMarkup,
};
use bizhelper_core::{BizError, InlineButton, ReplyMarkup, UpdateResponse};
use bizhelper_gateway::{gateway_router, GatewayState};
use bizhelper_test_utils::{MockBackend, MockDelivery};
use tower::ServiceExt;

const CALLBACK_BODY: &str = r#"{"update_id":1,"callback_query":{"id":"c1","from":{"id":9},"message":{"message_id":5,"chat":{"id":42}},"data":"help"}}"#;

fn app(backend: &MockBackend, delivery: &MockDelivery) -> Router {
    gateway_router(GatewayState {
        backend: Arc::new(backend.clone()),
        delivery: Arc::new(delivery.clone()),
        request_timeout: Duration::from_secs(5),
    })
}

async fn post(app: Router, body: &str) -> (StatusCode, serde_json::Value) {
    let resp = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/webhook")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn reply(chat_id: i64, text: &str) -> OutgoingMessage {
    OutgoingMessage {
        chat_id,
        text: text.into(),
        reply_markup: None,
    }
}

#[tokio::test]
async fn malformed_json_is_400() {
    let backend = MockBackend::new();
    let (status, body) = post(app(&backend, &MockDelivery::new()), "{oops").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
    assert!(backend.requests().await.is_empty());
}

#[tokio::test]
async fn forwards_envelope_and_delivers_replies() {
    let backend = MockBackend::new();
    backend
        .push_response(UpdateResponse::ok(vec![reply(42, "one"), reply(42, "two")]))
        .await;
    let delivery = MockDelivery::new();

    let (status, body) = post(app(&backend, &delivery), CALLBACK_BODY).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let requests = backend.requests().await;
    let cb = requests[0].callback_query.as_ref().unwrap();
    assert_eq!((cb.id.as_str(), cb.chat_id, cb.data.as_str()), ("c1", 42, "help"));

    let texts: Vec<_> = delivery
        .sent_messages()
        .await
        .into_iter()
        .map(|m| m.text)
        .collect();
    assert_eq!(texts, ["one", "two"]);
}

#[tokio::test]
async fn markup_is_converted_for_delivery() {
    let backend = MockBackend::new();
    backend
        .push_response(UpdateResponse::ok(vec![OutgoingMessage {
            chat_id: 42,
            text: "pick".into(),
            reply_markup: Some(ProtoMarkup {
                kind: Some(MarkupKind::InlineKeyboard(InlineKeyboardMarkup {
                    rows: vec![InlineKeyboardRow {
                        buttons: vec![InlineKeyboardButton {
                            text: "Help".into(),
                            callback_data: "help".into(),
                            url: String::new(),
                        }],
                    }],
                })),
            }),
        }]))
        .await;
    let delivery = MockDelivery::new();

    post(app(&backend, &delivery), CALLBACK_BODY).await;
    let sent = delivery.sent_messages().await;
    assert_eq!(
        sent[0].markup,
        ReplyMarkup::Inline {
            rows: vec![vec![InlineButton::callback("Help", "help")]]
        }
    );
}

#[tokio::test]
async fn delivery_failure_is_soft_200() {
    let backend = MockBackend::new();
    backend
        .push_response(UpdateResponse::ok(vec![reply(42, "a"), reply(42, "b")]))
        .await;
    let delivery = MockDelivery::failing();

    let (status, body) = post(app(&backend, &delivery), CALLBACK_BODY).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "processed but failed to send response");
    assert_eq!(delivery.sent_count().await, 0);
}

#[tokio::test]
async fn routing_error_is_500() {
    let backend = MockBackend::new();
    backend
        .push_error(BizError::InvalidArgument("no message or callback provided".into()))
        .await;

    let (status, body) = post(app(&backend, &MockDelivery::new()), r#"{"update_id":1}"#).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("no message or callback provided"));
}

#[tokio::test]
async fn failed_routing_result_is_not_delivered() {
    let backend = MockBackend::new();
    backend
        .push_response(UpdateResponse {
            success: false,
            error: Some("errors: [storage error: down]".into()),
            messages: vec![reply(42, "partial")],
        })
        .await;
    let delivery = MockDelivery::new();

    let (status, body) = post(app(&backend, &delivery), CALLBACK_BODY).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(delivery.sent_count().await, 0);
}

#[tokio::test(start_paused = true)]
async fn slow_backend_times_out_with_500() {
    let backend = MockBackend::new().with_delay(Duration::from_secs(60));
    let (status, body) = post(app(&backend, &MockDelivery::new()), CALLBACK_BODY).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("timed out"));
}

#[tokio::test]
async fn health_reports_ok() {
    let resp = app(&MockBackend::new(), &MockDelivery::new())
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}
