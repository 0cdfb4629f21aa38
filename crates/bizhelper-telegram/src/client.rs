// SPDX-FileCopyrightText: 2026 Bizhelper Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the Telegram Bot API.
//!
//! Only the two methods the relay needs are wrapped: `sendMessage` and
//! `setWebhook`. Every call is a JSON POST to `{base}/bot{token}/{method}`.

use std::time::Duration;

use bizhelper_core::BizError;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::markup::WireMarkup;

/// Default Bot API endpoint.
pub const API_BASE_URL: &str = "https://api.telegram.org";

#[derive(Debug, Serialize)]
struct SendMessageBody<'a> {
    chat_id: i64,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_markup: Option<WireMarkup>,
}

#[derive(Debug, Serialize)]
struct SetWebhookBody<'a> {
    url: &'a str,
}

/// Envelope every Bot API response is wrapped in.
#[derive(Debug, Deserialize)]
struct ApiResponse {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    error_code: Option<i64>,
}

#[derive(Clone)]
pub struct TelegramClient {
    client: reqwest::Client,
    token: String,
    base_url: String,
}

// The token is a credential; keep it out of debug output.
impl std::fmt::Debug for TelegramClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl TelegramClient {
    /// Creates a client for `token` with a per-call `timeout`.
    pub fn new(token: impl Into<String>, timeout: Duration) -> Result<Self, BizError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| BizError::Delivery {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            token: token.into(),
            base_url: API_BASE_URL.to_string(),
        })
    }

    /// Overrides the API base URL (self-hosted Bot API server, wiremock).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub async fn send_message(
        &self,
        chat_id: i64,
        text: &str,
        reply_markup: Option<WireMarkup>,
    ) -> Result<(), BizError> {
        self.call(
            "sendMessage",
            &SendMessageBody {
                chat_id,
                text,
                reply_markup,
            },
        )
        .await
    }

    pub async fn set_webhook(&self, url: &str) -> Result<(), BizError> {
        self.call("setWebhook", &SetWebhookBody { url }).await
    }

    async fn call<T: Serialize>(&self, method: &str, body: &T) -> Result<(), BizError> {
        let url = format!("{}/bot{}/{method}", self.base_url, self.token);

        // without_url() keeps the token out of error messages.
        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                let e = e.without_url();
                BizError::Delivery {
                    message: format!("{method} request failed: {e}"),
                    source: Some(Box::new(e)),
                }
            })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            let e = e.without_url();
            BizError::Delivery {
                message: format!("failed to read {method} response: {e}"),
                source: Some(Box::new(e)),
            }
        })?;
        debug!(method, status = %status, "telegram API responded");

        match serde_json::from_str::<ApiResponse>(&text) {
            Ok(api) if api.ok && status.is_success() => Ok(()),
            Ok(api) => Err(BizError::Delivery {
                message: format!(
                    "{method} rejected ({}): {}",
                    api.error_code.unwrap_or(i64::from(status.as_u16())),
                    api.description.unwrap_or_else(|| "no description".into())
                ),
                source: None,
            }),
            Err(e) => Err(BizError::Delivery {
                message: format!("{method} returned {status} with unreadable body: {e}"),
                source: Some(Box::new(e)),
            }),
        }
    }
}
