// SPDX-FileCopyrightText: 2026 Bizhelper Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock delivery channel for deterministic testing.
//!
//! `MockDelivery` implements `DeliveryChannel`, capturing every send for
//! assertion and optionally failing from the N-th send onwards.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use bizhelper_core::{BizError, DeliveryChannel, ReplyMarkup};

/// One captured `send_message` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    pub chat_id: i64,
    pub text: String,
    pub markup: ReplyMarkup,
}

/// A recording delivery channel.
#[derive(Clone, Default)]
pub struct MockDelivery {
    sent: Arc<Mutex<Vec<SentMessage>>>,
    webhooks: Arc<Mutex<Vec<String>>>,
    fail_from: Option<usize>,
}

impl MockDelivery {
    /// A channel where every send succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// A channel where every send fails.
    pub fn failing() -> Self {
        Self::failing_from(0)
    }

    /// A channel where the first `n` sends succeed and the rest fail.
    pub fn failing_from(n: usize) -> Self {
        Self {
            fail_from: Some(n),
            ..Self::default()
        }
    }

    /// Messages that were delivered successfully, in order.
    pub async fn sent_messages(&self) -> Vec<SentMessage> {
        self.sent.lock().await.clone()
    }

    pub async fn sent_count(&self) -> usize {
        self.sent.lock().await.len()
    }

    /// URLs passed to `set_webhook`.
    pub async fn webhooks(&self) -> Vec<String> {
        self.webhooks.lock().await.clone()
    }
}

#[async_trait]
impl DeliveryChannel for MockDelivery {
    async fn send_message(
        &self,
        chat_id: i64,
        text: &str,
        markup: &ReplyMarkup,
    ) -> Result<(), BizError> {
        let mut sent = self.sent.lock().await;
        if self.fail_from.is_some_and(|n| sent.len() >= n) {
            return Err(BizError::Delivery {
                message: format!("mock delivery to chat {chat_id} rejected"),
                source: None,
            });
        }
        sent.push(SentMessage {
            chat_id,
            text: text.to_string(),
            markup: markup.clone(),
        });
        Ok(())
    }

    async fn set_webhook(&self, url: &str) -> Result<(), BizError> {
        self.webhooks.lock().await.push(url.to_string());
        Ok(())
    }
}
