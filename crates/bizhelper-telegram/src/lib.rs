// SPDX-FileCopyrightText: 2026 Bizhelper Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Telegram delivery channel for the Bizhelper relay.
//!
//! Implements [`DeliveryChannel`] over the Telegram Bot API with plain
//! `reqwest` JSON calls, plus the Telegram encoding of reply keyboards.

pub mod client;
pub mod markup;

use std::time::Duration;

use async_trait::async_trait;
use bizhelper_config::TelegramConfig;
use bizhelper_core::{BizError, DeliveryChannel, ReplyMarkup};
use tracing::{debug, info};

pub use client::TelegramClient;
pub use markup::{from_wire, to_wire, WireMarkup};

/// Outbound Telegram channel.
#[derive(Debug, Clone)]
pub struct TelegramChannel {
    client: TelegramClient,
}

impl TelegramChannel {
    /// Creates a channel from config.
    ///
    /// Requires `config.bot_token` to be set.
    pub fn new(config: &TelegramConfig) -> Result<Self, BizError> {
        let token = config.bot_token.as_deref().ok_or_else(|| {
            BizError::Config("telegram.bot_token is required for the gateway".into())
        })?;

        if token.is_empty() {
            return Err(BizError::Config("telegram.bot_token cannot be empty".into()));
        }

        let client = TelegramClient::new(token, Duration::from_secs(config.timeout_secs))?
            .with_base_url(config.api_base_url.as_str());
        Ok(Self { client })
    }

    pub fn client(&self) -> &TelegramClient {
        &self.client
    }
}

#[async_trait]
impl DeliveryChannel for TelegramChannel {
    async fn send_message(
        &self,
        chat_id: i64,
        text: &str,
        markup: &ReplyMarkup,
    ) -> Result<(), BizError> {
        self.client.send_message(chat_id, text, to_wire(markup)).await?;
        debug!(chat_id, "message delivered");
        Ok(())
    }

    async fn set_webhook(&self, url: &str) -> Result<(), BizError> {
        self.client.set_webhook(url).await?;
        info!(url, "webhook registered");
        Ok(())
    }
}
