// SPDX-FileCopyrightText: 2026 Bizhelper Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Outbound delivery to the chat platform.

use async_trait::async_trait;

use crate::domain::ReplyMarkup;
use crate::error::BizError;

/// Sends messages back to the origin channel.
#[async_trait]
pub trait DeliveryChannel: Send + Sync + 'static {
    /// Sends `text` to `chat_id`, attaching `markup` unless it is empty.
    async fn send_message(
        &self,
        chat_id: i64,
        text: &str,
        markup: &ReplyMarkup,
    ) -> Result<(), BizError>;

    /// Registers `url` as the webhook that receives updates.
    async fn set_webhook(&self, url: &str) -> Result<(), BizError>;
}
