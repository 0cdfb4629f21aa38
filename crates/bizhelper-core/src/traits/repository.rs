// SPDX-FileCopyrightText: 2026 Bizhelper Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Persistence interface for messages and callback logs.

use async_trait::async_trait;

use crate::domain::{CallbackLog, DomainMessage};
use crate::error::BizError;

/// Store for chat history.
///
/// Implementations must be safe to share across concurrent requests.
#[async_trait]
pub trait MessageRepository: Send + Sync + 'static {
    /// Persists a message and returns its assigned id.
    async fn save_message(&self, message: &DomainMessage) -> Result<i64, BizError>;

    /// Persists a callback log and returns its assigned id.
    async fn save_callback(&self, callback: &CallbackLog) -> Result<i64, BizError>;

    /// Messages for a chat, oldest first.
    async fn list_messages(&self, chat_id: i64) -> Result<Vec<DomainMessage>, BizError>;

    /// Callback logs for a chat, oldest first.
    async fn list_callbacks(&self, chat_id: i64) -> Result<Vec<CallbackLog>, BizError>;
}
