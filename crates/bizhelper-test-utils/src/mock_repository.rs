// SPDX-FileCopyrightText: 2026 Bizhelper Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory message repository with failure injection.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use bizhelper_core::{BizError, CallbackLog, DomainMessage, MessageRepository};

#[derive(Default)]
struct Store {
    messages: Vec<DomainMessage>,
    callbacks: Vec<CallbackLog>,
    next_id: i64,
}

/// A `MessageRepository` backed by vectors.
///
/// Saved records get sequential ids shared across both tables, which makes
/// cross-branch ordering visible to tests.
#[derive(Clone, Default)]
pub struct MockRepository {
    store: Arc<Mutex<Store>>,
    fail_messages_from: Option<usize>,
    fail_callbacks: bool,
}

impl MockRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every `save_message` fails.
    pub fn failing_messages() -> Self {
        Self::failing_messages_from(0)
    }

    /// The first `n` message saves succeed, later ones fail.
    pub fn failing_messages_from(n: usize) -> Self {
        Self {
            fail_messages_from: Some(n),
            ..Self::default()
        }
    }

    /// Every `save_callback` fails.
    pub fn failing_callbacks() -> Self {
        Self {
            fail_callbacks: true,
            ..Self::default()
        }
    }

    /// All saved messages, in save order.
    pub async fn messages(&self) -> Vec<DomainMessage> {
        self.store.lock().await.messages.clone()
    }

    /// All saved callback logs, in save order.
    pub async fn callbacks(&self) -> Vec<CallbackLog> {
        self.store.lock().await.callbacks.clone()
    }
}

fn injected(what: &str) -> BizError {
    BizError::Storage {
        message: format!("injected {what} failure"),
        source: None,
    }
}

#[async_trait]
impl MessageRepository for MockRepository {
    async fn save_message(&self, message: &DomainMessage) -> Result<i64, BizError> {
        let mut store = self.store.lock().await;
        if self
            .fail_messages_from
            .is_some_and(|n| store.messages.len() >= n)
        {
            return Err(injected("message"));
        }
        store.next_id += 1;
        let id = store.next_id;
        store.messages.push(DomainMessage {
            id: Some(id),
            ..message.clone()
        });
        Ok(id)
    }

    async fn save_callback(&self, callback: &CallbackLog) -> Result<i64, BizError> {
        if self.fail_callbacks {
            return Err(injected("callback"));
        }
        let mut store = self.store.lock().await;
        store.next_id += 1;
        let id = store.next_id;
        store.callbacks.push(CallbackLog {
            id: Some(id),
            ..callback.clone()
        });
        Ok(id)
    }

    async fn list_messages(&self, chat_id: i64) -> Result<Vec<DomainMessage>, BizError> {
        let store = self.store.lock().await;
        Ok(store
            .messages
            .iter()
            .filter(|m| m.chat_id == chat_id)
            .cloned()
            .collect())
    }

    async fn list_callbacks(&self, chat_id: i64) -> Result<Vec<CallbackLog>, BizError> {
        let store = self.store.lock().await;
        Ok(store
            .callbacks
            .iter()
            .filter(|c| c.chat_id == chat_id)
            .cloned()
            .collect())
    }
}
