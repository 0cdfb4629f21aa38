// SPDX-FileCopyrightText: 2026 Bizhelper Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite implementation of the MessageRepository trait.

use async_trait::async_trait;
use tracing::debug;

use bizhelper_config::model::StorageConfig;
use bizhelper_core::{BizError, CallbackLog, DomainMessage, MessageRepository};

use crate::database::Database;
use crate::queries;

/// SQLite-backed message repository.
///
/// Wraps a [`Database`] handle and delegates to the typed query modules.
pub struct SqliteRepository {
    db: Database,
}

impl SqliteRepository {
    /// Opens the database described by `config` and runs migrations.
    pub async fn open(config: &StorageConfig) -> Result<Self, BizError> {
        let db = Database::open_with(&config.database_path, config.wal_mode).await?;
        debug!(path = %config.database_path, "SQLite repository initialized");
        Ok(Self::new(db))
    }

    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Verifies the connection is usable.
    pub async fn health_check(&self) -> Result<(), BizError> {
        self.db.ping().await
    }

    /// Checkpoints the WAL before shutdown.
    pub async fn close(&self) -> Result<(), BizError> {
        self.db.close().await
    }
}

#[async_trait]
impl MessageRepository for SqliteRepository {
    async fn save_message(&self, message: &DomainMessage) -> Result<i64, BizError> {
        queries::messages::insert_message(&self.db, message).await
    }

    async fn save_callback(&self, callback: &CallbackLog) -> Result<i64, BizError> {
        queries::callbacks::insert_callback(&self.db, callback).await
    }

    async fn list_messages(&self, chat_id: i64) -> Result<Vec<DomainMessage>, BizError> {
        queries::messages::get_messages_for_chat(&self.db, chat_id).await
    }

    async fn list_callbacks(&self, chat_id: i64) -> Result<Vec<CallbackLog>, BizError> {
        queries::callbacks::get_callbacks_for_chat(&self.db, chat_id).await
    }
}
