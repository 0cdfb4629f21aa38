// SPDX-FileCopyrightText: 2026 Bizhelper Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Callback log operations.

use bizhelper_core::{BizError, CallbackLog};
use rusqlite::params;

use crate::database::{format_timestamp, map_tr_err, parse_timestamp, Database};

/// Insert a callback log and return its row id.
pub async fn insert_callback(db: &Database, cb: &CallbackLog) -> Result<i64, BizError> {
    let cb = cb.clone();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO callback_logs (callback_id, user_id, chat_id, message_id, data, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    cb.callback_id,
                    cb.user_id,
                    cb.chat_id,
                    cb.message_id,
                    cb.data,
                    format_timestamp(&cb.timestamp),
                ],
            )?;
            Ok(conn.last_insert_rowid())
        })
        .await
        .map_err(map_tr_err)
}

pub async fn get_callbacks_for_chat(
    db: &Database,
    chat_id: i64,
) -> Result<Vec<CallbackLog>, BizError> {
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT id, callback_id, user_id, chat_id, message_id, data, created_at
                 FROM callback_logs WHERE chat_id = ?1
                 ORDER BY id ASC",
            )?;
            let rows = stmt.query_map(params![chat_id], |row| {
                let created_at: String = row.get(6)?;
                Ok(CallbackLog {
                    id: Some(row.get(0)?),
                    callback_id: row.get(1)?,
                    user_id: row.get(2)?,
                    chat_id: row.get(3)?,
                    message_id: row.get(4)?,
                    data: row.get(5)?,
                    timestamp: parse_timestamp(6, &created_at)?,
                })
            })?;
            rows.collect::<Result<Vec<_>, _>>()
        })
        .await
        .map_err(map_tr_err)
}
