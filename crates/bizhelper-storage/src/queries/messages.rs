// SPDX-FileCopyrightText: 2026 Bizhelper Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Message CRUD operations.

use bizhelper_core::{BizError, DomainMessage};
use rusqlite::params;

use crate::database::{format_timestamp, map_tr_err, parse_timestamp, Database};

/// Insert a message and return its row id.
pub async fn insert_message(db: &Database, msg: &DomainMessage) -> Result<i64, BizError> {
    let msg = msg.clone();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO messages (message_id, chat_id, user_id, text, direction, status, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    msg.message_id,
                    msg.chat_id,
                    msg.user_id,
                    msg.text,
                    msg.direction.to_string(),
                    msg.status.to_string(),
                    format_timestamp(&msg.timestamp),
                ],
            )?;
            Ok(conn.last_insert_rowid())
        })
        .await
        .map_err(map_tr_err)
}

/// Get the messages of a chat in insertion order.
pub async fn get_messages_for_chat(
    db: &Database,
    chat_id: i64,
) -> Result<Vec<DomainMessage>, BizError> {
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT id, message_id, chat_id, user_id, text, direction, status, created_at
                 FROM messages WHERE chat_id = ?1
                 ORDER BY id ASC",
            )?;
            let rows = stmt.query_map(params![chat_id], |row| {
                let direction: String = row.get(5)?;
                let status: String = row.get(6)?;
                let created_at: String = row.get(7)?;
                Ok(DomainMessage {
                    id: Some(row.get(0)?),
                    message_id: row.get(1)?,
                    chat_id: row.get(2)?,
                    user_id: row.get(3)?,
                    text: row.get(4)?,
                    direction: parse_enum(5, &direction)?,
                    status: parse_enum(6, &status)?,
                    timestamp: parse_timestamp(7, &created_at)?,
                })
            })?;
            rows.collect::<Result<Vec<_>, _>>()
        })
        .await
        .map_err(map_tr_err)
}

fn parse_enum<T>(idx: usize, raw: &str) -> Result<T, rusqlite::Error>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.parse().map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use bizhelper_core::{Direction, MessageStatus};
    use chrono::DateTime;
    use tempfile::tempdir;

    async fn setup_db() -> (Database, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let db = Database::open(db_path.to_str().unwrap()).await.unwrap();
        (db, dir)
    }

    fn make_msg(chat_id: i64, text: &str, direction: Direction, secs: i64) -> DomainMessage {
        DomainMessage {
            id: None,
            message_id: secs,
            chat_id,
            user_id: 9,
            text: text.to_string(),
            direction,
            status: match direction {
                Direction::Incoming => MessageStatus::Received,
                Direction::Outgoing => MessageStatus::Pending,
            },
            timestamp: DateTime::from_timestamp(secs, 0).unwrap(),
        }
    }

    #[tokio::test]
    async fn insert_returns_increasing_ids() {
        let (db, _dir) = setup_db().await;
        let a = insert_message(&db, &make_msg(42, "hi", Direction::Incoming, 1))
            .await
            .unwrap();
        let b = insert_message(&db, &make_msg(42, "Echo: hi", Direction::Outgoing, 2))
            .await
            .unwrap();
        assert!(a > 0);
        assert!(b > a);
        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn messages_are_scoped_to_chat_and_ordered() {
        let (db, _dir) = setup_db().await;
        insert_message(&db, &make_msg(42, "one", Direction::Incoming, 1))
            .await
            .unwrap();
        insert_message(&db, &make_msg(7, "other chat", Direction::Incoming, 2))
            .await
            .unwrap();
        insert_message(&db, &make_msg(42, "two", Direction::Outgoing, 3))
            .await
            .unwrap();

        let messages = get_messages_for_chat(&db, 42).await.unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].text, "one");
        assert_eq!(messages[0].direction, Direction::Incoming);
        assert_eq!(messages[0].status, MessageStatus::Received);
        assert_eq!(messages[1].text, "two");
        assert_eq!(messages[1].direction, Direction::Outgoing);
        assert_eq!(messages[1].timestamp.timestamp(), 3);
        assert!(messages[0].id.is_some());
        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn empty_chat_returns_no_messages() {
        let (db, _dir) = setup_db().await;
        assert!(get_messages_for_chat(&db, 42).await.unwrap().is_empty());
    }
}
