// SPDX-FileCopyrightText: 2026 Bizhelper Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain schema used by the backend's business logic and storage.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Which way a stored message travelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Direction {
    Incoming,
    Outgoing,
}

/// Lifecycle status of a stored message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MessageStatus {
    Received,
    Pending,
    Sent,
    Failed,
}

/// A chat message as persisted by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainMessage {
    /// Row id, assigned on save.
    pub id: Option<i64>,
    pub message_id: i64,
    pub chat_id: i64,
    pub user_id: i64,
    pub text: String,
    pub direction: Direction,
    pub status: MessageStatus,
    pub timestamp: DateTime<Utc>,
}

/// A record of an inline-button press.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallbackLog {
    pub id: Option<i64>,
    pub callback_id: String,
    pub user_id: i64,
    pub chat_id: i64,
    pub message_id: i64,
    pub data: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub username: Option<String>,
}

/// A message the caller asked the backend to send (the `SendMessage` RPC).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingMessage {
    pub chat_id: i64,
    pub text: String,
    pub reply_markup: ReplyMarkup,
    pub received_at: DateTime<Utc>,
}

/// Outcome of a `SendMessage` call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageResponse {
    pub success: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineButton {
    pub text: String,
    pub callback_data: Option<String>,
    pub url: Option<String>,
}

impl InlineButton {
    pub fn callback(text: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            callback_data: Some(data.into()),
            url: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Button {
    pub text: String,
}

/// Keyboard attached to an outgoing message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReplyMarkup {
    #[default]
    None,
    /// Buttons rendered under the message.
    Inline { rows: Vec<Vec<InlineButton>> },
    /// Custom keyboard replacing the user's input keyboard.
    Plain {
        rows: Vec<Vec<Button>>,
        resize: bool,
        one_time: bool,
    },
}

impl ReplyMarkup {
    /// Returns `true` when there is nothing to render.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::None => true,
            Self::Inline { rows } => rows.is_empty(),
            Self::Plain { rows, .. } => rows.is_empty(),
        }
    }
}
