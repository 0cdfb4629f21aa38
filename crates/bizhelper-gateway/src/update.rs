// SPDX-FileCopyrightText: 2026 Bizhelper Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Telegram update payload and its conversion to the RPC envelope.
//!
//! Only the fields the relay uses are modelled. Every field is optional on
//! the wire; missing ones decode to their zero value.

use bizhelper_core::protocol::{CallbackQuery, Chat, Message, UpdateRequest, User};
use serde::Deserialize;

/// Chat type assumed when Telegram omits it.
const DEFAULT_CHAT_TYPE: &str = "private";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TelegramUpdate {
    pub update_id: i64,
    pub message: Option<TelegramMessage>,
    pub callback_query: Option<TelegramCallbackQuery>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TelegramMessage {
    pub message_id: i64,
    pub from: TelegramUser,
    pub chat: TelegramChat,
    pub date: i64,
    pub text: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TelegramUser {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TelegramChat {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TelegramCallbackQuery {
    pub id: String,
    pub from: TelegramUser,
    pub message: TelegramMessage,
    pub data: String,
}

impl TelegramUpdate {
    /// Builds the RPC envelope, carrying over only the branches present.
    pub fn into_request(self) -> UpdateRequest {
        UpdateRequest {
            update_id: self.update_id,
            message: self.message.map(into_message),
            callback_query: self.callback_query.map(into_callback),
        }
    }
}

fn into_message(msg: TelegramMessage) -> Message {
    Message {
        message_id: msg.message_id,
        chat_id: msg.chat.id,
        user_id: msg.from.id,
        text: msg.text,
        date: msg.date,
        from: Some(User {
            id: msg.from.id,
            first_name: msg.from.first_name,
            last_name: msg.from.last_name,
            username: msg.from.username,
        }),
        chat: Some(Chat {
            id: msg.chat.id,
            kind: msg
                .chat
                .kind
                .unwrap_or_else(|| DEFAULT_CHAT_TYPE.to_string()),
        }),
    }
}

fn into_callback(cb: TelegramCallbackQuery) -> CallbackQuery {
    CallbackQuery {
        id: cb.id,
        user_id: cb.from.id,
        chat_id: cb.message.chat.id,
        message_id: cb.message.message_id,
        data: cb.data,
    }
}
