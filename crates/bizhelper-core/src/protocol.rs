// SPDX-FileCopyrightText: 2026 Bizhelper Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Wire schema of the backend link.
//!
//! These types travel as JSON between the gateway and the backend service.
//! String fields follow proto3 conventions: an empty string means "unset".
//! Conversion to the domain schema lives in [`crate::convert`].

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::error::BizError;

/// One inbound unit of work, built by the gateway from a Telegram update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateRequest {
    pub update_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_query: Option<CallbackQuery>,
}

impl UpdateRequest {
    /// Returns `true` when neither a message nor a callback is present.
    pub fn is_empty(&self) -> bool {
        self.message.is_none() && self.callback_query.is_none()
    }
}

/// Inbound chat message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Message {
    pub message_id: i64,
    pub chat_id: i64,
    pub user_id: i64,
    pub text: String,
    /// Epoch seconds.
    pub date: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chat: Option<Chat>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Chat {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Inline keyboard button press.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CallbackQuery {
    pub id: String,
    pub user_id: i64,
    pub chat_id: i64,
    /// Message the keyboard was attached to.
    pub message_id: i64,
    pub data: String,
}

/// Result of routing one update: either a single handler's partial
/// response or the merged response for the whole envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub messages: Vec<OutgoingMessage>,
}

impl UpdateResponse {
    /// A successful response carrying the given messages.
    pub fn ok(messages: Vec<OutgoingMessage>) -> Self {
        Self {
            success: true,
            error: None,
            messages,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutgoingMessage {
    pub chat_id: i64,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<ReplyMarkup>,
}

/// Keyboard attachment; `kind` is a oneof and may be unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplyMarkup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<MarkupKind>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkupKind {
    InlineKeyboard(InlineKeyboardMarkup),
    ReplyKeyboard(ReplyKeyboardMarkup),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InlineKeyboardMarkup {
    pub rows: Vec<InlineKeyboardRow>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InlineKeyboardRow {
    pub buttons: Vec<InlineKeyboardButton>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InlineKeyboardButton {
    pub text: String,
    pub callback_data: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplyKeyboardMarkup {
    pub rows: Vec<ReplyKeyboardRow>,
    pub resize_keyboard: bool,
    pub one_time_keyboard: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplyKeyboardRow {
    pub buttons: Vec<ReplyKeyboardButton>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplyKeyboardButton {
    pub text: String,
}

/// Request for the `SendMessage` RPC.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SendMessageRequest {
    pub chat_id: i64,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<ReplyMarkup>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SendMessageResponse {
    pub success: bool,
    pub error: String,
}

/// Status code carried by a failed RPC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RpcCode {
    InvalidArgument,
    Internal,
}

/// Error body returned by the backend when an RPC fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcStatus {
    pub code: RpcCode,
    pub message: String,
}

impl RpcStatus {
    /// Encodes a [`BizError`] for the wire. Only validation errors keep
    /// their identity; everything else collapses to `internal`.
    pub fn from_error(err: &BizError) -> Self {
        match err {
            BizError::InvalidArgument(message) => Self {
                code: RpcCode::InvalidArgument,
                message: message.clone(),
            },
            other => Self {
                code: RpcCode::Internal,
                message: other.to_string(),
            },
        }
    }

    /// Decodes the wire status back into a [`BizError`].
    pub fn into_error(self) -> BizError {
        match self.code {
            RpcCode::InvalidArgument => BizError::InvalidArgument(self.message),
            RpcCode::Internal => BizError::Rpc {
                message: self.message,
                source: None,
            },
        }
    }
}
