// SPDX-FileCopyrightText: 2026 Bizhelper Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Message, callback, user and `SendMessage` converters.

use chrono::{DateTime, Utc};

use super::markup::to_domain_markup;
use super::non_empty;
use crate::domain::{
    CallbackLog, Direction, DomainMessage, IncomingMessage, MessageResponse, MessageStatus,
    ReplyMarkup, User,
};
use crate::protocol;

/// Converts an inbound wire message into a received, incoming domain message.
///
/// `from` and `chat` are not persisted; the reply generator reads `from`
/// directly off the wire message.
pub fn to_domain_message(msg: &protocol::Message) -> DomainMessage {
    DomainMessage {
        id: None,
        message_id: msg.message_id,
        chat_id: msg.chat_id,
        user_id: msg.user_id,
        text: msg.text.clone(),
        direction: Direction::Incoming,
        status: MessageStatus::Received,
        timestamp: DateTime::from_timestamp(msg.date, 0).unwrap_or(DateTime::UNIX_EPOCH),
    }
}

/// Converts a callback query into a log entry stamped with `captured_at`.
pub fn to_callback_log(cb: &protocol::CallbackQuery, captured_at: DateTime<Utc>) -> CallbackLog {
    CallbackLog {
        id: None,
        callback_id: cb.id.clone(),
        user_id: cb.user_id,
        chat_id: cb.chat_id,
        message_id: cb.message_id,
        data: cb.data.clone(),
        timestamp: captured_at,
    }
}

pub fn to_domain_user(user: &protocol::User) -> User {
    User {
        id: user.id,
        first_name: non_empty(&user.first_name),
        last_name: non_empty(&user.last_name),
        username: non_empty(&user.username),
    }
}

pub fn to_proto_user(user: &User) -> protocol::User {
    protocol::User {
        id: user.id,
        first_name: user.first_name.clone().unwrap_or_default(),
        last_name: user.last_name.clone().unwrap_or_default(),
        username: user.username.clone().unwrap_or_default(),
    }
}

/// Converts a `SendMessage` request into the domain form.
pub fn to_incoming_message(
    req: &protocol::SendMessageRequest,
    received_at: DateTime<Utc>,
) -> IncomingMessage {
    IncomingMessage {
        chat_id: req.chat_id,
        text: req.text.clone(),
        reply_markup: req
            .reply_markup
            .as_ref()
            .map(to_domain_markup)
            .unwrap_or(ReplyMarkup::None),
        received_at,
    }
}

/// Converts a service outcome into the wire response. A missing outcome is
/// reported as a failure rather than an empty success.
pub fn to_proto_response(resp: Option<&MessageResponse>) -> protocol::SendMessageResponse {
    match resp {
        Some(resp) => protocol::SendMessageResponse {
            success: resp.success,
            error: resp.error.clone().unwrap_or_default(),
        },
        None => protocol::SendMessageResponse {
            success: false,
            error: "empty response".to_string(),
        },
    }
}
