// SPDX-FileCopyrightText: 2026 Bizhelper Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-kind update handlers.
//!
//! Each handler persists its input, builds the reply and returns a partial
//! response. Neither talks to the chat platform; delivery is the gateway's job.

use bizhelper_core::convert::{to_callback_log, to_domain_message, to_domain_user, to_proto_markup};
use bizhelper_core::protocol::{CallbackQuery, Message, OutgoingMessage, UpdateResponse};
use bizhelper_core::{BizError, Direction, DomainMessage, MessageStatus};
use chrono::Utc;
use tracing::debug;

use crate::commands::CommandRegistry;
use crate::service::{generate_reply, BizService};

#[derive(Clone)]
pub struct UpdateHandlers {
    service: BizService,
    commands: CommandRegistry,
}

impl UpdateHandlers {
    pub fn new(service: BizService, commands: CommandRegistry) -> Self {
        Self { service, commands }
    }

    /// Saves the incoming message, generates and saves the reply.
    ///
    /// A failed reply save does not undo the incoming save.
    pub async fn process_message(&self, msg: &Message) -> Result<UpdateResponse, BizError> {
        let incoming = to_domain_message(msg);
        self.service
            .check_and_save_message(&incoming)
            .await
            .map_err(|e| wrap("failed to save incoming message", e))?;

        let user = msg.from.as_ref().map(to_domain_user);
        let reply = generate_reply(&incoming.text, user.as_ref());

        let outgoing = DomainMessage {
            id: None,
            message_id: 0,
            chat_id: msg.chat_id,
            user_id: msg.user_id,
            text: reply.text.clone(),
            direction: Direction::Outgoing,
            status: MessageStatus::Pending,
            timestamp: Utc::now(),
        };
        self.service
            .check_and_save_message(&outgoing)
            .await
            .map_err(|e| wrap("failed to save outgoing message", e))?;

        debug!(chat_id = msg.chat_id, message_id = msg.message_id, "message processed");
        Ok(UpdateResponse::ok(vec![OutgoingMessage {
            chat_id: msg.chat_id,
            text: reply.text,
            reply_markup: to_proto_markup(&reply.markup),
        }]))
    }

    /// Logs the callback and answers it from the command registry.
    pub async fn process_callback(&self, cb: &CallbackQuery) -> Result<UpdateResponse, BizError> {
        let log = to_callback_log(cb, Utc::now());
        self.service
            .check_and_save_callback(&log)
            .await
            .map_err(|e| wrap("failed to save callback", e))?;

        debug!(chat_id = cb.chat_id, data = %cb.data, "callback processed");
        Ok(UpdateResponse::ok(vec![self.commands.dispatch(cb)]))
    }
}

/// Prefixes the failing step, keeping validation errors terminal.
fn wrap(step: &str, err: BizError) -> BizError {
    match err {
        BizError::InvalidArgument(reason) => BizError::InvalidArgument(format!("{step}: {reason}")),
        other => BizError::Storage {
            message: format!("{step}: {other}"),
            source: Some(Box::new(other)),
        },
    }
}
