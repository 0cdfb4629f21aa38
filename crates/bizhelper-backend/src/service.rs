// SPDX-FileCopyrightText: 2026 Bizhelper Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Business rules: persistence checks, reply generation, outbound requests.

use std::sync::Arc;

use bizhelper_core::{
    BizError, CallbackLog, DomainMessage, IncomingMessage, InlineButton, MessageRepository,
    MessageResponse, ReplyMarkup, User,
};
use tracing::debug;

pub const WELCOME_TEXT: &str = "Welcome! I am a helper bot. How can I help you?";
pub const COMMANDS_TEXT: &str = "Available commands:\n/start - get started\n/help - help";

/// A generated reply: text plus an optional keyboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub markup: ReplyMarkup,
}

impl Reply {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            markup: ReplyMarkup::None,
        }
    }
}

/// Maps inbound text to a reply.
///
/// `/start` and `/help` have fixed answers regardless of the sender; any
/// other text is greeted by first name when known, echoed otherwise.
pub fn generate_reply(text: &str, user: Option<&User>) -> Reply {
    match text {
        "/start" => Reply {
            text: WELCOME_TEXT.to_string(),
            markup: ReplyMarkup::Inline {
                rows: vec![vec![InlineButton::callback("Help", "help")]],
            },
        },
        "/help" => Reply::plain(COMMANDS_TEXT),
        _ => match user.and_then(|u| u.first_name.as_deref()) {
            Some(name) => Reply::plain(format!("Hello, {name}! You wrote: {text}")),
            None => Reply::plain(format!("Echo: {text}")),
        },
    }
}

/// Service layer shared by the RPC handlers.
#[derive(Clone)]
pub struct BizService {
    repo: Arc<dyn MessageRepository>,
}

impl BizService {
    pub fn new(repo: Arc<dyn MessageRepository>) -> Self {
        Self { repo }
    }

    /// Validates and persists a message, returning its store id.
    pub async fn check_and_save_message(&self, msg: &DomainMessage) -> Result<i64, BizError> {
        if msg.chat_id == 0 {
            return Err(BizError::InvalidArgument("message chat_id must not be 0".into()));
        }
        self.repo.save_message(msg).await
    }

    /// Persists a callback log, returning its store id.
    pub async fn check_and_save_callback(&self, cb: &CallbackLog) -> Result<i64, BizError> {
        self.repo.save_callback(cb).await
    }

    /// Answers a `SendMessage` request.
    ///
    /// Delivery itself is the gateway's job; the service only acknowledges.
    pub async fn answer_incoming(&self, msg: IncomingMessage) -> Result<MessageResponse, BizError> {
        debug!(
            chat_id = msg.chat_id,
            has_markup = !msg.reply_markup.is_empty(),
            "send message request acknowledged"
        );
        Ok(MessageResponse {
            success: true,
            error: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bizhelper_core::{Direction, MessageStatus};
    use bizhelper_test_utils::MockRepository;
    use chrono::Utc;

    fn user(first_name: Option<&str>) -> User {
        User {
            id: 9,
            first_name: first_name.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn start_reply_ignores_sender_and_offers_help_button() {
        for sender in [None, Some(user(Some("Ann"))), Some(user(None))] {
            let reply = generate_reply("/start", sender.as_ref());
            assert_eq!(reply.text, WELCOME_TEXT);
            let ReplyMarkup::Inline { rows } = &reply.markup else {
                panic!("expected inline keyboard");
            };
            assert_eq!(rows[0][0].callback_data.as_deref(), Some("help"));
        }
    }

    #[test]
    fn help_reply_is_fixed() {
        let reply = generate_reply("/help", Some(&user(Some("Ann"))));
        assert_eq!(reply.text, COMMANDS_TEXT);
        assert_eq!(reply.markup, ReplyMarkup::None);
    }

    #[test]
    fn known_first_name_is_greeted() {
        let reply = generate_reply("how are you", Some(&user(Some("Ann"))));
        assert_eq!(reply.text, "Hello, Ann! You wrote: how are you");
    }

    #[test]
    fn unknown_sender_is_echoed() {
        assert_eq!(generate_reply("ping", None).text, "Echo: ping");
        assert_eq!(generate_reply("ping", Some(&user(None))).text, "Echo: ping");
    }

    #[tokio::test]
    async fn zero_chat_id_is_rejected_before_saving() {
        let repo = MockRepository::new();
        let service = BizService::new(Arc::new(repo.clone()));
        let msg = DomainMessage {
            id: None,
            message_id: 1,
            chat_id: 0,
            user_id: 9,
            text: "hi".into(),
            direction: Direction::Incoming,
            status: MessageStatus::Received,
            timestamp: Utc::now(),
        };
        let err = service.check_and_save_message(&msg).await.unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(repo.messages().await.is_empty());
    }

    #[tokio::test]
    async fn answer_incoming_acknowledges() {
        let service = BizService::new(Arc::new(MockRepository::new()));
        let resp = service
            .answer_incoming(IncomingMessage {
                chat_id: 42,
                text: "hi".into(),
                reply_markup: ReplyMarkup::None,
                received_at: Utc::now(),
            })
            .await
            .unwrap();
        assert!(resp.success);
        assert!(resp.error.is_none());
    }
}
