// SPDX-FileCopyrightText: 2026 Bizhelper Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Callback command registry.
//!
//! Maps callback `data` strings to handlers. Unrecognized data goes to the
//! fallback handler, so an unknown button never fails the request.

use std::collections::HashMap;
use std::sync::Arc;

use bizhelper_core::protocol::{CallbackQuery, OutgoingMessage};

pub const CALLBACK_HELP_TEXT: &str = "I am a helper bot. Available commands:\n/help - help\n";

/// Produces the reply for one callback.
pub type CommandHandler = Arc<dyn Fn(&CallbackQuery) -> OutgoingMessage + Send + Sync>;

#[derive(Clone)]
pub struct CommandRegistry {
    commands: HashMap<String, CommandHandler>,
    fallback: CommandHandler,
}

impl CommandRegistry {
    /// An empty registry that answers everything with `fallback`.
    pub fn new(fallback: CommandHandler) -> Self {
        Self {
            commands: HashMap::new(),
            fallback,
        }
    }

    /// The stock registry: `help` plus the unknown-command fallback.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new(Arc::new(unknown_command));
        registry.register("help", Arc::new(help_command));
        registry
    }

    /// Registers (or replaces) the handler for `data`.
    pub fn register(&mut self, data: impl Into<String>, handler: CommandHandler) -> &mut Self {
        self.commands.insert(data.into(), handler);
        self
    }

    /// Runs the handler registered for `cb.data`, or the fallback.
    pub fn dispatch(&self, cb: &CallbackQuery) -> OutgoingMessage {
        let handler = self.commands.get(&cb.data).unwrap_or(&self.fallback);
        handler(cb)
    }

    /// Registered command names, sorted.
    pub fn commands(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.commands.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

fn help_command(cb: &CallbackQuery) -> OutgoingMessage {
    OutgoingMessage {
        chat_id: cb.chat_id,
        text: CALLBACK_HELP_TEXT.to_string(),
        reply_markup: None,
    }
}

fn unknown_command(cb: &CallbackQuery) -> OutgoingMessage {
    OutgoingMessage {
        chat_id: cb.chat_id,
        text: format!("Unknown command: {}", cb.data),
        reply_markup: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn callback(data: &str) -> CallbackQuery {
        CallbackQuery {
            id: "c1".into(),
            user_id: 9,
            chat_id: 42,
            message_id: 5,
            data: data.into(),
        }
    }

    #[test]
    fn default_commands_are_listed() {
        assert_eq!(CommandRegistry::with_defaults().commands(), vec!["help"]);
    }

    #[test]
    fn help_is_dispatched() {
        let reply = CommandRegistry::default().dispatch(&callback("help"));
        assert_eq!(reply.chat_id, 42);
        assert_eq!(reply.text, CALLBACK_HELP_TEXT);
    }

    #[test]
    fn unknown_data_uses_fallback() {
        let registry = CommandRegistry::default();
        assert_eq!(registry.dispatch(&callback("xyz")).text, "Unknown command: xyz");
        assert_eq!(registry.dispatch(&callback("")).text, "Unknown command: ");
        // Exact match only.
        assert_eq!(registry.dispatch(&callback("HELP")).text, "Unknown command: HELP");
    }

    #[test]
    fn registered_command_overrides_fallback() {
        let mut registry = CommandRegistry::default();
        registry.register(
            "ping",
            Arc::new(|cb: &CallbackQuery| OutgoingMessage {
                chat_id: cb.chat_id,
                text: "pong".into(),
                reply_markup: None,
            }),
        );
        assert_eq!(registry.dispatch(&callback("ping")).text, "pong");
        assert_eq!(registry.commands(), vec!["help", "ping"]);
    }
}
