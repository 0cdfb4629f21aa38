// SPDX-FileCopyrightText: 2026 Bizhelper Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Keyboard converters between the RPC oneof and [`ReplyMarkup`].

use super::non_empty;
use crate::domain::{Button, InlineButton, ReplyMarkup};
use crate::protocol::{
    InlineKeyboardButton, InlineKeyboardMarkup, InlineKeyboardRow, MarkupKind,
    ReplyKeyboardButton, ReplyKeyboardMarkup, ReplyKeyboardRow,
};
use crate::protocol;

/// Converts the wire oneof into domain markup. An unset `kind` yields
/// [`ReplyMarkup::None`].
pub fn to_domain_markup(markup: &protocol::ReplyMarkup) -> ReplyMarkup {
    match &markup.kind {
        Some(MarkupKind::InlineKeyboard(kb)) => ReplyMarkup::Inline {
            rows: kb
                .rows
                .iter()
                .map(|row| {
                    row.buttons
                        .iter()
                        .map(|b| InlineButton {
                            text: b.text.clone(),
                            callback_data: non_empty(&b.callback_data),
                            url: non_empty(&b.url),
                        })
                        .collect()
                })
                .collect(),
        },
        Some(MarkupKind::ReplyKeyboard(kb)) => ReplyMarkup::Plain {
            rows: kb
                .rows
                .iter()
                .map(|row| {
                    row.buttons
                        .iter()
                        .map(|b| Button {
                            text: b.text.clone(),
                        })
                        .collect()
                })
                .collect(),
            resize: kb.resize_keyboard,
            one_time: kb.one_time_keyboard,
        },
        None => ReplyMarkup::None,
    }
}

/// Converts domain markup into the wire oneof, or `None` when there is no
/// keyboard to attach.
pub fn to_proto_markup(markup: &ReplyMarkup) -> Option<protocol::ReplyMarkup> {
    if markup.is_empty() {
        return None;
    }
    let kind = match markup {
        ReplyMarkup::None => return None,
        ReplyMarkup::Inline { rows } => MarkupKind::InlineKeyboard(InlineKeyboardMarkup {
            rows: rows
                .iter()
                .map(|row| InlineKeyboardRow {
                    buttons: row
                        .iter()
                        .map(|b| InlineKeyboardButton {
                            text: b.text.clone(),
                            callback_data: b.callback_data.clone().unwrap_or_default(),
                            url: b.url.clone().unwrap_or_default(),
                        })
                        .collect(),
                })
                .collect(),
        }),
        ReplyMarkup::Plain {
            rows,
            resize,
            one_time,
        } => MarkupKind::ReplyKeyboard(ReplyKeyboardMarkup {
            rows: rows
                .iter()
                .map(|row| ReplyKeyboardRow {
                    buttons: row
                        .iter()
                        .map(|b| ReplyKeyboardButton {
                            text: b.text.clone(),
                        })
                        .collect(),
                })
                .collect(),
            resize_keyboard: *resize,
            one_time_keyboard: *one_time,
        }),
    };
    Some(protocol::ReplyMarkup { kind: Some(kind) })
}
