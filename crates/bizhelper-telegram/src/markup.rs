// SPDX-FileCopyrightText: 2026 Bizhelper Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Telegram JSON encoding of reply keyboards.
//!
//! Telegram accepts either `{"inline_keyboard": [[..]]}` or
//! `{"keyboard": [[..]], "resize_keyboard": .., "one_time_keyboard": ..}`
//! as `reply_markup`.

use bizhelper_core::{Button, InlineButton, ReplyMarkup};
use serde::{Deserialize, Serialize};

/// The `reply_markup` object of a Bot API call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WireMarkup {
    Inline(InlineKeyboard),
    Keyboard(Keyboard),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineKeyboard {
    pub inline_keyboard: Vec<Vec<WireInlineButton>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireInlineButton {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback_data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyboard {
    pub keyboard: Vec<Vec<WireButton>>,
    #[serde(default)]
    pub resize_keyboard: bool,
    #[serde(default)]
    pub one_time_keyboard: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireButton {
    pub text: String,
}

/// Encodes domain markup for Telegram. Empty markup encodes to `None` so
/// the field is left out of the request.
pub fn to_wire(markup: &ReplyMarkup) -> Option<WireMarkup> {
    if markup.is_empty() {
        return None;
    }
    match markup {
        ReplyMarkup::None => None,
        ReplyMarkup::Inline { rows } => Some(WireMarkup::Inline(InlineKeyboard {
            inline_keyboard: rows
                .iter()
                .map(|row| row.iter().map(inline_to_wire).collect())
                .collect(),
        })),
        ReplyMarkup::Plain {
            rows,
            resize,
            one_time,
        } => Some(WireMarkup::Keyboard(Keyboard {
            keyboard: rows
                .iter()
                .map(|row| {
                    row.iter()
                        .map(|b| WireButton {
                            text: b.text.clone(),
                        })
                        .collect()
                })
                .collect(),
            resize_keyboard: *resize,
            one_time_keyboard: *one_time,
        })),
    }
}

fn inline_to_wire(button: &InlineButton) -> WireInlineButton {
    let non_empty = |v: &Option<String>| v.clone().filter(|s| !s.is_empty());
    WireInlineButton {
        text: button.text.clone(),
        callback_data: non_empty(&button.callback_data),
        url: non_empty(&button.url),
    }
}

/// Decodes a Telegram `reply_markup` value.
///
/// `inline_keyboard` wins when both shapes are present. Anything
/// unrecognised decodes to [`ReplyMarkup::None`].
pub fn from_wire(value: &serde_json::Value) -> ReplyMarkup {
    if value.get("inline_keyboard").is_some() {
        if let Ok(kb) = serde_json::from_value::<InlineKeyboard>(value.clone()) {
            return ReplyMarkup::Inline {
                rows: kb
                    .inline_keyboard
                    .into_iter()
                    .map(|row| {
                        row.into_iter()
                            .map(|b| InlineButton {
                                text: b.text,
                                callback_data: b.callback_data,
                                url: b.url,
                            })
                            .collect()
                    })
                    .collect(),
            };
        }
    } else if value.get("keyboard").is_some()
        && let Ok(kb) = serde_json::from_value::<Keyboard>(value.clone())
    {
        return ReplyMarkup::Plain {
            rows: kb
                .keyboard
                .into_iter()
                .map(|row| row.into_iter().map(|b| Button { text: b.text }).collect())
                .collect(),
            resize: kb.resize_keyboard,
            one_time: kb.one_time_keyboard,
        };
    }
    ReplyMarkup::None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn inline_keyboard_encodes_without_empty_targets() {
        let markup = ReplyMarkup::Inline {
            rows: vec![vec![
                InlineButton::callback("Help", "help"),
                InlineButton {
                    text: "Site".into(),
                    callback_data: Some(String::new()),
                    url: Some("https://example.com".into()),
                },
            ]],
        };
        let value = serde_json::to_value(to_wire(&markup).unwrap()).unwrap();
        assert_eq!(
            value,
            json!({"inline_keyboard": [[
                {"text": "Help", "callback_data": "help"},
                {"text": "Site", "url": "https://example.com"}
            ]]})
        );
    }

    #[test]
    fn reply_keyboard_encodes_flags() {
        let markup = ReplyMarkup::Plain {
            rows: vec![vec![Button { text: "Yes".into() }, Button { text: "No".into() }]],
            resize: true,
            one_time: false,
        };
        let value = serde_json::to_value(to_wire(&markup).unwrap()).unwrap();
        assert_eq!(
            value,
            json!({
                "keyboard": [[{"text": "Yes"}, {"text": "No"}]],
                "resize_keyboard": true,
                "one_time_keyboard": false
            })
        );
    }

    #[test]
    fn empty_markup_is_omitted() {
        assert!(to_wire(&ReplyMarkup::None).is_none());
    }

    #[test]
    fn decodes_telegram_shapes() {
        let inline = from_wire(&json!({"inline_keyboard": [[{"text": "A", "callback_data": "a"}]]}));
        assert_eq!(
            inline,
            ReplyMarkup::Inline {
                rows: vec![vec![InlineButton::callback("A", "a")]]
            }
        );

        let plain = from_wire(&json!({"keyboard": [[{"text": "B"}]], "one_time_keyboard": true}));
        assert_eq!(
            plain,
            ReplyMarkup::Plain {
                rows: vec![vec![Button { text: "B".into() }]],
                resize: false,
                one_time: true,
            }
        );
    }

    #[test]
    fn inline_wins_and_unknown_is_none() {
        let both = from_wire(&json!({
            "inline_keyboard": [[{"text": "A", "callback_data": "a"}]],
            "keyboard": [[{"text": "B"}]]
        }));
        assert!(matches!(both, ReplyMarkup::Inline { .. }));
        assert_eq!(from_wire(&json!({"remove_keyboard": true})), ReplyMarkup::None);
        assert_eq!(from_wire(&json!("nope")), ReplyMarkup::None);
    }

    #[test]
    fn wire_round_trip_preserves_keyboard() {
        let markup = ReplyMarkup::Inline {
            rows: vec![
                vec![InlineButton::callback("1", "one")],
                vec![InlineButton::callback("2", "two")],
            ],
        };
        let value = serde_json::to_value(to_wire(&markup).unwrap()).unwrap();
        assert_eq!(from_wire(&value), markup);
    }
}
