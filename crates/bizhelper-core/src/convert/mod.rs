// SPDX-FileCopyrightText: 2026 Bizhelper Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pure mappings between the wire schema ([`crate::protocol`]) and the
//! domain schema ([`crate::domain`]).
//!
//! Every wire field either has a mapping here or is listed as ignored in
//! the field tables of the unit tests.

pub mod markup;
pub mod message;

pub use markup::{to_domain_markup, to_proto_markup};
pub use message::{
    to_callback_log, to_domain_message, to_domain_user, to_incoming_message, to_proto_response,
    to_proto_user,
};

/// Maps a proto3 string to `None` when empty.
pub(crate) fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
