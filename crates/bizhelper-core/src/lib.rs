// SPDX-FileCopyrightText: 2026 Bizhelper Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Bizhelper bot relay.
//!
//! This crate holds the two schemas the services exchange (the RPC wire
//! schema and the domain schema), the converters between them, the shared
//! error type, and the collaborator traits every other crate implements.

pub mod convert;
pub mod domain;
pub mod error;
pub mod protocol;
pub mod traits;

// Re-export key items at crate root for ergonomic imports.
pub use domain::{
    Button, CallbackLog, Direction, DomainMessage, IncomingMessage, InlineButton,
    MessageResponse, MessageStatus, ReplyMarkup, User,
};
pub use error::BizError;
pub use protocol::{
    OutgoingMessage, RpcCode, RpcStatus, SendMessageRequest, SendMessageResponse, UpdateRequest,
    UpdateResponse,
};
pub use traits::{BackendLink, DeliveryChannel, MessageRepository};
