// SPDX-FileCopyrightText: 2026 Bizhelper Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Telegram webhook gateway for the Bizhelper relay.
//!
//! Receives Telegram updates on `POST /webhook`, forwards them to the
//! backend through a [`BackendLink`](bizhelper_core::BackendLink) and
//! delivers the replies through a
//! [`DeliveryChannel`](bizhelper_core::DeliveryChannel).

pub mod handlers;
pub mod rpc_client;
pub mod server;
pub mod update;

pub use rpc_client::RpcBackendLink;
pub use server::{gateway_router, start_server, GatewayState};
pub use update::TelegramUpdate;
