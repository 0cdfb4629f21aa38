// SPDX-FileCopyrightText: 2026 Bizhelper Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The RPC contract between the gateway and the backend service.

use async_trait::async_trait;

use crate::error::BizError;
use crate::protocol::{SendMessageRequest, SendMessageResponse, UpdateRequest, UpdateResponse};

/// Link to the backend business service.
///
/// Implemented in-process by the backend itself and over HTTP by the
/// gateway's RPC client, so the webhook handler cannot tell them apart.
#[async_trait]
pub trait BackendLink: Send + Sync + 'static {
    /// Routes one update and returns the merged response.
    ///
    /// Fails with [`BizError::InvalidArgument`] when the update carries
    /// neither a message nor a callback.
    async fn process_update(&self, request: UpdateRequest) -> Result<UpdateResponse, BizError>;

    /// Asks the backend to send a message on the caller's behalf.
    async fn send_message(
        &self,
        request: SendMessageRequest,
    ) -> Result<SendMessageResponse, BizError>;
}
