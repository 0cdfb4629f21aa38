// SPDX-FileCopyrightText: 2026 Bizhelper Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Backend service for the Bizhelper relay.
//!
//! This crate provides:
//! - [`BackendService`]: the [`BackendLink`] implementation behind the RPC surface
//! - [`UpdateRouter`]: fan-out or first-match dispatch of update envelopes
//! - [`aggregate`]: merging of partial handler results
//! - [`rpc_router`] / [`start_rpc_server`]: the JSON-over-HTTP server

pub mod aggregate;
pub mod commands;
pub mod handlers;
pub mod router;
pub mod rpc;
pub mod service;

use std::sync::Arc;

use async_trait::async_trait;
use bizhelper_config::RouteStrategy;
use bizhelper_core::convert::{to_incoming_message, to_proto_response};
use bizhelper_core::{
    BackendLink, BizError, MessageRepository, SendMessageRequest, SendMessageResponse,
    UpdateRequest, UpdateResponse,
};
use chrono::Utc;

pub use aggregate::aggregate;
pub use commands::{CommandHandler, CommandRegistry};
pub use handlers::UpdateHandlers;
pub use router::UpdateRouter;
pub use rpc::{rpc_router, start_rpc_server};
pub use service::{generate_reply, BizService, Reply};

/// In-process backend: routes updates and answers outbound requests.
#[derive(Clone)]
pub struct BackendService {
    router: UpdateRouter,
    service: BizService,
}

impl BackendService {
    /// Builds a backend with the default command set.
    pub fn new(repo: Arc<dyn MessageRepository>, strategy: RouteStrategy) -> Self {
        Self::with_commands(repo, strategy, CommandRegistry::default())
    }

    pub fn with_commands(
        repo: Arc<dyn MessageRepository>,
        strategy: RouteStrategy,
        commands: CommandRegistry,
    ) -> Self {
        let service = BizService::new(repo);
        let handlers = UpdateHandlers::new(service.clone(), commands);
        Self {
            router: UpdateRouter::new(handlers, strategy),
            service,
        }
    }
}

#[async_trait]
impl BackendLink for BackendService {
    async fn process_update(&self, request: UpdateRequest) -> Result<UpdateResponse, BizError> {
        self.router.route(&request).await
    }

    async fn send_message(
        &self,
        request: SendMessageRequest,
    ) -> Result<SendMessageResponse, BizError> {
        if request.chat_id == 0 {
            return Err(BizError::InvalidArgument("chat_id must not be 0".into()));
        }
        let incoming = to_incoming_message(&request, Utc::now());
        let response = self.service.answer_incoming(incoming).await?;
        Ok(to_proto_response(Some(&response)))
    }
}
