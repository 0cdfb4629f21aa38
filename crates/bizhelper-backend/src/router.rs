// SPDX-FileCopyrightText: 2026 Bizhelper Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Update routing with selectable dispatch strategy.
//!
//! Fan-out runs every populated branch concurrently and merges the results;
//! first-match runs only the first populated branch, message before callback.

use bizhelper_config::RouteStrategy;
use bizhelper_core::protocol::{UpdateRequest, UpdateResponse};
use bizhelper_core::BizError;
use tracing::{debug, warn};

use crate::aggregate::aggregate;
use crate::handlers::UpdateHandlers;

/// Dispatches update envelopes to the per-kind handlers.
#[derive(Clone)]
pub struct UpdateRouter {
    handlers: UpdateHandlers,
    strategy: RouteStrategy,
}

impl UpdateRouter {
    pub fn new(handlers: UpdateHandlers, strategy: RouteStrategy) -> Self {
        Self { handlers, strategy }
    }

    pub fn strategy(&self) -> RouteStrategy {
        self.strategy
    }

    /// Routes one envelope.
    ///
    /// Fails with [`BizError::InvalidArgument`] when the envelope carries
    /// neither a message nor a callback. Handler failures never surface as
    /// `Err`; they are folded into the response's `error` field.
    pub async fn route(&self, request: &UpdateRequest) -> Result<UpdateResponse, BizError> {
        if request.is_empty() {
            return Err(BizError::InvalidArgument(
                "no message or callback provided".into(),
            ));
        }

        let outcomes = match self.strategy {
            RouteStrategy::FanOut => self.fan_out(request).await,
            RouteStrategy::FirstMatch => self.first_match(request).await,
        };

        let mut partials = Vec::with_capacity(outcomes.len());
        let mut errors = Vec::new();
        for outcome in outcomes {
            match outcome {
                Ok(partial) => partials.push(partial),
                Err(e) => {
                    warn!(update_id = request.update_id, error = %e, "handler failed");
                    errors.push(e);
                }
            }
        }

        let merged = aggregate(partials, errors)?;
        debug!(
            update_id = request.update_id,
            strategy = ?self.strategy,
            success = merged.success,
            messages = merged.messages.len(),
            "update routed"
        );
        Ok(merged)
    }

    /// Runs both branches concurrently; results come back message first.
    async fn fan_out(&self, request: &UpdateRequest) -> Vec<Result<UpdateResponse, BizError>> {
        let message = async {
            match &request.message {
                Some(msg) => Some(self.handlers.process_message(msg).await),
                None => None,
            }
        };
        let callback = async {
            match &request.callback_query {
                Some(cb) => Some(self.handlers.process_callback(cb).await),
                None => None,
            }
        };
        let (message, callback) = tokio::join!(message, callback);
        message.into_iter().chain(callback).collect()
    }

    async fn first_match(&self, request: &UpdateRequest) -> Vec<Result<UpdateResponse, BizError>> {
        if let Some(msg) = &request.message {
            vec![self.handlers.process_message(msg).await]
        } else if let Some(cb) = &request.callback_query {
            vec![self.handlers.process_callback(cb).await]
        } else {
            Vec::new()
        }
    }
}
