// SPDX-FileCopyrightText: 2026 Bizhelper Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scripted backend link.
//!
//! `MockBackend` answers `process_update` from a queue of pre-configured
//! outcomes and records every request it receives.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

use bizhelper_core::{
    BackendLink, BizError, SendMessageRequest, SendMessageResponse, UpdateRequest, UpdateResponse,
};

type Outcome = Result<UpdateResponse, BizError>;

#[derive(Clone, Default)]
pub struct MockBackend {
    outcomes: Arc<Mutex<VecDeque<Outcome>>>,
    requests: Arc<Mutex<Vec<UpdateRequest>>>,
    delay: Option<Duration>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a response for the next `process_update` call.
    pub async fn push_response(&self, response: UpdateResponse) {
        self.outcomes.lock().await.push_back(Ok(response));
    }

    /// Queues an error for the next `process_update` call.
    pub async fn push_error(&self, error: BizError) {
        self.outcomes.lock().await.push_back(Err(error));
    }

    /// Sleeps for `delay` before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Requests received so far.
    pub async fn requests(&self) -> Vec<UpdateRequest> {
        self.requests.lock().await.clone()
    }
}

#[async_trait]
impl BackendLink for MockBackend {
    async fn process_update(&self, request: UpdateRequest) -> Result<UpdateResponse, BizError> {
        self.requests.lock().await.push(request);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        // An unscripted call answers with an empty success.
        self.outcomes
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| Ok(UpdateResponse::ok(Vec::new())))
    }

    async fn send_message(
        &self,
        request: SendMessageRequest,
    ) -> Result<SendMessageResponse, BizError> {
        if request.chat_id == 0 {
            return Err(BizError::InvalidArgument("chat_id must not be 0".into()));
        }
        Ok(SendMessageResponse {
            success: true,
            error: String::new(),
        })
    }
}
