// SPDX-FileCopyrightText: 2026 Bizhelper Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client side of the backend RPC link.

use std::time::Duration;

use async_trait::async_trait;
use bizhelper_core::{
    BackendLink, BizError, RpcStatus, SendMessageRequest, SendMessageResponse, UpdateRequest,
    UpdateResponse,
};
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

const PROCESS_UPDATE_PATH: &str = "/rpc/process_update";
const SEND_MESSAGE_PATH: &str = "/rpc/send_message";

/// [`BackendLink`] that talks to a remote backend over JSON/HTTP.
#[derive(Debug, Clone)]
pub struct RpcBackendLink {
    client: reqwest::Client,
    base_url: String,
}

impl RpcBackendLink {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, BizError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| BizError::Rpc {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    async fn call<Req, Resp>(&self, path: &str, request: &Req) -> Result<Resp, BizError>
    where
        Req: Serialize + Sync,
        Resp: DeserializeOwned,
    {
        let url = format!("{}{path}", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| BizError::Rpc {
                message: format!("{path} request failed: {e}"),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| BizError::Rpc {
            message: format!("failed to read {path} response: {e}"),
            source: Some(Box::new(e)),
        })?;
        debug!(path, status = %status, "backend responded");

        if status.is_success() {
            return serde_json::from_slice(&body).map_err(|e| BizError::Rpc {
                message: format!("failed to parse {path} response: {e}"),
                source: Some(Box::new(e)),
            });
        }

        match serde_json::from_slice::<RpcStatus>(&body) {
            Ok(rpc_status) => Err(rpc_status.into_error()),
            Err(_) => Err(BizError::Rpc {
                message: format!(
                    "backend returned {status}: {}",
                    String::from_utf8_lossy(&body)
                ),
                source: None,
            }),
        }
    }
}

#[async_trait]
impl BackendLink for RpcBackendLink {
    async fn process_update(&self, request: UpdateRequest) -> Result<UpdateResponse, BizError> {
        self.call(PROCESS_UPDATE_PATH, &request).await
    }

    async fn send_message(
        &self,
        request: SendMessageRequest,
    ) -> Result<SendMessageResponse, BizError> {
        self.call(SEND_MESSAGE_PATH, &request).await
    }
}
