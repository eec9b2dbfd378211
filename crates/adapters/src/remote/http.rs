// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP remote adapter

use super::{RemoteAdapter, RemoteError};
use async_trait::async_trait;
use navedit_core::SavePayload;
use std::fmt;
use std::time::Duration;

/// Posts save payloads as JSON to a single endpoint
#[derive(Clone)]
pub struct HttpRemote {
    agent: ureq::Agent,
    endpoint: String,
    token: Option<String>,
}

impl HttpRemote {
    /// Create an adapter for `endpoint`, sending `token` as a bearer credential
    pub fn new(endpoint: impl Into<String>, token: Option<String>, timeout: Duration) -> Self {
        let config = ureq::Agent::config_builder()
            .timeout_global(Some(timeout))
            .build();
        Self {
            agent: ureq::Agent::new_with_config(config),
            endpoint: endpoint.into(),
            token,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl fmt::Debug for HttpRemote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpRemote")
            .field("endpoint", &self.endpoint)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

#[async_trait]
impl RemoteAdapter for HttpRemote {
    async fn submit(&self, payload: &SavePayload) -> Result<(), RemoteError> {
        let body = serde_json::to_string(payload)?;
        let agent = self.agent.clone();
        let endpoint = self.endpoint.clone();
        let token = self.token.clone();

        // ureq is blocking; keep it off the async workers
        tokio::task::spawn_blocking(move || {
            let mut request = agent
                .post(endpoint.as_str())
                .header("Content-Type", "application/json");
            if let Some(token) = &token {
                request = request.header("Authorization", format!("Bearer {}", token));
            }

            match request.send(body) {
                Ok(_) => Ok(()),
                Err(ureq::Error::StatusCode(code)) => Err(RemoteError::Status(code)),
                Err(e) => Err(RemoteError::Transport(e.to_string())),
            }
        })
        .await
        .map_err(|e| RemoteError::Transport(format!("request task failed: {}", e)))?
    }
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod tests;
