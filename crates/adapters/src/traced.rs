// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced adapter wrappers for consistent observability

use crate::remote::{RemoteAdapter, RemoteError};
use async_trait::async_trait;
use navedit_core::SavePayload;
use tracing::Instrument;

/// Wrapper that adds tracing to any RemoteAdapter
#[derive(Clone)]
pub struct TracedRemote<R> {
    inner: R,
}

impl<R> TracedRemote<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &R {
        &self.inner
    }
}

#[async_trait]
impl<R: RemoteAdapter> RemoteAdapter for TracedRemote<R> {
    async fn submit(&self, payload: &SavePayload) -> Result<(), RemoteError> {
        let span = tracing::info_span!(
            "remote.submit",
            items = payload.items.len(),
            changes = payload.changes.len()
        );

        async {
            tracing::info!(timestamp = %payload.timestamp, "submitting");

            let start = std::time::Instant::now();
            let result = self.inner.submit(payload).await;
            let elapsed = start.elapsed();

            match &result {
                Ok(()) => tracing::info!(elapsed_ms = elapsed.as_millis() as u64, "accepted"),
                Err(e) => tracing::error!(
                    elapsed_ms = elapsed.as_millis() as u64,
                    error = %e,
                    "submit failed"
                ),
            }

            result
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
