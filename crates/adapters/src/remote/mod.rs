// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Remote navigation store adapters

mod http;

pub use http::HttpRemote;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeRemote, RemoteGate};

use async_trait::async_trait;
use navedit_core::SavePayload;
use thiserror::Error;

/// Errors from submitting to the remote store
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server rejected save with status {0}")]
    Status(u16),
    #[error("could not encode payload: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Adapter for the remote navigation store.
///
/// The store is a capability with two outcomes: the payload was accepted,
/// or the submission failed.
#[async_trait]
pub trait RemoteAdapter: Clone + Send + Sync + 'static {
    /// Submit the full item set together with pending changes
    async fn submit(&self, payload: &SavePayload) -> Result<(), RemoteError>;
}
