// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Local cache gateway for the `{items, changes}` record

use navedit_core::NavState;
use std::io;
use thiserror::Error;

/// Errors that can occur reading or writing the cache slot
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("write rejected: {0}")]
    Rejected(String),
}

/// Durable slot holding the last persisted menu state
pub trait CacheGateway: Send + Sync + 'static {
    /// Read the slot. `Ok(None)` means nothing has been stored yet.
    fn read(&self) -> Result<Option<NavState>, CacheError>;

    /// Replace the slot contents
    fn save(&self, state: &NavState) -> Result<(), CacheError>;

    /// Read the slot, treating any failure as an empty slot
    fn load(&self) -> Option<NavState> {
        match self.read() {
            Ok(Some(state)) => Some(state),
            Ok(None) => {
                tracing::debug!("no cached navigation state");
                None
            }
            Err(e) => {
                tracing::warn!(error = %e, "discarding unreadable navigation cache");
                None
            }
        }
    }
}
