// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake remote adapter for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{RemoteAdapter, RemoteError};
use async_trait::async_trait;
use navedit_core::SavePayload;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::{Notify, Semaphore};

/// Fake remote store that records submissions
#[derive(Clone, Default)]
pub struct FakeRemote {
    submissions: Arc<Mutex<Vec<SavePayload>>>,
    failures_left: Arc<AtomicUsize>,
    gate: Arc<Mutex<Option<Arc<Semaphore>>>>,
    entered: Arc<Notify>,
}

/// Holds submissions in flight until released
pub struct RemoteGate {
    semaphore: Arc<Semaphore>,
    entered: Arc<Notify>,
}

impl RemoteGate {
    /// Wait until a submission has reached the remote
    pub async fn entered(&self) {
        self.entered.notified().await;
    }

    /// Let one held submission complete
    pub fn release(&self) {
        self.semaphore.add_permits(1);
    }
}

impl FakeRemote {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every payload submitted so far, including failed attempts
    pub fn submissions(&self) -> Vec<SavePayload> {
        self.submissions
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Fail the next `count` submissions with a server error
    pub fn fail_next(&self, count: usize) {
        self.failures_left.store(count, Ordering::SeqCst);
    }

    /// Hold every following submission until the returned gate releases it
    pub fn hold(&self) -> RemoteGate {
        let semaphore = Arc::new(Semaphore::new(0));
        *self.gate.lock().unwrap_or_else(|e| e.into_inner()) = Some(Arc::clone(&semaphore));
        RemoteGate {
            semaphore,
            entered: Arc::clone(&self.entered),
        }
    }
}

#[async_trait]
impl RemoteAdapter for FakeRemote {
    async fn submit(&self, payload: &SavePayload) -> Result<(), RemoteError> {
        self.submissions
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(payload.clone());
        self.entered.notify_one();

        let gate = self.gate.lock().unwrap_or_else(|e| e.into_inner()).clone();
        if let Some(gate) = gate {
            gate.acquire()
                .await
                .map_err(|_| RemoteError::Transport("gate closed".to_string()))?
                .forget();
        }

        let failing = self
            .failures_left
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if failing {
            return Err(RemoteError::Status(503));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
